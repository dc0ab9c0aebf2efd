//! Point-free mapping over any [`Functor`].

use crate::typeclass::Functor;

/// Lifts `function` so it maps over a container instead of a bare value.
///
/// `map(f)(container)` is `container.fmap(f)`. The returned closure can be
/// stored and reused, and it slots into [`pipe!`](crate::pipe) between
/// steps that produce and consume containers.
///
/// # Examples
///
/// ```
/// use pointfree::compose::map;
/// use pointfree::control::Maybe;
/// use pointfree::pipe;
///
/// let double_all = map(|n: i32| n * 2);
/// assert_eq!(double_all(vec![1, 2, 3]), vec![2, 4, 6]);
///
/// let shout = pipe!(
///     |name: Option<&'static str>| Maybe::from(name),
///     map(|name: &'static str| name.to_uppercase()),
/// );
/// assert_eq!(shout(Some("ada")), Maybe::Just("ADA".to_string()));
/// assert_eq!(shout(None), Maybe::Nothing);
/// ```
pub fn map<C, B, F>(function: F) -> impl Fn(C) -> C::WithType<B>
where
    C: Functor,
    F: Fn(C::Inner) -> B + Clone + 'static,
    B: 'static,
{
    move |container: C| container.fmap(function.clone())
}
