//! Small combinators used as building blocks in pipelines.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: ignores its argument and returns a fixed value
//! - [`not`]: negates a predicate

/// Returns the value unchanged.
///
/// The unit of composition: `pipe!()` and `compose!()` both evaluate to
/// this function, and inserting it anywhere in a pipeline changes nothing.
///
/// # Examples
///
/// ```
/// use pointfree::compose::identity;
/// use pointfree::pipe;
///
/// let double = |x: i32| x * 2;
///
/// assert_eq!(identity("same"), "same");
/// assert_eq!(pipe!(identity, double)(5), double(5));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T + Clone {
    move |_| value.clone()
}

/// Negates a predicate.
///
/// The returned predicate takes its argument by reference, so it composes
/// with [`Iterator::filter`] and with [`cond!`](crate::cond) clauses.
///
/// # Examples
///
/// ```
/// use pointfree::compose::not;
///
/// let is_blank = |text: &str| text.trim().is_empty();
/// let has_content = not(is_blank);
///
/// assert!(has_content("word"));
/// assert!(!has_content("   "));
/// ```
#[inline]
pub fn not<T: ?Sized, P>(predicate: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |value: &T| !predicate(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_keeps_unit() {
        assert_eq!(identity(()), ());
    }

    #[rstest]
    fn constant_ignores_its_input() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
        assert_eq!(always_hello(-1), "hello");
    }

    #[rstest]
    #[case(4, false)]
    #[case(7, true)]
    fn not_inverts_the_predicate(#[case] input: i32, #[case] expected: bool) {
        let is_odd = not(|n: &i32| n % 2 == 0);
        assert_eq!(is_odd(&input), expected);
    }

    #[rstest]
    fn not_works_with_filter() {
        let odd: Vec<i32> = (1..=6).filter(not(|n: &i32| n % 2 == 0)).collect();
        assert_eq!(odd, vec![1, 3, 5]);
    }
}
