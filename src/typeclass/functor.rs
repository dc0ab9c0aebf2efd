//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape: an absent `Maybe` stays absent, a failed `Either` stays failed, a
//! `Vec` keeps its length and a deferred `IO` stays deferred.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Why `Fn` and not `FnOnce`
//!
//! Sequences call the function once per element and `IO` calls it once per
//! run, so the shared bound is `Fn`. Each container still offers an inherent
//! `map` with the loosest bound it can support.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::typeclass::Functor;
//!
//! let lengths: Vec<usize> = vec!["a", "bcd"].fmap(str::len);
//! assert_eq!(lengths, vec![1, 3]);
//!
//! let none: Option<i32> = None;
//! assert_eq!(none.fmap(|n| n + 1), None);
//! ```

use super::higher::TypeConstructor;

/// Structure-preserving mapping over the held value(s).
pub trait Functor: TypeConstructor {
    /// Applies `function` to every held value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces every held value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: Fn(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: Fn(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(5), Some("5".to_string()))]
    #[case(None, None)]
    fn option_fmap(#[case] input: Option<i32>, #[case] expected: Option<String>) {
        assert_eq!(input.fmap(|n| n.to_string()), expected);
    }

    #[rstest]
    fn result_fmap_leaves_errors_alone() {
        let failed: Result<i32, &str> = Err("boom");
        assert_eq!(failed.fmap(|n| n * 2), Err("boom"));

        let succeeded: Result<i32, &str> = Ok(21);
        assert_eq!(succeeded.fmap(|n| n * 2), Ok(42));
    }

    #[rstest]
    fn vec_fmap_maps_every_element() {
        assert_eq!(vec![1, 2, 3].fmap(|n| n * 10), vec![10, 20, 30]);
        assert_eq!(Vec::<i32>::new().fmap(|n| n * 10), Vec::<i32>::new());
    }

    #[rstest]
    fn replace_overwrites_each_element() {
        assert_eq!(vec![1, 2, 3].replace('x'), vec!['x', 'x', 'x']);
    }
}
