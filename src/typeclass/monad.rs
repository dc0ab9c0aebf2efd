//! Monad type class - sequencing computations within a context.
//!
//! `flat_map` (the `chain` of other libraries) runs a function that itself
//! produces a container and flattens the result, so a chain of fallible or
//! deferred steps never nests containers.
//!
//! # Laws
//!
//! With `unit` standing for each container's own constructor
//! (`Maybe::just`, `Either::success`, `IO::pure`, `vec![x]`):
//!
//! ```text
//! unit(a).flat_map(f)                == f(a)
//! m.flat_map(unit)                   == m
//! m.flat_map(f).flat_map(g)          == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! There is no `pure` method on the trait: a re-runnable `IO` can only
//! produce a value more than once if it can clone it, a bound the other
//! containers do not need.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Option<i32> {
//!     text.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42").flat_map(parse_positive).flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::functor::Functor;

/// Sequencing of container-producing functions.
pub trait Monad: Functor {
    /// Applies `function` to the held value(s) and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: Fn(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

impl<T> Monad for Vec<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: Fn(T) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }
}
