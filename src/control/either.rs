//! Either type - exactly one of a failure or a success.
//!
//! `Either<L, R>` is a closed two-variant sum: `Left(L)` carries a failure,
//! `Right(R)` carries a success. The tag never changes after construction.
//! Success-side operations leave a `Left` untouched and failure-side
//! operations leave a `Right` untouched, so a pipeline can be written for
//! the happy path and handle the failure once at the end.
//!
//! Because the enum is closed there is no "untagged" way to build one: every
//! value comes from [`Either::success`], [`Either::failure`], a variant
//! constructor or a conversion from `Result`.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::control::Either;
//!
//! fn parse(text: &str) -> Either<String, i32> {
//!     text.parse::<i32>()
//!         .map_err(|error| format!("{text}: {error}"))
//!         .into()
//! }
//!
//! let doubled = parse("21").map_success(|n| n * 2);
//! assert_eq!(doubled, Either::success(42));
//!
//! let failed = parse("x").map_success(|n| n * 2);
//! assert!(failed.is_failure());
//!
//! let message = failed.fold(|error| format!("error: {error}"), |n| n.to_string());
//! assert!(message.starts_with("error: x:"));
//! ```

use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A failure (`Left`) or a success (`Right`), never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure payload.
    Left(L),
    /// The success payload.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Builds a success.
    #[inline]
    pub const fn success(value: R) -> Self {
        Self::Right(value)
    }

    /// Builds a failure.
    #[inline]
    pub const fn failure(error: L) -> Self {
        Self::Left(error)
    }

    /// Returns `true` for a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` for a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Transforms the success payload; a failure passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::control::Either;
    ///
    /// let success: Either<&str, i32> = Either::success(5);
    /// assert_eq!(success.map_success(|n| n + 1), Either::success(6));
    ///
    /// let failure: Either<&str, i32> = Either::failure("e");
    /// assert!(failure.map_success(|n| n + 1).is_failure());
    /// ```
    #[inline]
    pub fn map_success<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms the failure payload; a success passes through unchanged.
    #[inline]
    pub fn map_failure<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(function(error)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Sequences a step that may fail. A failure short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::control::Either;
    ///
    /// let positive = |n: i32| {
    ///     if n > 0 { Either::success(n) } else { Either::failure("not positive") }
    /// };
    ///
    /// assert_eq!(Either::success(3).chain_success(positive), Either::success(3));
    /// assert_eq!(Either::success(-3).chain_success(positive), Either::failure("not positive"));
    /// ```
    #[inline]
    pub fn chain_success<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }

    /// Recovers from (or re-classifies) a failure. A success passes through.
    #[inline]
    pub fn chain_failure<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(error) => function(error),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms whichever side is present.
    #[inline]
    pub fn bimap<T, U, F, G>(self, on_failure: F, on_success: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(error) => Either::Left(on_failure(error)),
            Self::Right(value) => Either::Right(on_success(value)),
        }
    }

    /// Collapses both sides into one value.
    #[inline]
    pub fn fold<T, F, G>(self, on_failure: F, on_success: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) => on_failure(error),
            Self::Right(value) => on_success(value),
        }
    }

    /// Exchanges the failure and success sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(error) => Either::Right(error),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// The failure payload, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// The success payload, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }
}

impl<T> Either<T, T> {
    /// Returns the payload regardless of which side holds it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::control::Either;
    ///
    /// assert_eq!(Either::<i32, i32>::success(6).into_inner(), 6);
    /// assert_eq!(Either::<&str, &str>::failure("e").into_inner(), "e");
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> B,
    {
        self.map_success(function)
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> Either<L, B>,
    {
        self.chain_success(function)
    }
}
