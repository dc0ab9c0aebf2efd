//! Maybe type - a value that may be absent.
//!
//! `Maybe<T>` is either `Just(value)` or `Nothing`. It is built from a raw,
//! possibly absent value with [`Maybe::of`], transformed with
//! [`Maybe::map`] / [`Maybe::flat_map`] without ever inspecting the absence
//! case, given a default with [`Maybe::or_else`], and finally unwrapped back
//! into a raw `Option` with [`Maybe::value`].
//!
//! # Examples
//!
//! ```rust
//! use pointfree::control::Maybe;
//!
//! let greeting = Maybe::of("world")
//!     .map(|name| format!("hello, {name}"))
//!     .or_else("hello, stranger".to_string());
//! assert_eq!(greeting.value(), Some("hello, world".to_string()));
//!
//! let missing: Maybe<&str> = Maybe::of(None);
//! let greeting = missing
//!     .map(|name| format!("hello, {name}"))
//!     .or_else("hello, stranger".to_string());
//! assert_eq!(greeting.value(), Some("hello, stranger".to_string()));
//! ```

use crate::typeclass::{Functor, Monad, TypeConstructor};

/// An optional value.
///
/// `Nothing` is the only absence marker; `Maybe::of(None)` and
/// `Maybe::nothing()` build the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value is held.
    #[default]
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    /// Wraps a raw value that may be absent.
    ///
    /// Accepts either a bare value or an `Option`, so both
    /// `Maybe::of(5)` and `Maybe::of(None)` work.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::control::Maybe;
    ///
    /// assert!(Maybe::of(5).is_just());
    /// assert!(Maybe::<i32>::of(None).is_nothing());
    /// ```
    #[inline]
    pub fn of(value: impl Into<Option<T>>) -> Self {
        value.into().map_or(Self::Nothing, Self::Just)
    }

    /// Wraps a present value.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// The absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Returns `true` when no value is held.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns `true` when a value is held.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Applies `function` to the held value.
    ///
    /// `Nothing` maps to `Nothing` without calling `function`. A panic inside
    /// `function` is not caught.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(2).map(|n| n * 10), Maybe::Just(20));
    /// assert_eq!(Maybe::<i32>::nothing().map(|n| n * 10), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a function that may itself produce an absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::control::Maybe;
    ///
    /// let parse = |text: &str| Maybe::from(text.parse::<i32>().ok());
    /// assert_eq!(Maybe::of("12").flat_map(parse), Maybe::Just(12));
    /// assert_eq!(Maybe::of("twelve").flat_map(parse), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Substitutes `fallback` when no value is held.
    ///
    /// A held value is returned unchanged. The fallback may itself be absent
    /// (`None`), in which case the result stays `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(1).or_else(9), Maybe::Just(1));
    /// assert_eq!(Maybe::<i32>::of(None).or_else(9), Maybe::Just(9));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else(self, fallback: impl Into<Option<T>>) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => Self::of(fallback),
        }
    }

    /// Returns the raw held value.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns the held value, or `default` when absent.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.value().unwrap_or(default)
    }

    /// Borrows the held value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::of(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.value()
    }
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(T) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}
