//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Vec<_>` as type constructors
//! directly. [`TypeConstructor`] records the element type of a container and
//! how to rebuild the same container around another element type, which is
//! all [`Functor`](super::Functor) and [`Monad`](super::Monad) need.
//!
//! # Example
//!
//! ```rust
//! use pointfree::typeclass::TypeConstructor;
//!
//! fn rebuild<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers = vec![1, 2, 3];
//! let strings: Vec<String> = rebuild(numbers);
//! assert!(strings.is_empty());
//! ```

/// A container type parameterised by a single element type.
pub trait TypeConstructor {
    /// The element type currently held.
    type Inner;

    /// The same container holding `B` instead.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
