//! Type classes shared by every container in the crate.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation via GATs
//! - [`Functor`]: structure-preserving `fmap`
//! - [`Monad`]: flattening `flat_map`
//!
//! `Maybe`, `Either`, `IO`, `Option`, `Result` and `Vec` implement all
//! three, which is what lets [`compose::map`](crate::compose::map) lift a
//! plain function over any of them.
//!
//! # Example
//!
//! ```rust
//! use pointfree::typeclass::{Functor, Monad};
//!
//! fn double_all<F>(container: F) -> F::WithType<i32>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(vec![1, 2]), vec![2, 4]);
//! assert_eq!(double_all(Some(4)), Some(8));
//! assert_eq!(Some(3).flat_map(|n| if n > 2 { Some(n) } else { None }), Some(3));
//! ```

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
