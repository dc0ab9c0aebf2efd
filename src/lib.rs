//! # pointfree
//!
//! Small, lawful containers and point-free combinators.
//!
//! ## Overview
//!
//! - **Containers**: [`Maybe`](control::Maybe) for optional values,
//!   [`Either`](control::Either) for success or failure,
//!   [`Matcher`](control::Matcher) for value dispatch
//! - **Deferred effects**: [`IO`](effect::IO) runs a synchronous action on
//!   demand, [`Task`](effect::Task) does the same for async functions
//! - **Combinators**: `pipe!`, `compose!`, `curry!`, `cond!`, `matching!`,
//!   keyed access and a generic `map`
//! - **Type classes**: [`Functor`](typeclass::Functor) and
//!   [`Monad`](typeclass::Monad), shared by the containers above and by
//!   `Option`, `Result` and `Vec`
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Functor` and `Monad`
//! - `control`: `Maybe`, `Either`, `Matcher`
//! - `compose`: combinators and macros (pulls in `typeclass` and `control`)
//! - `effect`: `IO`
//! - `async`: `Task` on top of `tokio` and `futures`
//! - `interop`: adapters for date, phone and file collaborators
//! - `serde`: `Serialize`/`Deserialize` for `Maybe` and `Either`
//! - `full`: everything
//!
//! All features except `serde` are enabled by default.
//!
//! ## Example
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! fn parse_port(text: &str) -> Either<String, u16> {
//!     text.parse::<u16>().map_err(|_| format!("not a port: {text}")).into()
//! }
//!
//! let port = pipe!(str::trim, parse_port);
//!
//! assert_eq!(port(" 8080 "), Either::Right(8080));
//! assert!(port("http").is_failure());
//!
//! let label = Maybe::just(8080).map(|port| format!(":{port}")).or_else(String::new());
//! assert_eq!(label.value(), Some(":8080".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "interop")]
pub mod interop;

#[cfg(feature = "compose")]
pub use pointfree_derive::curry;
