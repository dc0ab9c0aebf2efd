//! Value containers for absence, failure and dispatch.
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Either`]: a failure (`Left`) or a success (`Right`)
//! - [`Matcher`]: first-match-wins selection on a subject
//!
//! All three are immutable: every operation consumes the container and
//! returns a new one.
//!
//! # Example
//!
//! ```rust
//! use pointfree::control::{Either, Maybe, Matcher};
//!
//! let port = Maybe::from(std::env::var("POINTFREE_DOC_PORT").ok())
//!     .flat_map(|raw| Maybe::from(raw.parse::<u16>().ok()))
//!     .or_else(8080);
//! assert_eq!(port.value(), Some(8080));
//!
//! let checked: Either<&str, u16> = Either::success(8080)
//!     .chain_success(|port| if port > 1024 { Either::success(port) } else { Either::failure("privileged") });
//! assert!(checked.is_success());
//!
//! let scheme = Matcher::of(443).on(80, |_| "http").on(443, |_| "https").resolve();
//! assert_eq!(scheme, Ok("https"));
//! ```

mod either;
mod matcher;
mod maybe;

pub use either::Either;
pub use matcher::{Matcher, UnmatchedError};
pub use maybe::Maybe;
