//! Point-free combinators.
//!
//! Everything here builds plain closures, so the results can be stored,
//! passed around and composed again.
//!
//! # Macros
//!
//! - [`pipe!`]: left-to-right composition
//! - [`compose!`]: right-to-left composition
//! - [`curry!`]: one argument at a time, with [`apply!`] to feed several
//! - [`cond!`]: first-matching-predicate dispatch
//! - [`matching!`]: equality dispatch with a fallback value
//!
//! # Functions
//!
//! - [`identity`], [`constant`], [`not`]
//! - [`prop`] and [`safe_prop`] for keyed access, [`head`], [`last`],
//!   [`safe_head`] and [`safe_last`] for slice ends
//! - [`map`] to lift a function over any [`Functor`](crate::typeclass::Functor)
//!
//! # Examples
//!
//! ```
//! use pointfree::compose::{safe_head, map};
//! use pointfree::control::Maybe;
//! use pointfree::{apply, compose, curry, pipe};
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! assert_eq!(pipe!(add_one, double)(3), 8);
//! assert_eq!(compose!(add_one, double)(3), 7);
//!
//! let add3 = curry!(|a: i32, b: i32, c: i32| a + b + c);
//! assert_eq!(add3(1)(2)(3), apply!(add3, 1, 2, 3));
//!
//! let first_doubled = pipe!(|items: &[i32]| safe_head(items), map(double));
//! assert_eq!(first_doubled(&[4, 5]), Maybe::Just(8));
//! ```
//!
//! # Laws
//!
//! - `compose!(f, compose!(g, h))` behaves as `compose!(compose!(f, g), h)`
//! - `pipe!(f, g)` behaves as `compose!(g, f)`
//! - `identity` is the unit of both

mod access;
mod apply_macro;
mod compose_macro;
mod cond_macro;
mod lift;
mod matching_macro;
mod pipe_macro;
mod utils;

pub use access::{Keyed, head, last, prop, safe_head, safe_last, safe_prop};
pub use lift::map;
pub use utils::{constant, identity, not};

pub use crate::apply;
pub use crate::compose;
pub use crate::cond;
pub use crate::matching;
pub use crate::pipe;
pub use pointfree_derive::curry;
