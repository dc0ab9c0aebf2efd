//! Procedural macros for `pointfree`.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Converts a multi-argument closure or function into curried form
//!
//! # Example
//!
//! ```rust,ignore
//! use pointfree::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! let add_five = add(5);
//! assert_eq!(add_five(10), 15);
//! assert_eq!(add_five(20), 25);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Converts a function of two or more arguments into a chain of
/// single-argument closures.
///
/// The arity is always explicit: either the parameter count of a closure
/// literal, or an integer literal following a function path.
///
/// Every intermediate closure can be reused; arguments are shared through
/// `Rc` and cloned out on the final call, so they must implement `Clone`.
///
/// # Examples
///
/// ```rust,ignore
/// use pointfree::curry;
///
/// let volume = curry!(|width: u32, height: u32, depth: u32| width * height * depth);
/// assert_eq!(volume(2)(3)(4), 24);
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// let curried = curry!(add_three, 3);
/// let add_one_and_two = curried(1)(2);
/// assert_eq!(add_one_and_two(3), 6);
/// assert_eq!(add_one_and_two(10), 13);
/// ```
///
/// # Compile Errors
///
/// - fewer than two arguments: `curry!(|a: i32| a)`
/// - a function path without arity: `curry!(add)`
/// - a non-integer arity: `curry!(add, "two")`
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::expand(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
