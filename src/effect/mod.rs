//! Deferred effects.
//!
//! - [`IO`]: a synchronous computation run on demand, re-executed on every run
//! - [`Task`] (feature `async`): an async function run on demand with
//!   arguments supplied at run time
//!
//! Neither container caches results or catches failures raised by the
//! functions it wraps.
//!
//! # Example
//!
//! ```rust
//! use pointfree::effect::IO;
//!
//! let read_setting = IO::new(|| std::env::var("POINTFREE_DOC_SETTING").ok());
//! let with_default = read_setting.map(|value| value.unwrap_or_else(|| "default".to_string()));
//! assert_eq!(with_default.run(), "default");
//! ```

mod io;

#[cfg(feature = "async")]
mod error;
#[cfg(feature = "async")]
mod task;

pub use io::IO;

#[cfg(feature = "async")]
pub use error::TimeoutError;
#[cfg(feature = "async")]
pub use task::Task;
