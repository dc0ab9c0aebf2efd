//! Error types for the effect containers.

use std::time::Duration;

use thiserror::Error;

/// A [`Task`](super::Task) run through [`Task::timeout`](super::Task::timeout)
/// did not finish in time.
///
/// # Examples
///
/// ```rust
/// use pointfree::effect::TimeoutError;
/// use std::time::Duration;
///
/// let error = TimeoutError { duration: Duration::from_millis(250) };
/// assert_eq!(error.to_string(), "task did not complete within 250ms");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("task did not complete within {duration:?}")]
pub struct TimeoutError {
    /// The bound that was exceeded.
    pub duration: Duration,
}
