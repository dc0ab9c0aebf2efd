//! Task - a deferred, re-runnable asynchronous effect.
//!
//! `Task<A, Args>` wraps an async function from `Args` to `A`. Building a
//! task, or chaining [`Task::map`] / [`Task::flat_map`] onto it, executes
//! nothing: the wrapped function is called only by [`Task::run`], which
//! forwards the run-time arguments and hands back the pending result without
//! polling it. The caller's executor drives that future; continuations added
//! with `map` execute after the underlying computation resolves.
//!
//! Errors are values of the output type (`Task<Result<T, E>, Args>`) and are
//! never caught or swallowed; [`Task::map_ok`] and [`Task::map_err`] touch
//! only their own side. The only built-in latency bound is
//! [`Task::timeout`]; there is no cancellation beyond dropping the future.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::effect::Task;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let greet = Task::new(|(name, excited): (String, bool)| async move {
//!     if excited { format!("hello, {name}!") } else { format!("hello, {name}") }
//! })
//! .map(|greeting| greeting.to_uppercase());
//!
//! assert_eq!(greet.run(("ada".to_string(), true)).await, "HELLO, ADA!");
//! assert_eq!(greet.run(("alan".to_string(), false)).await, "HELLO, ALAN");
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::error::TimeoutError;

type TaskFunction<A, Args> = dyn Fn(Args) -> BoxFuture<'static, A> + Send + Sync;

/// A suspended async computation from `Args` to `A`.
///
/// Use a tuple for several positional arguments and `()` for none.
pub struct Task<A, Args = ()> {
    run_task: Arc<TaskFunction<A, Args>>,
}

impl<A, Args> Clone for Task<A, Args> {
    fn clone(&self) -> Self {
        Self {
            run_task: Arc::clone(&self.run_task),
        }
    }
}

impl<A, Args> fmt::Debug for Task<A, Args> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Task").finish_non_exhaustive()
    }
}

// =============================================================================
// Constructors and execution
// =============================================================================

impl<A, Args> Task<A, Args>
where
    A: Send + 'static,
    Args: Send + 'static,
{
    /// Wraps an async function without calling it.
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            run_task: Arc::new(move |arguments| action(arguments).boxed()),
        }
    }

    /// A task that ignores its arguments and resolves to a clone of `value`.
    pub fn pure(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::new(move |_| futures::future::ready(value.clone()))
    }

    /// Calls the wrapped function with `arguments` and returns the pending
    /// result.
    ///
    /// Every call starts a fresh execution. Whatever the computation
    /// produces (including an `Err` output or a panic) reaches the caller
    /// that awaits the future.
    pub fn run(&self, arguments: Args) -> BoxFuture<'static, A> {
        tracing::trace!(target: "pointfree::effect", "running Task");
        (self.run_task)(arguments)
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Applies `function` to the resolved value.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Task<B, Args>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: Send + 'static,
    {
        let function = Arc::new(function);
        Task::new(move |arguments| {
            let pending = self.run(arguments);
            let function = Arc::clone(&function);
            async move { function(pending.await) }
        })
    }

    /// Continues with a task built from the resolved value.
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> Task<B, Args>
    where
        F: Fn(A) -> Task<B> + Send + Sync + 'static,
        B: Send + 'static,
    {
        let function = Arc::new(function);
        Task::new(move |arguments| {
            let pending = self.run(arguments);
            let function = Arc::clone(&function);
            async move { function(pending.await).run(()).await }
        })
    }

    /// Bounds every run by `duration`.
    ///
    /// A run that overruns resolves to [`TimeoutError`] and its pending
    /// computation is dropped. Requires a tokio runtime with the time driver
    /// enabled.
    #[must_use]
    pub fn timeout(self, duration: Duration) -> Task<Result<A, TimeoutError>, Args> {
        Task::new(move |arguments| {
            let pending = self.run(arguments);
            async move {
                tokio::time::timeout(duration, pending).await.map_err(|_| {
                    tracing::debug!(target: "pointfree::effect", ?duration, "Task timed out");
                    TimeoutError { duration }
                })
            }
        })
    }
}

// =============================================================================
// Fallible tasks
// =============================================================================

impl<T, E, Args> Task<Result<T, E>, Args>
where
    T: Send + 'static,
    E: Send + 'static,
    Args: Send + 'static,
{
    /// Transforms a successful output; errors pass through untouched.
    #[must_use]
    pub fn map_ok<B, F>(self, function: F) -> Task<Result<B, E>, Args>
    where
        F: Fn(T) -> B + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.map(move |result| result.map(&function))
    }

    /// Transforms an error output; successes pass through untouched.
    #[must_use]
    pub fn map_err<G, F>(self, function: F) -> Task<Result<T, G>, Args>
    where
        F: Fn(E) -> G + Send + Sync + 'static,
        G: Send + 'static,
    {
        self.map(move |result| result.map_err(&function))
    }
}

static_assertions::assert_impl_all!(Task<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Task<String, (u8, String)>: Send, Sync, Clone);
