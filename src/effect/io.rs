//! IO - a deferred, re-runnable side effect.
//!
//! `IO<A>` describes a computation that produces an `A` and may touch the
//! outside world. Building or transforming an `IO` performs nothing; the
//! computation happens only inside [`IO::run`], and it happens again on
//! every call. Results are never cached, so running an `IO` twice repeats
//! its side effects twice (which is what makes retrying a failed effect a
//! matter of calling `run` again).
//!
//! # Examples
//!
//! ```rust
//! use pointfree::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let counter = Rc::new(Cell::new(0));
//! let tick = {
//!     let counter = Rc::clone(&counter);
//!     IO::new(move || {
//!         counter.set(counter.get() + 1);
//!         counter.get()
//!     })
//! };
//! let described = tick.map(|count| count * 10);
//!
//! // Nothing has run yet.
//! assert_eq!(counter.get(), 0);
//!
//! assert_eq!(described.run(), 10);
//! assert_eq!(described.run(), 20);
//! assert_eq!(counter.get(), 2);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A suspended computation producing `A` each time it is run.
///
/// Cloning an `IO` shares the wrapped function; both clones run it
/// independently.
pub struct IO<A> {
    run_io: Rc<dyn Fn() -> A>,
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            run_io: Rc::clone(&self.run_io),
        }
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("IO").finish_non_exhaustive()
    }
}

impl<A: 'static> IO<A> {
    /// Wraps a zero-argument computation without running it.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            run_io: Rc::new(action),
        }
    }

    /// An `IO` that yields a clone of `value` on every run.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Runs the computation and returns its result.
    ///
    /// Each call re-executes the wrapped function. Panics raised inside it
    /// propagate to the caller.
    pub fn run(&self) -> A {
        tracing::trace!(target: "pointfree::effect", "running IO");
        (self.run_io)()
    }

    /// Pipes the eventual result through `function`. Nothing runs until
    /// [`IO::run`] is called on the returned value.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run()))
    }

    /// Sequences an effect that depends on this one's result.
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run()).run())
    }

    /// Runs this effect, discards its result, then runs `next`.
    #[must_use]
    pub fn then<B: 'static>(self, next: IO<B>) -> IO<B> {
        IO::new(move || {
            self.run();
            next.run()
        })
    }

    /// Runs this effect and `other` in order and combines their results.
    #[must_use]
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IO::new(move || {
            let first = self.run();
            let second = other.run();
            function(first, second)
        })
    }
}

impl<A> TypeConstructor for IO<A> {
    type Inner = A;
    type WithType<B> = IO<B>;
}

impl<A: 'static> Functor for IO<A> {
    fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<A: 'static> Monad for IO<A> {
    fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_not_impl_any!(IO<i32>: Send, Sync);
