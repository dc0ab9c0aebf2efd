//! Matcher - first-match-wins dispatch on a value.
//!
//! A [`Matcher`] holds a subject and, once an arm has matched, the result of
//! that arm. Arms are tried in call order; the first arm whose test value
//! equals the subject produces the result and every later arm is inert.
//! [`Matcher::or`] supplies a default for a matcher that is still unmatched.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::control::Matcher;
//!
//! let label = Matcher::of(2)
//!     .on(1, |_| "one")
//!     .on(2, |_| "two")
//!     .on(2, |_| "second two")
//!     .or("many")
//!     .resolve();
//! assert_eq!(label, Ok("two"));
//! ```

use thiserror::Error;

/// Returned by [`Matcher::resolve`] when no arm matched and no default was
/// given. Carries the subject back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no arm matched the subject and no default was given")]
pub struct UnmatchedError<T> {
    /// The subject that was being matched.
    pub subject: T,
}

/// A value under test together with the result of the first matching arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher<T, R> {
    subject: T,
    outcome: Option<R>,
}

impl<T, R> Matcher<T, R> {
    /// Starts matching on `subject`.
    #[inline]
    pub const fn of(subject: T) -> Self {
        Self {
            subject,
            outcome: None,
        }
    }

    /// Adds an arm.
    ///
    /// When the matcher is still unmatched and `subject == test`, the result
    /// becomes `function(&subject)`. Otherwise the matcher is returned as is
    /// and `function` is never called.
    #[inline]
    #[must_use]
    pub fn on<U, F>(self, test: U, function: F) -> Self
    where
        T: PartialEq<U>,
        F: FnOnce(&T) -> R,
    {
        if self.outcome.is_some() || self.subject != test {
            return self;
        }
        let outcome = function(&self.subject);
        Self {
            subject: self.subject,
            outcome: Some(outcome),
        }
    }

    /// Sets `fallback` as the result if nothing has matched yet.
    #[inline]
    #[must_use]
    pub fn or(self, fallback: R) -> Self {
        self.or_else(|_| fallback)
    }

    /// Computes the result from the subject if nothing has matched yet.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce(&T) -> R,
    {
        if self.outcome.is_some() {
            return self;
        }
        let outcome = function(&self.subject);
        Self {
            subject: self.subject,
            outcome: Some(outcome),
        }
    }

    /// Returns `true` once an arm (or a default) has produced a result.
    #[inline]
    pub const fn is_matched(&self) -> bool {
        self.outcome.is_some()
    }

    /// The subject being matched.
    #[inline]
    pub const fn subject(&self) -> &T {
        &self.subject
    }

    /// The current result, `None` when unmatched.
    #[inline]
    pub fn value(self) -> Option<R> {
        self.outcome
    }

    /// The current result.
    ///
    /// # Errors
    ///
    /// Returns [`UnmatchedError`] holding the subject when no arm matched and
    /// no default was set.
    #[inline]
    pub fn resolve(self) -> Result<R, UnmatchedError<T>> {
        match self.outcome {
            Some(outcome) => Ok(outcome),
            None => Err(UnmatchedError {
                subject: self.subject,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn later_arms_are_not_evaluated_after_a_match() {
        let mut evaluated = Vec::new();
        let result = Matcher::of(1)
            .on(1, |_| {
                evaluated.push("first");
                "a"
            })
            .on(1, |_| {
                evaluated.push("second");
                "b"
            })
            .resolve();

        assert_eq!(result, Ok("a"));
        assert_eq!(evaluated, vec!["first"]);
    }

    #[rstest]
    fn or_is_ignored_once_matched() {
        let matcher = Matcher::of('x').on('x', |c| c.to_ascii_uppercase()).or('?');
        assert_eq!(matcher.value(), Some('X'));
    }

    #[rstest]
    fn or_applies_when_unmatched() {
        let matcher = Matcher::of(7).on(1, |_| "one").or("other");
        assert!(matcher.is_matched());
        assert_eq!(matcher.resolve(), Ok("other"));
    }

    #[rstest]
    fn resolve_without_match_returns_the_subject() {
        let error = Matcher::<_, &str>::of(5).on(1, |_| "one").resolve().unwrap_err();
        assert_eq!(error, UnmatchedError { subject: 5 });
        assert_eq!(
            error.to_string(),
            "no arm matched the subject and no default was given"
        );
    }

    #[rstest]
    fn compares_across_borrowed_forms() {
        let matcher = Matcher::of(String::from("get"))
            .on("post", |_| 2)
            .on("get", |method| method.len());
        assert_eq!(matcher.subject(), "get");
        assert_eq!(matcher.value(), Some(3));
    }
}
