//! Lifting a date engine into the control containers.
//!
//! The engine itself (parsing, formatting, calendar arithmetic) is supplied
//! by the caller through [`DateEngine`]; the helpers here only route its
//! results through [`Either`].

use crate::control::Either;

/// Calendar units accepted by [`DateEngine::add`] and
/// [`DateEngine::subtract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

/// Raw input handed to [`DateEngine::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateInput {
    /// Text to be read with an optional format pattern.
    Text(String),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
}

impl DateInput {
    /// `true` for blank text. Timestamps are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Timestamp(_) => false,
        }
    }

    /// The format pattern only applies to text; timestamps ignore it.
    fn pattern<'a>(&self, format: Option<&'a str>) -> Option<&'a str> {
        match self {
            Self::Text(_) => format,
            Self::Timestamp(_) => None,
        }
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for DateInput {
    fn from(milliseconds: i64) -> Self {
        Self::Timestamp(milliseconds)
    }
}

/// A date library as seen from this crate.
pub trait DateEngine {
    /// A point in time. Later instants compare greater.
    type Instant: Ord + Clone;
    /// Why an input could not be parsed.
    type Error;

    /// Reads `input`, using `format` as the pattern when one is given.
    fn parse(&self, input: &DateInput, format: Option<&str>) -> Result<Self::Instant, Self::Error>;

    /// Renders `instant` with `pattern`.
    fn format(&self, instant: &Self::Instant, pattern: &str) -> String;

    /// Moves `instant` forward by `amount` units.
    fn add(&self, instant: &Self::Instant, amount: i64, unit: TimeUnit) -> Self::Instant;

    /// Moves `instant` backward by `amount` units.
    fn subtract(&self, instant: &Self::Instant, amount: i64, unit: TimeUnit) -> Self::Instant {
        self.add(instant, amount.saturating_neg(), unit)
    }

    /// The current instant.
    fn now(&self) -> Self::Instant;
}

/// Parses `input`, with the failure on the `Left` side.
pub fn parse_date<E>(engine: &E, input: &DateInput, format: Option<&str>) -> Either<E::Error, E::Instant>
where
    E: DateEngine + ?Sized,
{
    engine.parse(input, input.pattern(format)).into()
}

/// Whether `input` is a readable date. Blank text is never valid.
pub fn is_valid_date<E>(engine: &E, input: &DateInput, format: Option<&str>) -> bool
where
    E: DateEngine + ?Sized,
{
    !input.is_empty() && parse_date(engine, input, format).is_success()
}

/// Whether `date` lies strictly before `reference`, or before now when no
/// reference is given.
pub fn is_in_past<E>(
    engine: &E,
    date: &DateInput,
    reference: Option<&E::Instant>,
    format: Option<&str>,
) -> Either<E::Error, bool>
where
    E: DateEngine + ?Sized,
{
    parse_date(engine, date, format).map_success(|instant| match reference {
        Some(reference) => instant < *reference,
        None => instant < engine.now(),
    })
}
