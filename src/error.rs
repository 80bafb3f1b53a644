//! Crate error type.
//!
//! The allocator itself is total and never returns an error. These variants
//! cover the fallible edges: parsing dates from strings, checked
//! window construction, and configuration loading.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by fallible constructors and config loading.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// A string could not be parsed as a `YYYY-MM-DD` date.
    #[error("invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A weekday name was not recognized.
    #[error("unknown weekday '{0}'")]
    UnknownWeekday(String),

    /// Window end precedes its start.
    #[error("planning window ends ({end}) before it starts ({start})")]
    WindowEndsBeforeStart { start: NaiveDate, end: NaiveDate },

    /// Intensive cutover lies outside `[start, end]`.
    #[error("intensive cutover {cutover} lies outside window {start}..={end}")]
    CutoverOutsideWindow {
        start: NaiveDate,
        end: NaiveDate,
        cutover: NaiveDate,
    },

    /// TOML configuration could not be decoded.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Parses an ISO `YYYY-MM-DD` date.
pub(crate) fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|source| {
        PlannerError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}
