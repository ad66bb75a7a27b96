//! Error types for calendar and time parsing.

/// Errors from calendar validation or time-string parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day do not form a valid Gregorian date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour/minute/second out of range.
    #[error("invalid time of day {hour:02}:{minute:02}:{second}")]
    InvalidTime { hour: u32, minute: u32, second: f64 },
    /// A date or time string could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}
