//! Error types for the dayplan pipeline.

use thiserror::Error;

use crate::time::Time;

/// What went wrong while reading a time string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    Empty,
    ExpectedHour,
    ExpectedMinute,
    UnexpectedText,
    HourOutOfRange,
    MinuteOutOfRange,
}

impl ParseErrorKind {
    fn describe(self) -> &'static str {
        match self {
            ParseErrorKind::Empty => "time is empty",
            ParseErrorKind::ExpectedHour => "expected an hour",
            ParseErrorKind::ExpectedMinute => "expected minutes after ':'",
            ParseErrorKind::UnexpectedText => "expected \"am\", \"pm\" or nothing",
            ParseErrorKind::HourOutOfRange => "hour must be between 0 and 23",
            ParseErrorKind::MinuteOutOfRange => "minute must be between 0 and 59",
        }
    }
}

/// A malformed time string.
///
/// `position` is a byte offset into the trimmed `input`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid time \"{input}\": {} (at position {position})", .kind.describe())]
pub struct ParseError {
    pub input: String,
    pub position: usize,
    pub kind: ParseErrorKind,
}

/// Errors that abort a schedule render pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Malformed JSON, a missing or mistyped field, or an unreadable time.
    #[error("Problem with the value at {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error(
        "Event cannot end before it starts: \"{description}\" at {location} ({start} - {end})"
    )]
    Validation {
        /// Position in the decoded list; `None` for an event built on its own.
        index: Option<usize>,
        description: String,
        location: String,
        start: Time,
        end: Time,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScheduleError {
    pub fn decode(path: impl Into<String>, reason: impl ToString) -> Self {
        ScheduleError::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for dayplan operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
