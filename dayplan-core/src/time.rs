//! Time-of-day values and the free-form time parser.
//!
//! Accepted input (case-insensitive, surrounding whitespace ignored):
//!
//! ```text
//! time      := hour (":" minute)? ws* meridiem?
//! hour      := 1*DIGIT
//! minute    := 1*DIGIT
//! meridiem  := "am" | "pm" | <empty>
//! ```
//!
//! Without a meridiem the hour is read as 24-hour notation, so `"13:00"` and
//! `"1pm"` are the same time. `"12am"` is *not* turned into midnight: it stays
//! hour 12, the same as `"12pm"`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseErrorKind};

/// A time of day in 24-hour form. Hour is 0-23, minute is 0-59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Time {
    hour: u8,
    minute: u8,
}

impl Time {
    pub const MIDNIGHT: Time = Time { hour: 0, minute: 0 };

    /// Returns `None` when either component is out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Time {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour as u32
    }

    pub fn minute(&self) -> u32 {
        self.minute as u32
    }

    /// `hour * 60 + minute`, the scalar used for ordering and layout.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// 12-hour display form, e.g. `"9am"` or `"1:30pm"`.
    pub fn label(&self) -> String {
        format_label(self.hour(), self.minute())
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.minutes_from_midnight()
            .cmp(&other.minutes_from_midnight())
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for Time {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

impl TryFrom<String> for Time {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_time(&value)
    }
}

impl From<Time> for String {
    fn from(time: Time) -> Self {
        time.to_string()
    }
}

impl From<NaiveTime> for Time {
    fn from(t: NaiveTime) -> Self {
        Time {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }
}

impl From<Time> for NaiveTime {
    fn from(t: Time) -> Self {
        NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or_default()
    }
}

#[derive(Clone, Copy)]
enum Meridiem {
    Am,
    Pm,
}

/// Parse a human time string such as `"9:30 AM"`, `"13:00"` or `"5pm"`.
pub fn parse_time(raw: &str) -> Result<Time, ParseError> {
    let input = raw.trim();
    let fail = |position: usize, kind: ParseErrorKind| ParseError {
        input: input.to_string(),
        position,
        kind,
    };

    if input.is_empty() {
        return Err(fail(0, ParseErrorKind::Empty));
    }

    let bytes = input.as_bytes();

    let hour_end = digits_end(bytes, 0);
    if hour_end == 0 {
        return Err(fail(0, ParseErrorKind::ExpectedHour));
    }

    let mut pos = hour_end;
    let mut minute_span = None;
    if bytes.get(pos) == Some(&b':') {
        let start = pos + 1;
        let end = digits_end(bytes, start);
        if end == start {
            return Err(fail(start, ParseErrorKind::ExpectedMinute));
        }
        minute_span = Some((start, end));
        pos = end;
    }

    while bytes.get(pos).is_some_and(|b| b.is_ascii_whitespace()) {
        pos += 1;
    }

    let rest = &input[pos..];
    let meridiem = if rest.is_empty() {
        None
    } else if rest.eq_ignore_ascii_case("am") {
        Some(Meridiem::Am)
    } else if rest.eq_ignore_ascii_case("pm") {
        Some(Meridiem::Pm)
    } else {
        return Err(fail(pos, ParseErrorKind::UnexpectedText));
    };

    // Digit runs too long for u32 are out of range by definition.
    let hour: u32 = input[..hour_end]
        .parse()
        .map_err(|_| fail(0, ParseErrorKind::HourOutOfRange))?;
    let minute: u32 = match minute_span {
        Some((start, end)) => input[start..end]
            .parse()
            .map_err(|_| fail(start, ParseErrorKind::MinuteOutOfRange))?,
        None => 0,
    };

    let hour = match meridiem {
        Some(Meridiem::Pm) if hour < 12 => hour + 12,
        _ => hour,
    };

    if hour > 23 {
        return Err(fail(0, ParseErrorKind::HourOutOfRange));
    }
    if minute > 59 {
        let at = minute_span.map(|(start, _)| start).unwrap_or(0);
        return Err(fail(at, ParseErrorKind::MinuteOutOfRange));
    }

    Ok(Time {
        hour: hour as u8,
        minute: minute as u8,
    })
}

fn digits_end(bytes: &[u8], from: usize) -> usize {
    let mut end = from;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
    }
    end
}

/// Format an hour/minute pair for display: `"12am"`, `"9am"`, `"1:05pm"`.
///
/// Hours wrap every 24, so the end-of-day heading at hour 24 reads `"12am"`.
pub fn format_label(hour: u32, minute: u32) -> String {
    let hour = hour % 24;
    let suffix = if hour < 12 { "am" } else { "pm" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };

    if minute == 0 {
        format!("{display}{suffix}")
    } else {
        format!("{display}:{minute:02}{suffix}")
    }
}
