//! Events and the JSON decoder that produces them.
//!
//! The input is a JSON array of objects with four string fields:
//!
//! ```json
//! [{ "description": "Standup", "start": "9:30am", "end": "9:45am", "location": "Room 1" }]
//! ```
//!
//! Decoding is all-or-nothing. The first bad record aborts the whole decode
//! with an error that names the offending field path, e.g. `[2].start`.

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::time::{Time, parse_time};

/// A validated event. `start` never comes after `end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    description: String,
    start: Time,
    end: Time,
    location: String,
}

impl Event {
    /// Build an event, rejecting one that ends before it starts.
    pub fn new(
        description: impl Into<String>,
        start: Time,
        end: Time,
        location: impl Into<String>,
    ) -> ScheduleResult<Self> {
        let event = Event {
            description: description.into(),
            start,
            end,
            location: location.into(),
        };
        event.validate(None)?;
        Ok(event)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Time {
        self.end
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Length of the event in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes_from_midnight() - self.start.minutes_from_midnight()
    }

    fn validate(&self, index: Option<usize>) -> ScheduleResult<()> {
        if self.end.minutes_from_midnight() < self.start.minutes_from_midnight() {
            return Err(ScheduleError::Validation {
                index,
                description: self.description.clone(),
                location: self.location.clone(),
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// One record as it appears in the input, before its times are read.
#[derive(Debug, Deserialize)]
struct RawEvent {
    description: String,
    start: String,
    end: String,
    location: String,
}

impl RawEvent {
    fn into_event(self, index: usize) -> ScheduleResult<Event> {
        let start = parse_time(&self.start)
            .map_err(|e| ScheduleError::decode(format!("[{index}].start"), e))?;
        let end = parse_time(&self.end)
            .map_err(|e| ScheduleError::decode(format!("[{index}].end"), e))?;

        let event = Event {
            description: self.description,
            start,
            end,
            location: self.location,
        };
        event.validate(Some(index))?;
        Ok(event)
    }
}

/// Decode and validate a JSON array of event records.
pub fn decode_events(json: &str) -> ScheduleResult<Vec<Event>> {
    let mut de = serde_json::Deserializer::from_str(json);
    let raw: Vec<RawEvent> = serde_path_to_error::deserialize(&mut de)
        .map_err(|e| ScheduleError::decode(display_path(&e.path().to_string()), e.inner()))?;
    de.end()
        .map_err(|e| ScheduleError::decode("(root)", e))?;

    let events = raw
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_event(index))
        .collect::<ScheduleResult<Vec<_>>>()?;

    tracing::debug!(count = events.len(), "decoded events");
    Ok(events)
}

/// serde_path_to_error renders the root as "."; show something readable.
fn display_path(path: &str) -> String {
    if path == "." {
        "(root)".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u32, minute: u32) -> Time {
        Time::new(hour, minute).unwrap()
    }

    fn decode_err(json: &str) -> ScheduleError {
        decode_events(json).unwrap_err()
    }

    #[test]
    fn decodes_valid_records_in_order() {
        let json = r#"[
            {"description": "Standup", "start": "9:30am", "end": "9:45 AM", "location": "Room 1"},
            {"description": "Lunch", "start": "12:30pm", "end": "13:30", "location": "Cafe"}
        ]"#;

        let events = decode_events(json).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].description(), "Standup");
        assert_eq!(events[0].start(), t(9, 30));
        assert_eq!(events[0].end(), t(9, 45));
        assert_eq!(events[1].location(), "Cafe");
        assert_eq!(events[1].duration_minutes(), 60);
    }

    #[test]
    fn empty_array_is_not_an_error() {
        assert!(decode_events("[]").unwrap().is_empty());
    }

    #[test]
    fn end_before_start_is_a_validation_error() {
        let json = r#"[{"description": "Backwards", "start": "5pm", "end": "3pm", "location": "Hall"}]"#;

        match decode_err(json) {
            ScheduleError::Validation {
                index,
                description,
                location,
                start,
                end,
            } => {
                assert_eq!(index, Some(0));
                assert_eq!(description, "Backwards");
                assert_eq!(location, "Hall");
                assert_eq!(start, t(17, 0));
                assert_eq!(end, t(15, 0));
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn zero_length_event_is_valid() {
        let json = r#"[{"description": "Ping", "start": "10:00", "end": "10am", "location": "Desk"}]"#;
        let events = decode_events(json).unwrap();
        assert_eq!(events[0].duration_minutes(), 0);
    }

    #[test]
    fn bad_time_reports_field_path() {
        let json = r#"[
            {"description": "Ok", "start": "9am", "end": "10am", "location": "A"},
            {"description": "Bad", "start": "9am", "end": "ten", "location": "A"}
        ]"#;

        match decode_err(json) {
            ScheduleError::Decode { path, reason } => {
                assert_eq!(path, "[1].end");
                assert!(reason.contains("\"ten\""), "{reason}");
            }
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn missing_field_is_a_decode_error() {
        let json = r#"[{"description": "No end", "start": "9am", "location": "A"}]"#;

        match decode_err(json) {
            ScheduleError::Decode { path, reason } => {
                assert_eq!(path, "[0]");
                assert!(reason.contains("missing field `end`"), "{reason}");
            }
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn wrong_field_type_is_a_decode_error() {
        let json = r#"[{"description": "Typed", "start": 9, "end": "10am", "location": "A"}]"#;

        match decode_err(json) {
            ScheduleError::Decode { path, .. } => assert_eq!(path, "[0].start"),
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_surfaces_a_message() {
        let err = decode_err(r#"[{"description": "#);
        assert!(matches!(err, ScheduleError::Decode { .. }));
        assert!(!err.to_string().is_empty());

        let err = decode_err(r#"{"description": "not an array"}"#);
        match err {
            ScheduleError::Decode { path, reason } => {
                assert_eq!(path, "(root)");
                assert!(reason.contains("expected a sequence"), "{reason}");
            }
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn trailing_garbage_after_array_is_rejected() {
        let err = decode_err("[] []");
        assert!(matches!(err, ScheduleError::Decode { .. }));
    }

    #[test]
    fn first_failure_wins() {
        let json = r#"[
            {"description": "Backwards", "start": "5pm", "end": "3pm", "location": "A"},
            {"description": "Bad", "start": "nope", "end": "3pm", "location": "A"}
        ]"#;
        assert!(matches!(decode_err(json), ScheduleError::Validation { .. }));
    }

    #[test]
    fn event_new_validates() {
        assert!(Event::new("ok", t(9, 0), t(10, 0), "A").is_ok());
        assert!(matches!(
            Event::new("bad", t(10, 0), t(9, 0), "A"),
            Err(ScheduleError::Validation { index: None, .. })
        ));
    }
}
