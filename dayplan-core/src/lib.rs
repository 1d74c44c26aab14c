//! Core pipeline for dayplan.
//!
//! Turns a JSON list of timed events into a render-ready day schedule:
//! - `time`: the free-form time parser and 12-hour labels
//! - `event`: JSON decoding and start/end validation
//! - `group`: per-location lanes ordered by earliest start
//! - `layout`: the visible window, hour headings, offsets and widths
//! - `schedule`: the assembled `Schedule` and a content-keyed cache

pub mod config;
pub mod error;
pub mod event;
pub mod group;
pub mod layout;
pub mod schedule;
pub mod time;

pub use config::DayplanConfig;
pub use error::{ParseError, ParseErrorKind, ScheduleError, ScheduleResult};
pub use event::{Event, decode_events};
pub use group::{LocationGroup, group_by_location};
pub use layout::{Heading, Layout, Scale, Window, window_for_events};
pub use schedule::{Schedule, ScheduleCache, content_hash};
pub use time::{Time, format_label, parse_time};
