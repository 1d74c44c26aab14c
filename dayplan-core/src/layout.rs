//! Mapping times onto a horizontal axis.
//!
//! The visible window runs from the earliest start hour to the hour that
//! covers the latest end. Offsets are measured from the window's first hour
//! and expressed in layout units of `minutes_per_unit` minutes each, so an
//! event's offset and width always share one scale.

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::event::Event;
use crate::time::{Time, format_label};

/// Default number of minutes covered by one layout unit.
pub const DEFAULT_MINUTES_PER_UNIT: u32 = 7;

/// The visible hour range, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Window {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Window {
    /// Minutes from midnight at the left edge of the window.
    pub fn origin_minutes(&self) -> u32 {
        self.start_hour * 60
    }

    /// Number of hours between the first and last heading.
    pub fn span_hours(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }
}

/// How many minutes one layout unit represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scale {
    minutes_per_unit: u32,
}

impl Scale {
    pub fn new(minutes_per_unit: u32) -> ScheduleResult<Self> {
        if minutes_per_unit == 0 {
            return Err(ScheduleError::Config(
                "minutes_per_unit must be greater than zero".into(),
            ));
        }
        Ok(Scale { minutes_per_unit })
    }

    pub fn minutes_per_unit(&self) -> u32 {
        self.minutes_per_unit
    }

    pub fn units(&self, minutes: u32) -> f64 {
        minutes as f64 / self.minutes_per_unit as f64
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale {
            minutes_per_unit: DEFAULT_MINUTES_PER_UNIT,
        }
    }
}

/// A label for one whole hour of the window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    /// 0-24; 24 marks the end of the day.
    pub hour: u32,
    pub offset: f64,
    pub label: String,
}

/// Bounding hours for a set of events. Empty input gives `0..=0`.
pub fn window_for_events(events: &[Event]) -> Window {
    let start_hour = events.iter().map(|e| e.start().hour()).min();
    let end_hour = events
        .iter()
        .map(|e| {
            let end = e.end();
            end.hour() + u32::from(end.minute() != 0)
        })
        .max();

    Window {
        start_hour: start_hour.unwrap_or(0),
        end_hour: end_hour.unwrap_or(0),
    }
}

/// Horizontal layout for one window at one scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub window: Window,
    pub scale: Scale,
}

impl Layout {
    pub fn new(window: Window, scale: Scale) -> Self {
        Layout { window, scale }
    }

    pub fn for_events(events: &[Event], scale: Scale) -> Self {
        Layout::new(window_for_events(events), scale)
    }

    /// Offset of `time` from the window's left edge.
    pub fn offset(&self, time: Time) -> f64 {
        self.offset_minutes(time.minutes_from_midnight())
    }

    /// Width of `event` on the same scale as [`Layout::offset`].
    pub fn width(&self, event: &Event) -> f64 {
        self.scale.units(event.duration_minutes())
    }

    /// Offset of the window's right edge.
    pub fn total_width(&self) -> f64 {
        self.scale.units(self.window.span_hours() * 60)
    }

    /// One heading per hour in the window, both ends included.
    pub fn headings(&self) -> Vec<Heading> {
        (self.window.start_hour..=self.window.end_hour)
            .map(|hour| Heading {
                hour,
                offset: self.offset_minutes(hour * 60),
                label: format_label(hour, 0),
            })
            .collect()
    }

    fn offset_minutes(&self, minutes: u32) -> f64 {
        let delta = minutes as i64 - self.window.origin_minutes() as i64;
        delta as f64 / self.scale.minutes_per_unit() as f64
    }
}
