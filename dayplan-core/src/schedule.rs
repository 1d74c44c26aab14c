//! The render-ready schedule and a single-entry cache in front of it.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::ScheduleResult;
use crate::event::{Event, decode_events};
use crate::group::{LocationGroup, group_by_location};
use crate::layout::{Heading, Layout, Scale, Window};
use crate::time::Time;

/// Everything a renderer needs to draw one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub window: Window,
    pub scale: Scale,
    pub headings: Vec<Heading>,
    pub groups: Vec<LocationGroup>,
}

impl Schedule {
    /// Run the full pipeline over JSON input text.
    pub fn from_json(json: &str, scale: Scale) -> ScheduleResult<Self> {
        let events = decode_events(json)?;
        Ok(Schedule::from_events(&events, scale))
    }

    pub fn from_events(events: &[Event], scale: Scale) -> Self {
        let layout = Layout::for_events(events, scale);
        let schedule = Schedule {
            window: layout.window,
            scale,
            headings: layout.headings(),
            groups: group_by_location(events),
        };

        tracing::debug!(
            start_hour = schedule.window.start_hour,
            end_hour = schedule.window.end_hour,
            groups = schedule.groups.len(),
            "built schedule"
        );
        schedule
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.window, self.scale)
    }

    pub fn offset(&self, time: Time) -> f64 {
        self.layout().offset(time)
    }

    pub fn width(&self, event: &Event) -> f64 {
        self.layout().width(event)
    }

    pub fn event_count(&self) -> usize {
        self.groups.iter().map(|g| g.events.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// SHA-256 of the input text, hex encoded.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Holds the derived state for the most recent input only.
///
/// Any change to the text or the scale discards the previous result.
/// Failures are cached too, so an unchanged broken input is not re-decoded.
#[derive(Debug, Default)]
pub struct ScheduleCache {
    entry: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    hash: String,
    scale: Scale,
    result: ScheduleResult<Schedule>,
}

impl ScheduleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `text` at `scale` would be served from the cache.
    pub fn is_current(&self, text: &str, scale: Scale) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|e| e.scale == scale && e.hash == content_hash(text))
    }

    /// Return the schedule for `text`, recomputing only when it changed.
    pub fn get(&mut self, text: &str, scale: Scale) -> &ScheduleResult<Schedule> {
        let hash = content_hash(text);
        let entry = match self.entry.take() {
            Some(entry) if entry.hash == hash && entry.scale == scale => entry,
            _ => {
                tracing::debug!(hash = %hash, "input changed, rebuilding schedule");
                CacheEntry {
                    result: Schedule::from_json(text, scale),
                    hash,
                    scale,
                }
            }
        };

        &self.entry.insert(entry).result
    }

    /// Like [`ScheduleCache::get`], but `None` when `text` at `scale` is
    /// already cached. The input is hashed once.
    pub fn get_if_changed(
        &mut self,
        text: &str,
        scale: Scale,
    ) -> Option<&ScheduleResult<Schedule>> {
        let hash = content_hash(text);
        if self
            .entry
            .as_ref()
            .is_some_and(|e| e.hash == hash && e.scale == scale)
        {
            return None;
        }

        tracing::debug!(hash = %hash, "input changed, rebuilding schedule");
        let entry = CacheEntry {
            result: Schedule::from_json(text, scale),
            hash,
            scale,
        };
        Some(&self.entry.insert(entry).result)
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
