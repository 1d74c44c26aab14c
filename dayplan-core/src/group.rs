//! Partitioning events into per-location lanes.

use std::collections::HashMap;

use serde::Serialize;

use crate::event::Event;
use crate::time::Time;

/// All events that share one location string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationGroup {
    pub location: String,
    pub events: Vec<Event>,
}

impl LocationGroup {
    /// Earliest start among the group's events.
    pub fn earliest_start(&self) -> Option<Time> {
        self.events.iter().map(Event::start).min()
    }
}

/// Group events by exact location and order the groups by earliest start.
///
/// Events keep their input order inside a group. Groups whose earliest
/// starts tie stay in the order their locations first appeared.
pub fn group_by_location(events: &[Event]) -> Vec<LocationGroup> {
    let mut index_of: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<LocationGroup> = Vec::new();

    for event in events {
        let idx = *index_of.entry(event.location()).or_insert_with(|| {
            groups.push(LocationGroup {
                location: event.location().to_string(),
                events: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].events.push(event.clone());
    }

    // Every group holds at least one event, so the fallback is never used.
    groups.sort_by_key(|g| g.earliest_start().unwrap_or(Time::MIDNIGHT));

    tracing::debug!(groups = groups.len(), "grouped events by location");
    groups
}
