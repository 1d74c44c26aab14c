use anyhow::Result;
use dayplan_core::{DayplanConfig, Schedule, format_label};

/// One-line description of a schedule, e.g. "3 events in 2 locations, 9am–2pm".
pub fn summarize(schedule: &Schedule) -> String {
    if schedule.is_empty() {
        return "No events".to_string();
    }

    let events = schedule.event_count();
    let locations = schedule.groups.len();
    format!(
        "{} {} in {} {}, {}–{}",
        events,
        pluralize("event", events),
        locations,
        pluralize("location", locations),
        format_label(schedule.window.start_hour, 0),
        format_label(schedule.window.end_hour, 0),
    )
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

pub fn run(text: &str, config: &DayplanConfig) -> Result<()> {
    let schedule = Schedule::from_json(text, config.scale()?)?;
    println!("{}", summarize(&schedule));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayplan_core::Scale;

    #[test]
    fn summary_counts_events_and_locations() {
        let json = r#"[
            {"description": "a", "start": "9am", "end": "10am", "location": "A"},
            {"description": "b", "start": "11am", "end": "1:30pm", "location": "B"}
        ]"#;
        let schedule = Schedule::from_json(json, Scale::default()).unwrap();
        assert_eq!(summarize(&schedule), "2 events in 2 locations, 9am–2pm");
    }

    #[test]
    fn summary_uses_singular() {
        let json = r#"[{"description": "a", "start": "9am", "end": "10am", "location": "A"}]"#;
        let schedule = Schedule::from_json(json, Scale::default()).unwrap();
        assert_eq!(summarize(&schedule), "1 event in 1 location, 9am–10am");
    }

    #[test]
    fn empty_summary() {
        let schedule = Schedule::from_json("[]", Scale::default()).unwrap();
        assert_eq!(summarize(&schedule), "No events");
    }
}
