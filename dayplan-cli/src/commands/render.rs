use anyhow::Result;
use dayplan_core::{DayplanConfig, Event, Heading, Schedule, Time, Window};
use serde::Serialize;

use crate::render::{Render, RenderOptions};

/// An event with its position on the schedule's axis.
#[derive(Serialize)]
struct PlacedEvent<'a> {
    #[serde(flatten)]
    event: &'a Event,
    offset: f64,
    width: f64,
}

#[derive(Serialize)]
struct Lane<'a> {
    location: &'a str,
    events: Vec<PlacedEvent<'a>>,
}

#[derive(Serialize)]
struct ScheduleOutput<'a> {
    window: Window,
    minutes_per_unit: u32,
    headings: &'a [Heading],
    groups: Vec<Lane<'a>>,
}

fn to_output(schedule: &Schedule) -> ScheduleOutput<'_> {
    let layout = schedule.layout();
    let groups = schedule
        .groups
        .iter()
        .map(|group| Lane {
            location: &group.location,
            events: group
                .events
                .iter()
                .map(|event| PlacedEvent {
                    event,
                    offset: layout.offset(event.start()),
                    width: layout.width(event),
                })
                .collect(),
        })
        .collect();

    ScheduleOutput {
        window: schedule.window,
        minutes_per_unit: schedule.scale.minutes_per_unit(),
        headings: &schedule.headings,
        groups,
    }
}

/// Build the schedule for `text` and format it for stdout.
pub fn render_text(
    text: &str,
    config: &DayplanConfig,
    json: bool,
    now: Option<Time>,
) -> Result<String> {
    let schedule = Schedule::from_json(text, config.scale()?)?;

    if json {
        return Ok(serde_json::to_string_pretty(&to_output(&schedule))?);
    }

    let opts = RenderOptions {
        now,
        ..RenderOptions::from_config(config)
    };
    Ok(schedule.render(&opts))
}

pub fn run(text: &str, config: &DayplanConfig, json: bool, now: bool) -> Result<()> {
    let now = now.then(|| Time::from(chrono::Local::now().time()));
    println!("{}", render_text(text, config, json, now)?);
    Ok(())
}
