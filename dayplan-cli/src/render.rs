//! Terminal rendering for schedules.
//!
//! One column is one layout unit, so a column covers `minutes_per_unit`
//! minutes. Each location group becomes a lane: a row of event blocks
//! followed by a list of the lane's events with their times.

use dayplan_core::{DayplanConfig, Event, LocationGroup, Schedule, ScheduleError, Time};
use owo_colors::{OwoColorize, Style};

/// Marker drawn on the ruler at the current time.
const NOW_MARKER: char = '▼';

pub struct RenderOptions {
    pub label_width: usize,
    pub color: bool,
    /// Draw a marker at this time when it falls inside the window.
    pub now: Option<Time>,
}

impl RenderOptions {
    pub fn from_config(config: &DayplanConfig) -> Self {
        RenderOptions {
            label_width: config.label_width,
            color: config.color,
            now: None,
        }
    }
}

/// Extension trait for terminal rendering.
pub trait Render {
    fn render(&self, opts: &RenderOptions) -> String;
}

fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

fn lane_style(lane: usize) -> Style {
    match lane % 5 {
        0 => Style::new().black().on_green(),
        1 => Style::new().black().on_cyan(),
        2 => Style::new().black().on_yellow(),
        3 => Style::new().black().on_magenta(),
        _ => Style::new().white().on_blue(),
    }
}

fn column(offset: f64) -> usize {
    offset.max(0.0).round() as usize
}

/// Pad or cut `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - len));
    out
}

impl Render for Event {
    fn render(&self, opts: &RenderOptions) -> String {
        let times = format!("{}–{}", self.start().label(), self.end().label());
        format!(
            "{}  {}",
            paint(&format!("{times:>15}"), Style::new().dimmed(), opts.color),
            self.description()
        )
    }
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    event: bool,
}

struct Grid<'a> {
    schedule: &'a Schedule,
    width: usize,
    heading_cols: Vec<usize>,
    now_col: Option<usize>,
}

impl<'a> Grid<'a> {
    fn new(schedule: &'a Schedule, now: Option<Time>) -> Self {
        let layout = schedule.layout();
        let width = layout.total_width().ceil() as usize + 1;
        let heading_cols = schedule.headings.iter().map(|h| column(h.offset)).collect();

        let window = schedule.window;
        let now_col = now
            .filter(|t| {
                let minutes = t.minutes_from_midnight();
                minutes >= window.origin_minutes()
                    && minutes <= window.origin_minutes() + window.span_hours() * 60
            })
            .map(|t| column(layout.offset(t)));

        Grid {
            schedule,
            width,
            heading_cols,
            now_col,
        }
    }

    fn header(&self, opts: &RenderOptions) -> String {
        let mut line = String::new();
        let mut cursor = 0usize;

        for (heading, &col) in self.schedule.headings.iter().zip(&self.heading_cols) {
            // Skip labels that would run into the previous one.
            if !line.is_empty() && col <= cursor {
                continue;
            }
            line.push_str(&" ".repeat(col - cursor));
            line.push_str(&heading.label);
            cursor = col + heading.label.chars().count();
        }

        format!(
            "{} {}",
            " ".repeat(opts.label_width),
            paint(&line, Style::new().bold(), opts.color)
        )
    }

    fn ruler(&self, opts: &RenderOptions) -> String {
        let mut ruler: Vec<char> = vec!['-'; self.width];
        for &col in &self.heading_cols {
            if let Some(c) = ruler.get_mut(col) {
                *c = '+';
            }
        }

        let line: String = ruler.iter().collect();
        let line = match self.now_col {
            Some(col) if col < self.width => {
                let before: String = ruler[..col].iter().collect();
                let after: String = ruler[col + 1..].iter().collect();
                format!(
                    "{}{}{}",
                    paint(&before, Style::new().dimmed(), opts.color),
                    paint(&NOW_MARKER.to_string(), Style::new().red().bold(), opts.color),
                    paint(&after, Style::new().dimmed(), opts.color)
                )
            }
            _ => paint(&line, Style::new().dimmed(), opts.color),
        };

        format!("{} {}", " ".repeat(opts.label_width), line)
    }

    fn lane(&self, lane: usize, group: &LocationGroup, opts: &RenderOptions) -> String {
        let mut cells = vec![Cell { ch: ' ', event: false }; self.width];
        for &col in &self.heading_cols {
            if let Some(cell) = cells.get_mut(col) {
                cell.ch = '·';
            }
        }

        let layout = self.schedule.layout();
        for event in &group.events {
            let start = column(layout.offset(event.start()));
            let end = column(layout.offset(event.end()));
            let span = end.saturating_sub(start).max(1);
            let block = block_text(event.description(), span);

            for (i, ch) in block.chars().enumerate() {
                if let Some(cell) = cells.get_mut(start + i) {
                    *cell = Cell { ch, event: true };
                }
            }
        }

        let mut row = String::new();
        let mut run = String::new();
        let mut run_is_event = false;
        for cell in cells {
            if cell.event != run_is_event && !run.is_empty() {
                row.push_str(&paint_run(&run, run_is_event, lane, opts));
                run.clear();
            }
            run_is_event = cell.event;
            run.push(cell.ch);
        }
        if !run.is_empty() {
            row.push_str(&paint_run(&run, run_is_event, lane, opts));
        }

        let label = fit(&group.location, opts.label_width);
        format!("{} {}", paint(&label, Style::new().bold(), opts.color), row)
    }
}

fn paint_run(run: &str, is_event: bool, lane: usize, opts: &RenderOptions) -> String {
    if is_event {
        paint(run, lane_style(lane), opts.color)
    } else {
        paint(run, Style::new().dimmed(), opts.color)
    }
}

/// `[Description]` cut to `span` columns; a single column shows just `|`.
fn block_text(description: &str, span: usize) -> String {
    if span < 2 {
        return "|".to_string();
    }
    format!("[{}]", fit(description, span - 2))
}

impl Render for Schedule {
    fn render(&self, opts: &RenderOptions) -> String {
        if self.is_empty() {
            return paint("No events", Style::new().dimmed(), opts.color);
        }

        let grid = Grid::new(self, opts.now);
        let mut lines = vec![grid.header(opts), grid.ruler(opts)];

        for (lane, group) in self.groups.iter().enumerate() {
            lines.push(grid.lane(lane, group, opts));
            for event in &group.events {
                lines.push(format!("{} {}", " ".repeat(opts.label_width), event.render(opts)));
            }
        }

        lines.join("\n")
    }
}

impl Render for ScheduleError {
    fn render(&self, opts: &RenderOptions) -> String {
        paint(&format!("Error: {self}"), Style::new().red(), opts.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayplan_core::Scale;

    const SAMPLE: &str = r#"[
        {"description": "Keynote", "start": "9am", "end": "10am", "location": "Main hall"},
        {"description": "Workshop", "start": "10am", "end": "11am", "location": "Room B"}
    ]"#;

    fn plain(label_width: usize) -> RenderOptions {
        RenderOptions {
            label_width,
            color: false,
            now: None,
        }
    }

    fn sample() -> Schedule {
        // 10 minutes per column: 6 columns per hour.
        Schedule::from_json(SAMPLE, Scale::new(10).unwrap()).unwrap()
    }

    #[test]
    fn renders_header_ruler_and_lanes() {
        let output = sample().render(&plain(10));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "           9am   10am  11am");
        assert_eq!(lines[1], "           +-----+-----+");
        assert_eq!(lines[2], "Main hall  [Keyn]·     ·");
        assert!(lines[3].ends_with("9am–10am  Keynote"), "{}", lines[3]);
        assert_eq!(lines[4], "Room B     ·     [Work]·");
        assert!(lines[5].ends_with("10am–11am  Workshop"), "{}", lines[5]);
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn empty_schedule_says_so() {
        let schedule = Schedule::from_json("[]", Scale::default()).unwrap();
        assert_eq!(schedule.render(&plain(10)), "No events");
    }

    #[test]
    fn now_marker_lands_on_ruler() {
        let opts = RenderOptions {
            now: Time::new(9, 30),
            ..plain(4)
        };
        let output = sample().render(&opts);
        let ruler = output.lines().nth(1).unwrap();
        assert_eq!(ruler, "     +--▼--+-----+");
    }

    #[test]
    fn now_outside_window_is_ignored() {
        let opts = RenderOptions {
            now: Time::new(18, 0),
            ..plain(4)
        };
        assert!(!sample().render(&opts).contains(NOW_MARKER));
    }

    #[test]
    fn crowded_labels_are_skipped() {
        // 30 minutes per column leaves two columns per hour.
        let schedule = Schedule::from_json(SAMPLE, Scale::new(30).unwrap()).unwrap();
        let header = schedule.render(&plain(0)).lines().next().unwrap().to_string();
        assert_eq!(header, " 9am 11am");
    }

    #[test]
    fn short_events_render_as_a_bar() {
        assert_eq!(block_text("Ping", 1), "|");
        assert_eq!(block_text("Ping", 2), "[]");
        assert_eq!(block_text("Ping", 8), "[Ping  ]");
    }

    #[test]
    fn long_locations_are_cut_to_label_width() {
        assert_eq!(fit("Main auditorium", 4), "Main");
        assert_eq!(fit("Hall", 6), "Hall  ");
    }

    #[test]
    fn errors_render_with_prefix() {
        let err = Schedule::from_json("[", Scale::default()).unwrap_err();
        assert!(err.render(&plain(0)).starts_with("Error: Problem with the value at"));
    }
}
