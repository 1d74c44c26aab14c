use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use dayplan_core::{DayplanConfig, ScheduleCache};
use owo_colors::OwoColorize;

use crate::render::{Render, RenderOptions};

/// Clear the terminal and move the cursor home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// What a single poll decided to show.
#[derive(Debug, PartialEq)]
enum Frame {
    Unchanged,
    Show(String),
}

/// Re-derive the screen for `text`, or report that nothing changed.
fn next_frame(cache: &mut ScheduleCache, text: &str, config: &DayplanConfig) -> Result<Frame> {
    let scale = config.scale()?;
    let opts = RenderOptions::from_config(config);
    let output = match cache.get_if_changed(text, scale) {
        None => return Ok(Frame::Unchanged),
        Some(Ok(schedule)) => schedule.render(&opts),
        Some(Err(e)) => e.render(&opts),
    };
    Ok(Frame::Show(output))
}

/// Re-render `path` whenever its content changes, until Ctrl-C.
pub async fn run(path: &Path, config: &DayplanConfig, interval_ms: u64) -> Result<()> {
    let mut cache = ScheduleCache::new();
    let mut read_error: Option<String> = None;
    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    tracing::info!(path = %path.display(), interval_ms, "watching schedule");

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = &mut ctrl_c => {
                println!();
                return Ok(());
            }
        }

        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) => {
                let message = format!("Could not read {}: {e}", path.display());
                if read_error.as_deref() != Some(message.as_str()) {
                    tracing::warn!(error = %e, "failed to read watched file");
                    print!("{CLEAR_SCREEN}");
                    println!("{}", message.red());
                    // Force a redraw once the file is readable again.
                    cache.clear();
                    read_error = Some(message);
                }
                continue;
            }
        };
        read_error = None;

        if let Frame::Show(output) = next_frame(&mut cache, &text, config)? {
            print!("{CLEAR_SCREEN}");
            println!("{output}");
            println!();
            println!("{}", format!("Watching {} (Ctrl-C to stop)", path.display()).dimmed());
        }
    }
}
