pub mod check;
pub mod config;
pub mod render;
pub mod watch;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read schedule JSON from `path`, or from stdin when it is absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Could not read {}", p.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Could not read schedule from stdin")?;
            Ok(text)
        }
    }
}
