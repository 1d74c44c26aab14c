//! User configuration at ~/.config/dayplan/config.toml.
//!
//! Values are layered: built-in defaults, then the config file (optional),
//! then `DAYPLAN_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::layout::{DEFAULT_MINUTES_PER_UNIT, Scale};

fn default_minutes_per_unit() -> u32 {
    DEFAULT_MINUTES_PER_UNIT
}

fn default_label_width() -> usize {
    16
}

fn default_color() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayplanConfig {
    /// Minutes covered by one column of the rendered schedule.
    #[serde(default = "default_minutes_per_unit")]
    pub minutes_per_unit: u32,

    /// Width of the location column.
    #[serde(default = "default_label_width")]
    pub label_width: usize,

    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for DayplanConfig {
    fn default() -> Self {
        DayplanConfig {
            minutes_per_unit: default_minutes_per_unit(),
            label_width: default_label_width(),
            color: default_color(),
        }
    }
}

impl DayplanConfig {
    pub fn config_path() -> ScheduleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("Could not determine config directory".into()))?
            .join("dayplan");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default path. A missing file is not an error.
    pub fn load() -> ScheduleResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> ScheduleResult<Self> {
        Self::load_with(path, Environment::with_prefix("DAYPLAN"))
    }

    fn load_with(path: &Path, env: Environment) -> ScheduleResult<Self> {
        let config: DayplanConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| ScheduleError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ScheduleError::Config(e.to_string()))?;

        config.scale()?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn scale(&self) -> ScheduleResult<Scale> {
        Scale::new(self.minutes_per_unit)
    }
}
