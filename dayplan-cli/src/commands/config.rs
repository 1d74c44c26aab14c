use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use dayplan_core::DayplanConfig;
use owo_colors::OwoColorize;

pub fn run(config_path: &Path, config: &DayplanConfig) -> Result<()> {
    print!("{}", describe(config_path, config)?);
    Ok(())
}

/// The config path followed by the effective settings as TOML.
fn describe(config_path: &Path, config: &DayplanConfig) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", "Paths".bold())?;
    writeln!(out, "  Config:  {}", config_path.display())?;
    writeln!(out)?;
    writeln!(out, "{}", "Effective settings".bold())?;

    let settings = toml::to_string_pretty(config)?;
    for line in settings.lines() {
        writeln!(out, "  {line}")?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_path_and_default_settings() {
        let path = Path::new("/tmp/dayplan/config.toml");
        let out = describe(path, &DayplanConfig::default()).unwrap();

        assert!(out.contains("  Config:  /tmp/dayplan/config.toml"), "{out}");
        assert!(out.contains("  minutes_per_unit = 7"), "{out}");
        assert!(out.contains("  label_width = 16"), "{out}");
        assert!(out.contains("  color = true"), "{out}");
    }

    #[test]
    fn describes_overridden_settings() {
        let config = DayplanConfig {
            minutes_per_unit: 15,
            color: false,
            ..DayplanConfig::default()
        };
        let out = describe(Path::new("custom.toml"), &config).unwrap();

        assert!(out.contains("minutes_per_unit = 15"), "{out}");
        assert!(out.contains("color = false"), "{out}");
    }
}
