mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dayplan_core::DayplanConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "Render a JSON list of timed events as a day schedule")]
struct Cli {
    /// Use this config file instead of ~/.config/dayplan/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the schedule
    Render {
        /// JSON file with events (reads stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Print the laid-out schedule as JSON instead of drawing it
        #[arg(long)]
        json: bool,

        /// Mark the current local time
        #[arg(long)]
        now: bool,
    },
    /// Validate events and print a one-line summary
    Check {
        /// JSON file with events (reads stdin when omitted or "-")
        file: Option<PathBuf>,
    },
    /// Redraw the schedule whenever the file changes
    Watch {
        file: PathBuf,

        /// How often to look for changes, in milliseconds
        #[arg(long, default_value_t = 500)]
        interval_ms: u64,
    },
    /// Show the config path and effective settings
    Config,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => DayplanConfig::config_path()?,
    };
    let mut config = DayplanConfig::load_from(&config_path)?;
    if cli.no_color {
        config.color = false;
    }

    match cli.command {
        Commands::Render { file, json, now } => {
            let text = commands::read_input(file.as_deref())?;
            commands::render::run(&text, &config, json, now)
        }
        Commands::Check { file } => {
            let text = commands::read_input(file.as_deref())?;
            commands::check::run(&text, &config)
        }
        Commands::Watch { file, interval_ms } => {
            commands::watch::run(&file, &config, interval_ms).await
        }
        Commands::Config => commands::config::run(&config_path, &config),
    }
}
