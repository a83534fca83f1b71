use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Rangefinder: single-beam and sweeping LiDAR ranging against planar obstacles.
///
/// This struct defines the command-line arguments of the scenario runner.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the scenario TOML file to run.
    #[arg(short, long, default_value = "assets/scenarios/wall_and_disk.toml")]
    pub scenario: PathBuf,

    /// Sample spacing in meters for the obstacle point map. Overrides `map_ds`
    /// from the scenario file.
    #[arg(long)]
    pub map_ds: Option<f64>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}
