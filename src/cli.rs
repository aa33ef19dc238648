use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Boreas weather map layer cache tools.
#[derive(Parser)]
#[command(
    name = "boreas",
    version,
    about = "Weather raster layer cache and civil time tools"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert epoch seconds to civil fields, or snapshot the clock.
    Time(TimeArgs),
    /// Drive a weather cache through a configured reload schedule.
    Simulate(SimulateArgs),
}

/// Arguments for the `time` subcommand.
#[derive(clap::Args)]
pub struct TimeArgs {
    /// Unix timestamp (seconds, may be negative) to decompose.
    /// Omit to snapshot the system clock instead.
    #[arg(short, long, allow_hyphen_values = true)]
    pub unix: Option<i64>,

    /// Additional signed offset in seconds applied to the instant.
    #[arg(short, long, allow_hyphen_values = true)]
    pub offset: Option<i64>,
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "boreas.toml")]
    pub config: PathBuf,
}
