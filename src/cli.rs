// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `workplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "workplan",
    version,
    about = "Simulate a team's workdays and derive a task timeline from CSV inputs.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Workplan.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Workplan.toml")]
    pub config: String,

    /// First simulated day (YYYY-MM-DD). Overrides `[schedule].start_date`.
    #[arg(long, value_name = "DATE")]
    pub start_date: Option<String>,

    /// Reject dangling references, unknown roles and bad dates instead of
    /// tolerating them.
    #[arg(long)]
    pub strict: bool,

    /// Where to write the schedule CSV. Overrides `[output].csv`.
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WORKPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load and validate inputs, print a summary, but don't schedule.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
