// src/logging.rs

//! `tracing` subscriber for the `workplan` binary.
//!
//! `--log-level` wins when given. Otherwise `WORKPLAN_LOG` is read, either as
//! a bare level (`debug`) or as a filter directive
//! (`workplan::engine=trace,info`). With neither, only `info` and above are
//! shown.
//!
//! Everything goes to stderr; stdout carries the schedule rows.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "WORKPLAN_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let directives = filter_directives(cli_level, env_value.as_deref());
    let filter =
        EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))?;

    Ok(())
}

/// Filter directives for a CLI level and a raw `WORKPLAN_LOG` value.
///
/// An environment value that is neither a level nor a valid directive is
/// ignored.
pub fn filter_directives(cli_level: Option<LogLevel>, env_value: Option<&str>) -> String {
    if let Some(level) = cli_level {
        return cli_directive(level).to_string();
    }

    let Some(raw) = env_value.map(str::trim).filter(|v| !v.is_empty()) else {
        return DEFAULT_DIRECTIVE.to_string();
    };

    if let Some(level) = parse_level_str(raw) {
        return level.as_str().to_lowercase();
    }
    if EnvFilter::try_new(raw).is_ok() {
        return raw.to_string();
    }
    DEFAULT_DIRECTIVE.to_string()
}

fn cli_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}

/// Bare level names, case-insensitive. `warning` is accepted for `warn`.
pub fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
