// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row of an input table could not be turned into a domain value.
    #[error("invalid {table} record at line {line}: {message}")]
    InvalidRecord {
        table: &'static str,
        line: u64,
        message: String,
    },

    #[error("Cycle detected in task dependencies: {0}")]
    DependencyCycle(String),

    /// A name that does not resolve (dependency, role) in strict mode.
    #[error("Unknown reference: {0}")]
    UnknownReference(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlanError {
    pub(crate) fn record(table: &'static str, line: u64, message: impl Into<String>) -> Self {
        PlanError::InvalidRecord {
            table,
            line,
            message: message.into(),
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PlanError>;
