// src/config/mod.rs

//! Configuration loading and validation for workplan.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file through the filesystem abstraction (`loader.rs`).
//! - Validate basic invariants like positive safety bounds (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    default_config_path, load_and_validate, load_and_validate_from_fs, load_from_fs,
    load_from_path, parse_str,
};
pub use model::{ConfigFile, InputsSection, OutputSection, RawConfigFile, ScheduleSection};
