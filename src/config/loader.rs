// src/config/loader.rs

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

/// Load a configuration file from disk and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    load_from_fs(&RealFileSystem, path.as_ref())
}

/// Like [`load_from_path`], reading through `fs`.
pub fn load_from_fs(fs: &dyn FileSystem, path: &Path) -> Result<RawConfigFile> {
    let contents = fs
        .read_to_string(path)
        .with_context(|| format!("loading config {:?}", path))?;
    parse_str(&contents)
}

/// Parse TOML text into a `RawConfigFile`.
pub fn parse_str(contents: &str) -> Result<RawConfigFile> {
    let config: RawConfigFile = toml::from_str(contents)?;
    Ok(config)
}

/// Load a configuration file from disk and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks that paths are non-empty and safety bounds are positive.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    load_and_validate_from_fs(&RealFileSystem, path.as_ref())
}

/// Like [`load_and_validate`], reading through `fs`.
pub fn load_and_validate_from_fs(fs: &dyn FileSystem, path: &Path) -> Result<ConfigFile> {
    let raw_config = load_from_fs(fs, path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// `Workplan.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Workplan.toml")
}
