// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{PlanError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::PlanError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.inputs, raw.schedule, raw.output))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_inputs(cfg)?;
    validate_limits(cfg)?;
    validate_output(cfg)?;
    Ok(())
}

fn validate_inputs(cfg: &RawConfigFile) -> Result<()> {
    let inputs = &cfg.inputs;
    for (key, path) in [
        ("roles", &inputs.roles),
        ("tasks", &inputs.tasks),
        ("developers", &inputs.developers),
        ("oncalls", &inputs.oncalls),
        ("leaves", &inputs.leaves),
    ] {
        if path.trim().is_empty() {
            return Err(PlanError::ConfigError(format!(
                "[inputs].{key} must not be empty"
            )));
        }
    }
    Ok(())
}

fn validate_limits(cfg: &RawConfigFile) -> Result<()> {
    if cfg.schedule.max_projection_days == 0 {
        return Err(PlanError::ConfigError(
            "[schedule].max_projection_days must be >= 1 (got 0)".to_string(),
        ));
    }
    if cfg.schedule.max_schedule_days == 0 {
        return Err(PlanError::ConfigError(
            "[schedule].max_schedule_days must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_output(cfg: &RawConfigFile) -> Result<()> {
    if cfg.output.csv.trim().is_empty() {
        return Err(PlanError::ConfigError(
            "[output].csv must not be empty".to_string(),
        ));
    }
    if cfg.output.timeline.as_ref().is_some_and(|t| t.trim().is_empty()) {
        return Err(PlanError::ConfigError(
            "[output].timeline must not be empty when set".to_string(),
        ));
    }
    Ok(())
}
