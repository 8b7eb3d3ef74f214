// src/config/model.rs

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::engine::{DEFAULT_MAX_PROJECTION_DAYS, DEFAULT_MAX_SCHEDULE_DAYS, ScheduleLimits};
use crate::input::InputPaths;
use crate::types::ParseMode;

/// Configuration exactly as read from a TOML file, before validation.
///
/// ```toml
/// [inputs]
/// roles = "roles.csv"
/// tasks = "tasks.csv"
/// developers = "developers.csv"
/// oncalls = "oncalls.csv"
/// leaves = "leaves.csv"
///
/// [schedule]
/// start_date = "2025-01-06"
/// mode = "strict"
///
/// [output]
/// csv = "schedule.csv"
/// timeline = "timeline.json"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    #[serde(default)]
    pub inputs: InputsSection,

    #[serde(default)]
    pub schedule: ScheduleSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// A validated configuration. Build one with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub inputs: InputsSection,
    pub schedule: ScheduleSection,
    pub output: OutputSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        inputs: InputsSection,
        schedule: ScheduleSection,
        output: OutputSection,
    ) -> Self {
        Self {
            inputs,
            schedule,
            output,
        }
    }

    pub fn limits(&self) -> ScheduleLimits {
        ScheduleLimits {
            max_projection_days: self.schedule.max_projection_days,
            max_schedule_days: self.schedule.max_schedule_days,
        }
    }

    /// Input table paths, with relative paths resolved against `root`.
    pub fn input_paths(&self, root: &Path) -> InputPaths {
        InputPaths {
            roles: root.join(&self.inputs.roles),
            tasks: root.join(&self.inputs.tasks),
            developers: root.join(&self.inputs.developers),
            oncalls: root.join(&self.inputs.oncalls),
            leaves: root.join(&self.inputs.leaves),
        }
    }
}

/// `[inputs]` section: one CSV file per table.
#[derive(Debug, Clone, Deserialize)]
pub struct InputsSection {
    #[serde(default = "default_roles")]
    pub roles: String,
    #[serde(default = "default_tasks")]
    pub tasks: String,
    #[serde(default = "default_developers")]
    pub developers: String,
    #[serde(default = "default_oncalls")]
    pub oncalls: String,
    #[serde(default = "default_leaves")]
    pub leaves: String,
}

fn default_roles() -> String {
    "roles.csv".to_string()
}

fn default_tasks() -> String {
    "tasks.csv".to_string()
}

fn default_developers() -> String {
    "developers.csv".to_string()
}

fn default_oncalls() -> String {
    "oncalls.csv".to_string()
}

fn default_leaves() -> String {
    "leaves.csv".to_string()
}

impl Default for InputsSection {
    fn default() -> Self {
        Self {
            roles: default_roles(),
            tasks: default_tasks(),
            developers: default_developers(),
            oncalls: default_oncalls(),
            leaves: default_leaves(),
        }
    }
}

/// `[schedule]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleSection {
    /// First simulated day. `None` means today's local date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// `"lenient"` (default) or `"strict"`.
    #[serde(default)]
    pub mode: ParseMode,

    /// Working days a single end-date projection may walk.
    #[serde(default = "default_max_projection_days")]
    pub max_projection_days: u32,

    /// Workdays the whole run may simulate.
    #[serde(default = "default_max_schedule_days")]
    pub max_schedule_days: u32,
}

fn default_max_projection_days() -> u32 {
    DEFAULT_MAX_PROJECTION_DAYS
}

fn default_max_schedule_days() -> u32 {
    DEFAULT_MAX_SCHEDULE_DAYS
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            start_date: None,
            mode: ParseMode::default(),
            max_projection_days: default_max_projection_days(),
            max_schedule_days: default_max_schedule_days(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_csv")]
    pub csv: String,

    /// Optional timeline JSON for visualisation.
    #[serde(default)]
    pub timeline: Option<String>,
}

fn default_csv() -> String {
    "schedule.csv".to_string()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            csv: default_csv(),
            timeline: None,
        }
    }
}
