// src/input/mod.rs

//! Loading the five input tables into the domain model.
//!
//! - [`tables`] reads roles, developers and on-call / leave periods.
//! - [`tasks`] reads tasks and generates Frontend / QA companions.
//! - [`validate`] runs cross-table checks (strict mode rejects, lenient warns).

pub mod tables;
pub mod tasks;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::model::{Calendar, Developer, RoleTable, Task};
use crate::types::ParseMode;

pub use tables::{read_developers, read_duty_periods, read_roles};
pub use tasks::read_tasks;
pub use validate::{first_developer_rows, validate_inputs};

/// Locations of the input tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub roles: PathBuf,
    pub tasks: PathBuf,
    pub developers: PathBuf,
    pub oncalls: PathBuf,
    pub leaves: PathBuf,
}

/// Everything the scheduling engine consumes, freshly loaded.
#[derive(Debug, Clone)]
pub struct PlanInputs {
    pub roles: RoleTable,
    pub tasks: Vec<Task>,
    pub developers: Vec<Developer>,
    pub calendar: Calendar,
}

/// Read and validate all five tables.
///
/// Any malformed table aborts the load; nothing is scheduled from partial
/// input.
pub fn load_inputs(fs: &dyn FileSystem, paths: &InputPaths, mode: ParseMode) -> Result<PlanInputs> {
    let roles = read_roles(open(fs, &paths.roles)?, mode)?;
    let tasks = read_tasks(open(fs, &paths.tasks)?)?;
    let developers = read_developers(open(fs, &paths.developers)?)?;
    let oncalls = read_duty_periods(open(fs, &paths.oncalls)?, "oncalls", mode)?;
    let leaves = read_duty_periods(open(fs, &paths.leaves)?, "leaves", mode)?;

    let mut inputs = PlanInputs {
        roles,
        tasks,
        developers,
        calendar: Calendar::new(oncalls, leaves),
    };
    validate_inputs(&inputs, mode)?;
    inputs.developers = first_developer_rows(inputs.developers);

    info!(
        roles = inputs.roles.len(),
        tasks = inputs.tasks.len(),
        developers = inputs.developers.len(),
        oncalls = inputs.calendar.oncalls().len(),
        leaves = inputs.calendar.leaves().len(),
        ?mode,
        "loaded inputs"
    );
    Ok(inputs)
}

fn open(fs: &dyn FileSystem, path: &Path) -> Result<Box<dyn std::io::Read + Send>> {
    let reader = fs
        .open_read(path)
        .with_context(|| format!("loading input table {:?}", path))?;
    Ok(reader)
}
