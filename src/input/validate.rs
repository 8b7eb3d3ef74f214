// src/input/validate.rs

use std::collections::HashSet;

use tracing::warn;

use crate::dag::DependencyGraph;
use crate::errors::{PlanError, Result};
use crate::input::PlanInputs;
use crate::model::Developer;
use crate::types::ParseMode;

/// Cross-table checks that only fail in strict mode.
///
/// In lenient mode every finding is logged and the inputs are used as-is.
pub fn validate_inputs(inputs: &PlanInputs, mode: ParseMode) -> Result<()> {
    check_duplicate_tasks(inputs, mode)?;
    check_duplicate_developers(inputs, mode)?;
    check_dependencies(inputs, mode)?;
    check_roles(inputs, mode)?;
    Ok(())
}

fn check_duplicate_tasks(inputs: &PlanInputs, mode: ParseMode) -> Result<()> {
    let mut seen = HashSet::new();
    for task in &inputs.tasks {
        if !seen.insert(task.name.as_str()) {
            if mode.is_strict() {
                return Err(PlanError::ConfigError(format!(
                    "task '{}' is defined more than once",
                    task.name
                )));
            }
            warn!(task = %task.name, "duplicate task name; references resolve to the first one");
        }
    }
    Ok(())
}

fn check_duplicate_developers(inputs: &PlanInputs, mode: ParseMode) -> Result<()> {
    let mut seen = HashSet::new();
    for dev in &inputs.developers {
        if !seen.insert(dev.name.as_str()) {
            if mode.is_strict() {
                return Err(PlanError::ConfigError(format!(
                    "developer '{}' is defined more than once",
                    dev.name
                )));
            }
            warn!(developer = %dev.name, "duplicate developer name; keeping the first row");
        }
    }
    Ok(())
}

/// Drop every developer row whose name already appeared earlier.
pub fn first_developer_rows(developers: Vec<Developer>) -> Vec<Developer> {
    let mut seen = HashSet::new();
    developers
        .into_iter()
        .filter(|dev| seen.insert(dev.name.clone()))
        .collect()
}

fn check_dependencies(inputs: &PlanInputs, mode: ParseMode) -> Result<()> {
    let graph = DependencyGraph::build(&inputs.tasks);
    for (task, missing) in graph.dangling() {
        if mode.is_strict() {
            return Err(PlanError::UnknownReference(format!(
                "task '{task}' has unknown dependency '{missing}'"
            )));
        }
        warn!(task = %task, dependency = %missing, "unknown dependency; task will wait on it forever");
    }
    Ok(())
}

fn check_roles(inputs: &PlanInputs, mode: ParseMode) -> Result<()> {
    for dev in &inputs.developers {
        if inputs.roles.contains(&dev.role) {
            continue;
        }
        if mode.is_strict() {
            return Err(PlanError::UnknownReference(format!(
                "developer '{}' has unknown role '{}'",
                dev.name, dev.role
            )));
        }
        warn!(developer = %dev.name, role = %dev.role, "unknown role; developer contributes no progress");
    }
    Ok(())
}
