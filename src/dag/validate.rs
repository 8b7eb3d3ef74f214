// src/dag/validate.rs

use tracing::debug;

use crate::dag::graph::DependencyGraph;
use crate::errors::{PlanError, Result};
use crate::model::Task;

/// Whether the dependency relation over `tasks` contains a cycle.
///
/// References to unknown task names are treated as satisfied.
pub fn has_cycle(tasks: &[Task]) -> bool {
    DependencyGraph::build(tasks).has_cycle()
}

/// Gate that must pass before the scheduling engine may run.
///
/// Dependencies naming no task add no edge. Whether they are allowed at all
/// is decided when the inputs are validated.
pub fn ensure_acyclic(tasks: &[Task]) -> Result<()> {
    let graph = DependencyGraph::build(tasks);

    for (task, missing) in graph.dangling() {
        debug!(task = %task, dependency = %missing, "dependency names no known task; not part of any cycle");
    }

    match graph.find_cycle() {
        Some(task) => Err(PlanError::DependencyCycle(format!(
            "cycle detected in task dependencies involving task '{task}'"
        ))),
        None => {
            debug!(tasks = graph.len(), "dependency graph is acyclic");
            Ok(())
        }
    }
}
