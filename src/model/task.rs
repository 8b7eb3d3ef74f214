// src/model/task.rs

//! Task definition plus the per-run simulation state the engine mutates.

use chrono::NaiveDate;

use crate::types::TaskName;

/// Where a task came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOrigin {
    /// A row of the tasks table.
    Input,
    /// Generated `<parent>_Frontend` companion.
    Frontend { parent: TaskName },
    /// Generated `<parent>_QA` companion.
    Qa { parent: TaskName },
}

/// One developer joining a task on a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub developer: String,
    /// Row of the developer in the run's developer list. Names need not be
    /// unique, so reservations go through this index.
    pub developer_index: usize,
    pub start: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub name: TaskName,
    /// Category matched against [`Developer::task_types`](crate::model::Developer).
    pub task_type: String,
    /// Lower values are scheduled first.
    pub priority: i64,
    /// Maximum number of developers working on the task at once (>= 1).
    pub parallel_factor: usize,
    /// Adjusted effort in work-units.
    pub effort: f64,
    pub dependencies: Vec<TaskName>,
    pub origin: TaskOrigin,

    /// Developers in the order they joined, each with their first day.
    pub assignments: Vec<Assignment>,
    pub start_time: Option<NaiveDate>,
    pub end_time: Option<NaiveDate>,
    pub is_completed: bool,
}

impl Task {
    pub fn new(
        name: impl Into<TaskName>,
        task_type: impl Into<String>,
        priority: i64,
        parallel_factor: usize,
        effort: f64,
    ) -> Self {
        Self {
            name: name.into(),
            task_type: task_type.into(),
            priority,
            parallel_factor,
            effort,
            dependencies: Vec::new(),
            origin: TaskOrigin::Input,
            assignments: Vec::new(),
            start_time: None,
            end_time: None,
            is_completed: false,
        }
    }

    pub fn with_dependencies(mut self, deps: impl IntoIterator<Item = impl Into<TaskName>>) -> Self {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_origin(mut self, origin: TaskOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Assigned developer names in assignment order.
    pub fn assigned_devs(&self) -> impl Iterator<Item = &str> {
        self.assignments.iter().map(|a| a.developer.as_str())
    }

    pub fn is_assigned(&self, developer: &str) -> bool {
        self.assignments.iter().any(|a| a.developer == developer)
    }

    /// Whether the developer at row `developer_index` already holds a slot.
    pub fn holds_slot(&self, developer_index: usize) -> bool {
        self.assignments
            .iter()
            .any(|a| a.developer_index == developer_index)
    }

    pub fn dev_start_time(&self, developer: &str) -> Option<NaiveDate> {
        self.assignments
            .iter()
            .find(|a| a.developer == developer)
            .map(|a| a.start)
    }

    /// An assignment has begun (a first developer joined).
    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Both dates are known, whether or not the task finished.
    pub fn is_scheduled(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }

    pub fn open_slots(&self) -> usize {
        self.parallel_factor.saturating_sub(self.assignments.len())
    }
}
