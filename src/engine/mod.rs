// src/engine/mod.rs

//! Scheduling engine.
//!
//! - [`availability`] decides whether a developer may join a task on a date.
//! - [`effort`] adjusts effort and projects completion dates.
//! - [`scheduler`] is the day-stepping simulation that ties them together.
//!
//! The engine is synchronous and single-threaded. A run owns its tasks and
//! developers exclusively; run each schedule on a freshly loaded copy.

pub mod availability;
pub mod effort;
pub mod scheduler;

use chrono::NaiveDate;

use crate::model::{Calendar, Developer, RoleTable, Task};
use crate::types::TaskName;

pub use availability::AvailabilityOracle;
pub use effort::{EffortModel, Projection, adjusted_effort, companion_effort};
pub use scheduler::Scheduler;

/// Default bound on working days walked by one end-date projection.
pub const DEFAULT_MAX_PROJECTION_DAYS: u32 = 365;
/// Default bound on simulated workdays for a whole run (about ten years).
pub const DEFAULT_MAX_SCHEDULE_DAYS: u32 = 3650;

/// Safety bounds against configurations that never make progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleLimits {
    pub max_projection_days: u32,
    pub max_schedule_days: u32,
}

impl Default for ScheduleLimits {
    fn default() -> Self {
        Self {
            max_projection_days: DEFAULT_MAX_PROJECTION_DAYS,
            max_schedule_days: DEFAULT_MAX_SCHEDULE_DAYS,
        }
    }
}

/// What changed during one simulated workday.
#[derive(Debug, Clone, PartialEq)]
pub struct DayStep {
    pub date: NaiveDate,
    /// Tasks whose first developer joined today.
    pub started: Vec<TaskName>,
    /// `(task, developer)` pairs assigned today.
    pub assigned: Vec<(TaskName, String)>,
    /// Tasks marked completed today.
    pub completed: Vec<TaskName>,
    /// Every task in the run is now completed.
    pub all_completed: bool,
}

impl DayStep {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            started: Vec::new(),
            assigned: Vec::new(),
            completed: Vec::new(),
            all_completed: false,
        }
    }
}

/// Summary of a finished (or bounded) run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOutcome {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// Tasks no developer could ever work on; removed before the run.
    pub dropped_tasks: Vec<TaskName>,
    pub days_simulated: u32,
    /// The run stopped at `max_schedule_days` with work left.
    pub hit_schedule_bound: bool,
    /// Tasks whose end date is a one-year projection fallback.
    pub projection_fallbacks: Vec<TaskName>,
    /// Latest end date among completed tasks.
    pub finish_date: Option<NaiveDate>,
}

impl ScheduleOutcome {
    pub fn is_complete(&self) -> bool {
        !self.hit_schedule_bound && self.completed_tasks == self.total_tasks
    }
}

/// The mutated tasks of a run, with the calendar it used.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub tasks: Vec<Task>,
    pub developers: Vec<Developer>,
    pub calendar: Calendar,
    pub outcome: ScheduleOutcome,
}

/// Run the simulation from `start` over validated, acyclic inputs.
pub fn schedule(
    tasks: Vec<Task>,
    developers: Vec<Developer>,
    roles: RoleTable,
    calendar: Calendar,
    start: NaiveDate,
    limits: ScheduleLimits,
) -> Schedule {
    let mut scheduler = Scheduler::new(tasks, developers, roles, calendar, limits);
    scheduler.run(start);
    scheduler.into_schedule()
}
