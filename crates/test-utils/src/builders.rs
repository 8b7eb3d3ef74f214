#![allow(dead_code)]

use chrono::NaiveDate;
use workplan::engine::{self, Schedule, ScheduleLimits, Scheduler};
use workplan::model::{Calendar, Developer, DutyPeriod, Role, RoleTable, Task};

/// Parse a `YYYY-MM-DD` literal.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date literal must be YYYY-MM-DD")
}

/// Role table from `(name, availability)` pairs.
pub fn roles(entries: &[(&str, f64)]) -> RoleTable {
    entries
        .iter()
        .map(|(name, availability)| Role::new(*name, *availability))
        .collect()
}

/// Builder for `Task` with already-adjusted effort.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(name: &str, task_type: &str) -> Self {
        Self {
            task: Task::new(name, task_type, 0, 1, 1.0),
        }
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.task.priority = priority;
        self
    }

    pub fn effort(mut self, effort: f64) -> Self {
        self.task.effort = effort;
        self
    }

    pub fn parallel(mut self, parallel_factor: usize) -> Self {
        self.task.parallel_factor = parallel_factor;
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for `Developer`.
pub struct DeveloperBuilder {
    dev: Developer,
}

impl DeveloperBuilder {
    pub fn new(name: &str, role: &str) -> Self {
        Self {
            dev: Developer::new(name, role, Vec::<String>::new()),
        }
    }

    pub fn skill(mut self, task_type: &str) -> Self {
        self.dev.task_types.push(task_type.to_string());
        self
    }

    pub fn build(self) -> Developer {
        self.dev
    }
}

/// Builder for the on-call / leave `Calendar`.
#[derive(Default)]
pub struct CalendarBuilder {
    oncalls: Vec<DutyPeriod>,
    leaves: Vec<DutyPeriod>,
}

impl CalendarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_call(mut self, dev: &str, from: &str, to: &str) -> Self {
        self.oncalls.push(DutyPeriod::new(dev, date(from), date(to)));
        self
    }

    pub fn leave(mut self, dev: &str, from: &str, to: &str) -> Self {
        self.leaves.push(DutyPeriod::new(dev, date(from), date(to)));
        self
    }

    pub fn build(self) -> Calendar {
        Calendar::new(self.oncalls, self.leaves)
    }
}

/// Everything one scheduling run needs, assembled fluently.
pub struct PlanBuilder {
    tasks: Vec<Task>,
    developers: Vec<Developer>,
    roles: RoleTable,
    calendar: Calendar,
    limits: ScheduleLimits,
}

impl PlanBuilder {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            developers: Vec::new(),
            roles: RoleTable::new(),
            calendar: Calendar::default(),
            limits: ScheduleLimits::default(),
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn with_developer(mut self, dev: Developer) -> Self {
        self.developers.push(dev);
        self
    }

    pub fn with_role(mut self, name: &str, availability: f64) -> Self {
        self.roles.insert(Role::new(name, availability));
        self
    }

    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn with_limits(mut self, limits: ScheduleLimits) -> Self {
        self.limits = limits;
        self
    }

    /// A scheduler that has not been started yet.
    pub fn scheduler(self) -> Scheduler {
        Scheduler::new(self.tasks, self.developers, self.roles, self.calendar, self.limits)
    }

    /// Run to completion (or to the safety bound) from `start`.
    pub fn run(self, start: &str) -> Schedule {
        engine::schedule(
            self.tasks,
            self.developers,
            self.roles,
            self.calendar,
            date(start),
            self.limits,
        )
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}
