// src/engine/scheduler.rs

//! Day-stepping greedy simulation.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, info, trace, warn};

use crate::dag::DependencyGraph;
use crate::engine::availability::AvailabilityOracle;
use crate::engine::effort::EffortModel;
use crate::engine::{DayStep, Schedule, ScheduleLimits, ScheduleOutcome};
use crate::model::calendar::{days_between, next_workday};
use crate::model::{Assignment, Calendar, Developer, RoleTable, Task};
use crate::types::TaskName;

/// Scheduler owns the tasks and developers of a single run.
///
/// It is responsible for:
/// - dropping tasks nobody can work on and ordering the rest by priority
/// - gating tasks on their dependencies
/// - assigning available developers to ready tasks, up to their parallel factor
/// - projecting end dates and reserving developers until then
/// - marking tasks completed once the simulated date reaches their end date
///
/// A run is single-shot: call [`Scheduler::run`] (or [`Scheduler::begin`]
/// followed by [`Scheduler::step`]) once per freshly loaded set of inputs.
#[derive(Debug)]
pub struct Scheduler {
    tasks: Vec<Task>,
    developers: Vec<Developer>,
    roles: RoleTable,
    calendar: Calendar,
    limits: ScheduleLimits,
    /// Built over the filtered, priority-ordered task list in `begin`.
    graph: DependencyGraph,
    /// Developer name -> index in `developers` (first occurrence wins).
    dev_index: HashMap<String, usize>,
    dropped: Vec<TaskName>,
    projection_fallbacks: Vec<TaskName>,
    days_simulated: u32,
    hit_schedule_bound: bool,
}

impl Scheduler {
    pub fn new(
        tasks: Vec<Task>,
        developers: Vec<Developer>,
        roles: RoleTable,
        calendar: Calendar,
        limits: ScheduleLimits,
    ) -> Self {
        let mut dev_index = HashMap::with_capacity(developers.len());
        for (idx, dev) in developers.iter().enumerate() {
            dev_index.entry(dev.name.clone()).or_insert(idx);
        }

        Self {
            tasks,
            developers,
            roles,
            calendar,
            limits,
            graph: DependencyGraph::default(),
            dev_index,
            dropped: Vec::new(),
            projection_fallbacks: Vec::new(),
            days_simulated: 0,
            hit_schedule_bound: false,
        }
    }

    /// Tasks in scheduling order (after [`Scheduler::begin`]).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    pub fn developers(&self) -> &[Developer] {
        &self.developers
    }

    pub fn developer(&self, name: &str) -> Option<&Developer> {
        self.dev_index.get(name).map(|&idx| &self.developers[idx])
    }

    pub fn dropped_tasks(&self) -> &[TaskName] {
        &self.dropped
    }

    /// Per-run initialization.
    ///
    /// - Tasks with no developer able to work on their type are dropped.
    /// - Remaining tasks are stably sorted by ascending priority.
    /// - Every developer becomes free from `start`.
    pub fn begin(&mut self, start: NaiveDate) {
        let developers = &self.developers;
        let (kept, dropped): (Vec<Task>, Vec<Task>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|task| developers.iter().any(|d| d.can_work_on(&task.task_type)));

        for task in &dropped {
            warn!(task = %task.name, task_type = %task.task_type, "no developer can work on task; dropping it");
        }
        self.dropped = dropped.into_iter().map(|t| t.name).collect();

        self.tasks = kept;
        self.tasks.sort_by_key(|t| t.priority);

        for dev in self.developers.iter_mut() {
            dev.next_free_time = start;
        }

        self.graph = DependencyGraph::build(&self.tasks);
        self.projection_fallbacks.clear();
        self.days_simulated = 0;
        self.hit_schedule_bound = false;

        info!(
            %start,
            tasks = self.tasks.len(),
            developers = self.developers.len(),
            dropped = self.dropped.len(),
            "starting schedule"
        );
    }

    /// Run the whole simulation from `start`.
    ///
    /// Stops when every task is completed or after `max_schedule_days`
    /// simulated workdays, whichever comes first.
    pub fn run(&mut self, start: NaiveDate) -> ScheduleOutcome {
        self.begin(start);

        let mut current = start;
        let mut iterations = 0u32;
        let mut finished = false;

        while iterations < self.limits.max_schedule_days {
            let step = self.step(current);
            if step.all_completed {
                finished = true;
                iterations += 1;
                break;
            }
            current = next_workday(current);
            iterations += 1;
        }

        self.days_simulated = iterations;
        self.hit_schedule_bound = !finished;

        let outcome = self.outcome();
        if finished {
            info!(
                days = outcome.days_simulated,
                finish = ?outcome.finish_date,
                "all tasks scheduled"
            );
        } else {
            warn!(
                max_schedule_days = self.limits.max_schedule_days,
                completed = outcome.completed_tasks,
                total = outcome.total_tasks,
                "max scheduling iterations reached; schedule may be incomplete"
            );
        }
        outcome
    }

    /// Simulate one workday.
    pub fn step(&mut self, date: NaiveDate) -> DayStep {
        let mut step = DayStep::new(date);

        self.observe_completed();

        for idx in 0..self.tasks.len() {
            if self.tasks[idx].is_completed {
                continue;
            }

            if !self.dependencies_completed(idx) {
                trace!(task = %self.tasks[idx].name, %date, "dependencies not completed; pending");
                continue;
            }

            let available = {
                let oracle = AvailabilityOracle::new(&self.calendar);
                oracle.available_developers(&self.developers, &self.tasks[idx], date)
            };
            debug!(
                task = %self.tasks[idx].name,
                %date,
                available = available.len(),
                "found available developers"
            );
            if available.is_empty() {
                continue;
            }

            if !self.tasks[idx].is_started() {
                let task = &mut self.tasks[idx];
                task.start_time = Some(date);
                task.assignments.clear();
                step.started.push(task.name.clone());
            }

            let added = self.fill_slots(idx, &available, date);
            if !added.is_empty() {
                self.update_end_time(idx, added.len(), date);
                let name = self.tasks[idx].name.clone();
                step.assigned
                    .extend(added.into_iter().map(|dev| (name.clone(), dev)));
            }

            let task = &mut self.tasks[idx];
            if task.end_time.is_some_and(|end| date >= end) {
                task.is_completed = true;
                info!(
                    task = %task.name,
                    start = ?task.start_time,
                    end = ?task.end_time,
                    developers = task.assignments.len(),
                    "task completed"
                );
                step.completed.push(task.name.clone());
            }
        }

        step.all_completed = self.tasks.iter().all(|t| t.is_completed);
        step
    }

    /// Finish the run and hand back the mutated state.
    pub fn into_schedule(self) -> Schedule {
        let outcome = self.outcome();
        Schedule {
            tasks: self.tasks,
            developers: self.developers,
            calendar: self.calendar,
            outcome,
        }
    }

    pub fn outcome(&self) -> ScheduleOutcome {
        let completed: Vec<&Task> = self.tasks.iter().filter(|t| t.is_completed).collect();
        ScheduleOutcome {
            total_tasks: self.tasks.len(),
            completed_tasks: completed.len(),
            dropped_tasks: self.dropped.clone(),
            days_simulated: self.days_simulated,
            hit_schedule_bound: self.hit_schedule_bound,
            projection_fallbacks: self.projection_fallbacks.clone(),
            finish_date: completed.iter().filter_map(|t| t.end_time).max(),
        }
    }

    /// Developers were already released when their task's end date was
    /// projected; this only reports them.
    fn observe_completed(&self) {
        for task in self.tasks.iter().filter(|t| t.is_completed && !t.assignments.is_empty()) {
            trace!(
                task = %task.name,
                end = ?task.end_time,
                developers = ?task.assigned_devs().collect::<Vec<_>>(),
                "developers free after completed task"
            );
        }
    }

    /// A dependency that resolves to no task in this run is never completed.
    fn dependencies_completed(&self, idx: usize) -> bool {
        if !self.graph.dangling_of(idx).is_empty() {
            return false;
        }
        self.graph
            .dependencies_of(idx)
            .iter()
            .all(|&dep| self.tasks[dep].is_completed)
    }

    /// Assign up to `open_slots` new developers, in the order given.
    ///
    /// Returns the names of the developers added.
    fn fill_slots(&mut self, idx: usize, available: &[usize], date: NaiveDate) -> Vec<String> {
        let task = &mut self.tasks[idx];
        let open = task.open_slots();

        let chosen: Vec<usize> = available
            .iter()
            .copied()
            .filter(|&d| !task.holds_slot(d))
            .take(open)
            .collect();

        if chosen.is_empty() {
            trace!(task = %task.name, "no open slots or no new developers");
            return Vec::new();
        }

        let mut added = Vec::with_capacity(chosen.len());
        for dev_idx in chosen {
            let name = self.developers[dev_idx].name.clone();
            debug!(task = %task.name, developer = %name, %date, "assigning developer");
            task.assignments.push(Assignment {
                developer: name.clone(),
                developer_index: dev_idx,
                start: date,
            });
            added.push(name);
        }

        added
    }

    /// Re-project the task's end date after `newly_added` developers joined,
    /// and reserve every assigned developer until then.
    fn update_end_time(&mut self, idx: usize, newly_added: usize, date: NaiveDate) {
        let task = &self.tasks[idx];
        let prior = &task.assignments[..task.assignments.len() - newly_added];

        // Effort already contributed by developers who joined earlier, each
        // from their own first day.
        let mut contributed = 0.0;
        for assignment in prior {
            let dev = &self.developers[assignment.developer_index];
            if let Some(availability) = self.roles.availability_of(&dev.role) {
                contributed += availability * days_between(assignment.start, date);
            }
        }
        let remaining = task.effort - contributed;

        let assigned: Vec<usize> = task.assignments.iter().map(|a| a.developer_index).collect();
        let devs: Vec<&Developer> = assigned.iter().map(|&d| &self.developers[d]).collect();

        let model = EffortModel::new(&self.roles, &self.calendar, self.limits.max_projection_days);
        let projection = model.project_end_date(&devs, date, remaining);

        if projection.saturated {
            warn!(
                task = %task.name,
                %date,
                remaining,
                max_projection_days = self.limits.max_projection_days,
                fallback = %projection.end_date,
                "max iterations reached while projecting end date; using fallback"
            );
            if !self.projection_fallbacks.contains(&task.name) {
                self.projection_fallbacks.push(task.name.clone());
            }
        }

        for dev_idx in assigned {
            self.developers[dev_idx].next_free_time = projection.end_date;
        }
        self.tasks[idx].end_time = Some(projection.end_date);
    }
}
