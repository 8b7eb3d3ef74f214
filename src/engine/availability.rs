// src/engine/availability.rs

//! Answers "may this developer join this task today?".

use chrono::NaiveDate;
use tracing::trace;

use crate::model::{Calendar, Developer, Task};

/// Read-only eligibility checks over the duty calendar.
///
/// Availability for assignment is not weekend-gated; weekends only matter
/// when progress is accrued (see [`EffortModel`](crate::engine::EffortModel)).
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityOracle<'a> {
    calendar: &'a Calendar,
}

impl<'a> AvailabilityOracle<'a> {
    pub fn new(calendar: &'a Calendar) -> Self {
        Self { calendar }
    }

    /// All of: skill match, not reserved past `date`, not on call, not on leave.
    pub fn is_available(&self, dev: &Developer, task: &Task, date: NaiveDate) -> bool {
        if !dev.can_work_on(&task.task_type) {
            trace!(developer = %dev.name, task_type = %task.task_type, "cannot work on task type");
            return false;
        }

        if date < dev.next_free_time {
            trace!(developer = %dev.name, until = %dev.next_free_time, "developer busy");
            return false;
        }

        if self.is_blocked(&dev.name, date) {
            return false;
        }

        true
    }

    /// On call or on leave on `date`.
    pub fn is_blocked(&self, dev_name: &str, date: NaiveDate) -> bool {
        match self.calendar.duty_on(dev_name, date) {
            Some(kind) => {
                trace!(developer = %dev_name, %date, duty = %kind, "developer blocked by calendar");
                true
            }
            None => false,
        }
    }

    /// Indices into `developers` of everyone available for `task` on `date`,
    /// in input order.
    pub fn available_developers(
        &self,
        developers: &[Developer],
        task: &Task,
        date: NaiveDate,
    ) -> Vec<usize> {
        developers
            .iter()
            .enumerate()
            .filter(|(_, dev)| self.is_available(dev, task, date))
            .map(|(idx, _)| idx)
            .collect()
    }
}
