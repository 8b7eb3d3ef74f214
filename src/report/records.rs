// src/report/records.rs

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::calendar::days_between;
use crate::model::{Calendar, DutyKind, DutyPeriod, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Task,
    OnCall,
    Leave,
}

/// One row of the emitted schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRecord {
    pub kind: RecordKind,
    /// Task name, or the duty label for on-call / leave rows.
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub developer: String,
    /// `(end - start)` in hours / 24.
    pub duration_days: f64,
}

impl ScheduleRecord {
    fn new(kind: RecordKind, label: impl Into<String>, start: NaiveDate, end: NaiveDate, developer: &str) -> Self {
        Self {
            kind,
            label: label.into(),
            start,
            end,
            developer: developer.trim().to_string(),
            duration_days: days_between(start, end),
        }
    }
}

/// Flatten a finished run into chronological rows.
///
/// - One row per developer of every completed task, from that developer's
///   own first day to the task's end date. Incomplete tasks are omitted.
/// - One row per on-call period and per leave period.
///
/// Rows are stably ordered by start date; on the same day task rows come
/// first, then on-call, then leave, each in input order.
pub fn build_records(tasks: &[Task], calendar: &Calendar) -> Vec<ScheduleRecord> {
    let mut records = Vec::new();

    for task in tasks.iter().filter(|t| t.is_completed) {
        let Some(end) = task.end_time else {
            continue;
        };
        for assignment in &task.assignments {
            records.push(ScheduleRecord::new(
                RecordKind::Task,
                task.name.as_str(),
                assignment.start,
                end,
                &assignment.developer,
            ));
        }
    }

    records.extend(duty_records(calendar.oncalls(), DutyKind::OnCall));
    records.extend(duty_records(calendar.leaves(), DutyKind::Leave));

    records.sort_by_key(|r| r.start);
    records
}

fn duty_records(periods: &[DutyPeriod], kind: DutyKind) -> impl Iterator<Item = ScheduleRecord> + '_ {
    let record_kind = match kind {
        DutyKind::OnCall => RecordKind::OnCall,
        DutyKind::Leave => RecordKind::Leave,
    };
    periods
        .iter()
        .map(move |p| ScheduleRecord::new(record_kind, kind.label(), p.start, p.end, &p.dev_name))
}
