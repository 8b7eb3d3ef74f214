// src/report/timeline.rs

use serde::{Deserialize, Serialize};

use crate::input::tables::DATE_FORMAT;
use crate::model::{Calendar, Task};

/// Item consumed by the timeline visualisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub id: String,
    pub start: String,
    pub end: String,
    pub content: String,
}

/// Timeline items for every scheduled task (completed or not), followed by
/// on-call and leave periods.
pub fn build_timeline(tasks: &[Task], calendar: &Calendar) -> Vec<TimelineItem> {
    let mut items = Vec::new();

    for task in tasks {
        let (Some(_), Some(end)) = (task.start_time, task.end_time) else {
            continue;
        };
        for assignment in &task.assignments {
            items.push(TimelineItem {
                id: format!("task_{}_{}", task.name, assignment.developer),
                start: assignment.start.format(DATE_FORMAT).to_string(),
                end: end.format(DATE_FORMAT).to_string(),
                content: format!("Task: {} (Assigned to: {})", task.name, assignment.developer),
            });
        }
    }

    for (i, oncall) in calendar.oncalls().iter().enumerate() {
        items.push(TimelineItem {
            id: format!("oncall_{i}"),
            start: oncall.start.format(DATE_FORMAT).to_string(),
            end: oncall.end.format(DATE_FORMAT).to_string(),
            content: format!("On-call: {}", oncall.dev_name),
        });
    }

    for (i, leave) in calendar.leaves().iter().enumerate() {
        items.push(TimelineItem {
            id: format!("leave_{i}"),
            start: leave.start.format(DATE_FORMAT).to_string(),
            end: leave.end.format(DATE_FORMAT).to_string(),
            content: format!("Leave: {}", leave.dev_name),
        });
    }

    items
}
