// tests/report_output.rs
mod common;
use crate::common::builders::{CalendarBuilder, DeveloperBuilder, PlanBuilder, TaskBuilder, date};
use crate::common::{MONDAY, init_tracing};

use std::error::Error;

use workplan::engine::{Schedule, ScheduleLimits};
use workplan::report::{
    CSV_HEADER, RecordKind, TimelineItem, build_records, build_timeline, render_row,
    write_records_csv, write_timeline_json,
};

type TestResult = Result<(), Box<dyn Error>>;

fn small_team() -> Schedule {
    PlanBuilder::new()
        .with_role("Senior", 1.0)
        .with_developer(DeveloperBuilder::new("alice", "Senior").skill("Backend").build())
        .with_calendar(
            CalendarBuilder::new()
                .on_call("bob", "2025-01-06", "2025-01-10")
                .leave("carol", "2025-01-03", "2025-01-03")
                .build(),
        )
        .with_task(TaskBuilder::new("api", "Backend").effort(2.0).build())
        .run(MONDAY)
}

#[test]
fn records_are_chronological_with_tasks_first_on_ties() {
    init_tracing();

    let schedule = small_team();
    let records = build_records(&schedule.tasks, &schedule.calendar);

    let kinds: Vec<RecordKind> = records.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![RecordKind::Leave, RecordKind::Task, RecordKind::OnCall]
    );

    let task = &records[1];
    assert_eq!(task.label, "api");
    assert_eq!(task.developer, "alice");
    assert_eq!(task.start, date(MONDAY));
    assert_eq!(task.end, date("2025-01-07"));
    assert_eq!(task.duration_days, 1.0);

    assert_eq!(records[0].label, "Leave");
    assert_eq!(records[2].label, "On-Call Duty");
    assert_eq!(records[2].duration_days, 4.0);
}

#[test]
fn csv_has_header_and_two_decimal_durations() -> TestResult {
    init_tracing();

    let schedule = small_team();
    let records = build_records(&schedule.tasks, &schedule.calendar);

    let mut buf = Vec::new();
    write_records_csv(&mut buf, &records)?;
    let text = String::from_utf8(buf)?;
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], CSV_HEADER.join(","));
    assert_eq!(
        lines[0],
        "Task,Start Date,End Date,Assigned Developers,Effort Per Developer"
    );
    assert_eq!(lines[1], "Leave,2025-01-03,2025-01-03,carol,0.00");
    assert_eq!(lines[2], "api,2025-01-06,2025-01-07,alice,1.00");
    assert_eq!(lines[3], "On-Call Duty,2025-01-06,2025-01-10,bob,4.00");
    assert_eq!(lines.len(), 4);

    assert_eq!(render_row(&records[1]), lines[2]);
    Ok(())
}

#[test]
fn incomplete_tasks_are_omitted_from_records_but_not_timeline() {
    init_tracing();

    let schedule = PlanBuilder::new()
        .with_role("Senior", 1.0)
        .with_developer(DeveloperBuilder::new("alice", "Senior").skill("Backend").build())
        .with_limits(ScheduleLimits {
            max_projection_days: 365,
            max_schedule_days: 1,
        })
        .with_task(TaskBuilder::new("api", "Backend").effort(2.0).build())
        .run(MONDAY);

    assert!(schedule.outcome.hit_schedule_bound);
    assert!(build_records(&schedule.tasks, &schedule.calendar).is_empty());

    let items = build_timeline(&schedule.tasks, &schedule.calendar);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "task_api_alice");
    assert_eq!(items[0].end, "2025-01-07");
}

#[test]
fn timeline_items_follow_task_oncall_leave_order() -> TestResult {
    init_tracing();

    let schedule = small_team();
    let items = build_timeline(&schedule.tasks, &schedule.calendar);

    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["task_api_alice", "oncall_0", "leave_0"]);
    assert_eq!(items[0].content, "Task: api (Assigned to: alice)");
    assert_eq!(items[1].content, "On-call: bob");
    assert_eq!(items[2].content, "Leave: carol");
    assert_eq!(items[2].start, "2025-01-03");

    let mut buf = Vec::new();
    write_timeline_json(&mut buf, &items)?;
    let parsed: Vec<TimelineItem> = serde_json::from_slice(&buf)?;
    assert_eq!(parsed, items);
    Ok(())
}
