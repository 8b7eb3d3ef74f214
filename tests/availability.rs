// tests/availability.rs
mod common;
use crate::common::builders::{CalendarBuilder, DeveloperBuilder, TaskBuilder, date};
use crate::common::{MONDAY, SATURDAY, init_tracing};

use workplan::engine::AvailabilityOracle;
use workplan::model::{Calendar, DutyKind};

#[test]
fn developer_needs_matching_skill() {
    init_tracing();

    let calendar = Calendar::default();
    let oracle = AvailabilityOracle::new(&calendar);
    let alice = DeveloperBuilder::new("alice", "Senior").skill("Backend").build();

    let backend = TaskBuilder::new("api", "Backend").build();
    let frontend = TaskBuilder::new("ui", "Frontend").build();
    // Matching is exact, including case.
    let lowercase = TaskBuilder::new("api2", "backend").build();

    assert!(oracle.is_available(&alice, &backend, date(MONDAY)));
    assert!(!oracle.is_available(&alice, &frontend, date(MONDAY)));
    assert!(!oracle.is_available(&alice, &lowercase, date(MONDAY)));
}

#[test]
fn reserved_developer_is_free_again_on_reservation_end() {
    init_tracing();

    let calendar = Calendar::default();
    let oracle = AvailabilityOracle::new(&calendar);
    let task = TaskBuilder::new("api", "Backend").build();

    let mut alice = DeveloperBuilder::new("alice", "Senior").skill("Backend").build();
    alice.next_free_time = date("2025-01-08");

    assert!(!oracle.is_available(&alice, &task, date("2025-01-07")));
    assert!(oracle.is_available(&alice, &task, date("2025-01-08")));
    assert!(oracle.is_available(&alice, &task, date("2025-01-09")));
}

#[test]
fn duty_periods_block_inclusively() {
    init_tracing();

    let calendar = CalendarBuilder::new()
        .on_call("alice", "2025-01-07", "2025-01-09")
        .leave("bob", "2025-01-06", "2025-01-06")
        .build();
    let oracle = AvailabilityOracle::new(&calendar);
    let task = TaskBuilder::new("api", "Backend").build();
    let alice = DeveloperBuilder::new("alice", "Senior").skill("Backend").build();
    let bob = DeveloperBuilder::new("bob", "Senior").skill("Backend").build();

    assert!(oracle.is_available(&alice, &task, date("2025-01-06")));
    assert!(!oracle.is_available(&alice, &task, date("2025-01-07")));
    assert!(!oracle.is_available(&alice, &task, date("2025-01-09")));
    assert!(oracle.is_available(&alice, &task, date("2025-01-10")));

    assert!(!oracle.is_available(&bob, &task, date("2025-01-06")));
    assert!(oracle.is_available(&bob, &task, date("2025-01-07")));

    assert_eq!(calendar.duty_on("alice", date("2025-01-08")), Some(DutyKind::OnCall));
    assert_eq!(calendar.duty_on("bob", date("2025-01-06")), Some(DutyKind::Leave));
    assert_eq!(calendar.duty_on("carol", date("2025-01-06")), None);
    assert!(calendar.is_on_call("alice", date("2025-01-07")));
    assert!(!calendar.is_on_leave("alice", date("2025-01-07")));
}

#[test]
fn weekends_do_not_gate_assignment() {
    init_tracing();

    let calendar = Calendar::default();
    let oracle = AvailabilityOracle::new(&calendar);
    let task = TaskBuilder::new("api", "Backend").build();
    let alice = DeveloperBuilder::new("alice", "Senior").skill("Backend").build();

    assert!(oracle.is_available(&alice, &task, date(SATURDAY)));
}

#[test]
fn available_developers_keeps_input_order() {
    init_tracing();

    let calendar = CalendarBuilder::new()
        .leave("bob", "2025-01-01", "2025-01-31")
        .build();
    let oracle = AvailabilityOracle::new(&calendar);
    let task = TaskBuilder::new("api", "Backend").build();

    let developers = vec![
        DeveloperBuilder::new("dave", "Senior").skill("Backend").build(),
        DeveloperBuilder::new("bob", "Senior").skill("Backend").build(),
        DeveloperBuilder::new("carol", "Senior").skill("Frontend").build(),
        DeveloperBuilder::new("alice", "Senior")
            .skill("Frontend")
            .skill("Backend")
            .build(),
    ];

    assert_eq!(
        oracle.available_developers(&developers, &task, date(MONDAY)),
        vec![0, 3]
    );
}
