// tests/dependency_cycles.rs
mod common;
use crate::common::builders::TaskBuilder;
use crate::common::init_tracing;

use std::error::Error;

use workplan::dag::{DependencyGraph, ensure_acyclic, has_cycle};
use workplan::errors::PlanError;
use workplan::model::Task;

type TestResult = Result<(), Box<dyn Error>>;

fn task(name: &str, deps: &[&str]) -> Task {
    let mut builder = TaskBuilder::new(name, "Backend");
    for dep in deps {
        builder = builder.after(dep);
    }
    builder.build()
}

#[test]
fn three_task_ring_is_cyclic() {
    init_tracing();

    let tasks = vec![task("A", &["B"]), task("B", &["C"]), task("C", &["A"])];
    assert!(has_cycle(&tasks));
}

#[test]
fn diamond_is_not_cyclic() {
    init_tracing();

    let tasks = vec![
        task("A", &["B", "C"]),
        task("B", &["D"]),
        task("C", &["D"]),
        task("D", &[]),
    ];
    assert!(!has_cycle(&tasks));
}

#[test]
fn self_dependency_is_a_cycle() {
    init_tracing();

    assert!(has_cycle(&[task("A", &["A"])]));
}

#[test]
fn dangling_reference_is_treated_as_satisfied() {
    init_tracing();

    let tasks = vec![task("A", &["Ghost"]), task("B", &["A"])];
    assert!(!has_cycle(&tasks));
}

#[test]
fn cycle_is_found_behind_an_acyclic_prefix() {
    init_tracing();

    let tasks = vec![
        task("root", &[]),
        task("X", &["root", "Y"]),
        task("Y", &["Z"]),
        task("Z", &["X"]),
    ];
    assert!(has_cycle(&tasks));
}

#[test]
fn ensure_acyclic_returns_structured_cycle_error() {
    init_tracing();

    let tasks = vec![task("A", &["B"]), task("B", &["A"])];

    match ensure_acyclic(&tasks) {
        Err(PlanError::DependencyCycle(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains("A") || msg.contains("B"));
        }
        Err(e) => panic!("Expected DependencyCycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn cycle_gate_lets_dangling_references_through() -> TestResult {
    init_tracing();

    // Rejecting unknown names is the job of input validation.
    let tasks = vec![task("A", &["Ghost"]), task("B", &["A"])];
    ensure_acyclic(&tasks)?;
    Ok(())
}

#[test]
fn graph_resolves_names_to_indices_once() {
    init_tracing();

    let tasks = vec![task("A", &[]), task("B", &["A", "Ghost"]), task("A", &[])];
    let graph = DependencyGraph::build(&tasks);

    assert_eq!(graph.len(), 3);
    // Duplicate names resolve to the first occurrence.
    assert_eq!(graph.index_of("A"), Some(0));
    assert_eq!(graph.dependencies_of(1), &[0]);
    assert_eq!(graph.dangling_of(1), &["Ghost".to_string()]);

    let dangling: Vec<(&str, &str)> = graph.dangling().collect();
    assert_eq!(dangling, vec![("B", "Ghost")]);
}
