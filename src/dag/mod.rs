// src/dag/mod.rs

//! Task dependency graph and its validation.
//!
//! - [`graph`] resolves dependency names to task indices once.
//! - [`validate`] is the cycle gate run before any scheduling.

pub mod graph;
pub mod validate;

pub use graph::DependencyGraph;
pub use validate::{ensure_acyclic, has_cycle};
