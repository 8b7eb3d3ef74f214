// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::model::Task;
use crate::types::TaskName;

/// Dependency adjacency keyed by position in the task list.
///
/// Names are resolved once when the graph is built. A dependency name that
/// matches no task is kept aside as *dangling*; when a name occurs more than
/// once, references resolve to the first occurrence.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    names: Vec<TaskName>,
    index: HashMap<TaskName, usize>,
    /// Resolved direct dependencies of each task.
    deps: Vec<Vec<usize>>,
    /// Dependency names that did not resolve, per task.
    dangling: Vec<Vec<TaskName>>,
}

impl DependencyGraph {
    pub fn build(tasks: &[Task]) -> Self {
        let mut index: HashMap<TaskName, usize> = HashMap::with_capacity(tasks.len());
        for (i, task) in tasks.iter().enumerate() {
            index.entry(task.name.clone()).or_insert(i);
        }

        let mut deps = Vec::with_capacity(tasks.len());
        let mut dangling = Vec::with_capacity(tasks.len());

        for task in tasks {
            let mut resolved = Vec::new();
            let mut missing = Vec::new();
            for dep in &task.dependencies {
                match index.get(dep) {
                    Some(&idx) => resolved.push(idx),
                    None => missing.push(dep.clone()),
                }
            }
            deps.push(resolved);
            dangling.push(missing);
        }

        Self {
            names: tasks.iter().map(|t| t.name.clone()).collect(),
            index,
            deps,
            dangling,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn name_of(&self, idx: usize) -> Option<&str> {
        self.names.get(idx).map(|s| s.as_str())
    }

    /// Resolved direct dependencies of the task at `idx`.
    pub fn dependencies_of(&self, idx: usize) -> &[usize] {
        self.deps.get(idx).map(|d| d.as_slice()).unwrap_or(&[])
    }

    /// Dependency names of the task at `idx` that match no task.
    pub fn dangling_of(&self, idx: usize) -> &[TaskName] {
        self.dangling.get(idx).map(|d| d.as_slice()).unwrap_or(&[])
    }

    /// Every `(task, missing dependency)` pair.
    pub fn dangling(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().zip(&self.dangling).flat_map(|(name, missing)| {
            missing.iter().map(move |dep| (name.as_str(), dep.as_str()))
        })
    }

    /// Name of a task that lies on a dependency cycle, if there is one.
    ///
    /// Dangling references add no edge, so they never take part in a cycle.
    /// Only the first task with a given name contributes edges; later
    /// duplicates cannot be referenced and therefore cannot close a cycle.
    pub fn find_cycle(&self) -> Option<&str> {
        // Edge direction: task -> dependency.
        let mut graph: DiGraph<usize, ()> = DiGraph::with_capacity(self.len(), 0);
        let nodes: Vec<NodeIndex> = (0..self.len()).map(|i| graph.add_node(i)).collect();

        for (i, deps) in self.deps.iter().enumerate() {
            if self.index_of(&self.names[i]) != Some(i) {
                continue;
            }
            for &dep in deps {
                graph.add_edge(nodes[i], nodes[dep], ());
            }
        }

        // A topological sort fails exactly when there is a cycle (self loops
        // included).
        match toposort(&graph, None) {
            Ok(_order) => None,
            Err(cycle) => self.name_of(graph[cycle.node_id()]),
        }
    }

    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }
}
