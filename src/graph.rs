//! Precedence graph over the task list.
//!
//! Directed acyclic graph where an edge predecessor → task means the task
//! cannot be assigned before its predecessor. Built once per balancing run
//! from the problem's task list; structural validation (duplicate IDs,
//! unknown predecessor references, cycles) happens here, at the point the
//! adjacency structure is constructed.
//!
//! Tasks are addressed by their index in the input list, which keeps the
//! allocator free of string lookups and makes input order — the tie-break
//! key — explicit.
//!
//! # Reference
//! Kahn (1962), "Topological sorting of large networks";
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

use std::collections::{HashMap, VecDeque};

use crate::models::Task;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Immutable precedence DAG with a precomputed topological order.
#[derive(Debug, Clone)]
pub struct PrecedenceGraph {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    predecessors: Vec<Vec<usize>>,
    successors: Vec<Vec<usize>>,
    topological: Vec<usize>,
}

impl PrecedenceGraph {
    /// Builds the graph from a task list.
    ///
    /// Fails with `DuplicateId` if two tasks share an identifier,
    /// `UnknownPredecessor` if an edge endpoint is not in the list, and
    /// `CyclicPrecedence` if the relation contains a cycle. All detected
    /// errors are collected and returned together.
    pub fn build(tasks: &[Task]) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let mut ids = Vec::with_capacity(tasks.len());
        let mut index = HashMap::with_capacity(tasks.len());
        for (i, task) in tasks.iter().enumerate() {
            if index.insert(task.id.clone(), i).is_some() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate task ID: {}", task.id),
                ));
            }
            ids.push(task.id.clone());
        }

        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];
        for (i, task) in tasks.iter().enumerate() {
            for pred_id in &task.predecessors {
                match index.get(pred_id.as_str()) {
                    Some(&p) => {
                        predecessors[i].push(p);
                        successors[p].push(i);
                    }
                    None => errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownPredecessor,
                        format!("Task '{}' references unknown predecessor '{pred_id}'", task.id),
                    )),
                }
            }
        }

        // Kahn's algorithm: repeatedly remove zero-in-degree nodes. The
        // ready queue is seeded and drained in input order, so the
        // resulting order is deterministic.
        let mut in_degree: Vec<usize> = predecessors.iter().map(Vec::len).collect();
        let mut ready: VecDeque<usize> = (0..tasks.len()).filter(|&i| in_degree[i] == 0).collect();
        let mut topological = Vec::with_capacity(tasks.len());

        while let Some(node) = ready.pop_front() {
            topological.push(node);
            for &succ in &successors[node] {
                in_degree[succ] -= 1;
                if in_degree[succ] == 0 {
                    ready.push_back(succ);
                }
            }
        }

        if topological.len() < tasks.len() {
            // Nodes never reaching in-degree zero sit on a cycle.
            let stuck = (0..tasks.len())
                .find(|&i| in_degree[i] > 0)
                .map(|i| ids[i].clone())
                .unwrap_or_default();
            errors.push(ValidationError::new(
                ValidationErrorKind::CyclicPrecedence,
                format!("Precedence cycle detected involving task '{stuck}'"),
            ));
        }

        if errors.is_empty() {
            Ok(Self {
                ids,
                index,
                predecessors,
                successors,
                topological,
            })
        } else {
            Err(errors)
        }
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Index of a task ID, if known.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Task ID at the given index.
    pub fn id_of(&self, index: usize) -> &str {
        &self.ids[index]
    }

    /// Tasks in a valid topological order (predecessors first).
    pub fn topological_order(&self) -> &[usize] {
        &self.topological
    }

    /// Direct predecessors of a task.
    pub fn predecessors(&self, index: usize) -> &[usize] {
        &self.predecessors[index]
    }

    /// Direct successors of a task.
    pub fn successors(&self, index: usize) -> &[usize] {
        &self.successors[index]
    }

    /// Direct predecessors of a task by ID.
    pub fn predecessors_of(&self, id: &str) -> Option<Vec<&str>> {
        let index = self.index_of(id)?;
        Some(self.predecessors[index].iter().map(|&p| self.id_of(p)).collect())
    }

    /// Direct successors of a task by ID.
    pub fn successors_of(&self, id: &str) -> Option<Vec<&str>> {
        let index = self.index_of(id)?;
        Some(self.successors[index].iter().map(|&s| self.id_of(s)).collect())
    }
}
