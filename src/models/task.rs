//! Task (work element) model.
//!
//! A task is the smallest assignable unit of work on the line. It has a
//! processing duration and a list of immediate predecessors that must be
//! assigned to a station no later than the task itself.
//!
//! # Reference
//! Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 1

use serde::{Deserialize, Serialize};

/// A task to be assigned to a workstation.
///
/// Immutable once the problem is accepted. The position of a task in the
/// problem's task list doubles as the tie-break key during ranking, so
/// input order is part of the problem definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Processing duration in seconds. Must be positive.
    pub duration_secs: f64,
    /// IDs of tasks that must be assigned no later than this one.
    #[serde(default)]
    pub predecessors: Vec<String>,
}

impl Task {
    /// Creates a task with the given ID and zero duration.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            duration_secs: 0.0,
            predecessors: Vec::new(),
        }
    }

    /// Sets the human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the processing duration (seconds).
    pub fn with_duration(mut self, duration_secs: f64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Adds an immediate predecessor.
    pub fn with_predecessor(mut self, predecessor_id: impl Into<String>) -> Self {
        self.predecessors.push(predecessor_id.into());
        self
    }

    /// Adds several immediate predecessors at once.
    pub fn with_predecessors<I, S>(mut self, predecessor_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predecessors
            .extend(predecessor_ids.into_iter().map(Into::into));
        self
    }

    /// Whether this task can start the line (no predecessors).
    pub fn is_initial(&self) -> bool {
        self.predecessors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_builder() {
        let task = Task::new("H")
            .with_name("Final inspection")
            .with_duration(20.0)
            .with_predecessors(["D", "E"]);

        assert_eq!(task.id, "H");
        assert_eq!(task.name, "Final inspection");
        assert_eq!(task.duration_secs, 20.0);
        assert_eq!(task.predecessors, vec!["D", "E"]);
        assert!(!task.is_initial());
    }

    #[test]
    fn test_initial_task() {
        let task = Task::new("A").with_duration(40.0);
        assert!(task.is_initial());
    }
}
