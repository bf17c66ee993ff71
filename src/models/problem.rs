//! Balancing problem (input container).
//!
//! Bundles everything a balancing run consumes: the ordered task list, the
//! cycle time, and the ranking heuristic. Replaces interactive data entry —
//! callers build a problem in code or deserialize one from configuration.

use serde::{Deserialize, Serialize};

use super::Task;

/// Ranking heuristic used to order eligible tasks.
///
/// # Reference
/// Helgeson & Birnie (1961) introduced the ranked positional weight
/// technique; longest-task-time is the classic work-element analogue of LPT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Rank eligible tasks by their own duration, longest first.
    #[default]
    LongestTaskTime,
    /// Rank eligible tasks by positional weight (own duration plus the
    /// weights of direct successors), heaviest first.
    RankedPositionalWeight,
}

/// Input container for a balancing run.
///
/// Task order matters: tasks with equal ranking keys are placed in the
/// order they appear here.
///
/// # Example
///
/// ```
/// use line_balance::models::{BalancingProblem, Heuristic, Task};
///
/// let problem = BalancingProblem::new(10.0)
///     .with_task(Task::new("A").with_duration(8.0))
///     .with_task(Task::new("B").with_duration(5.0).with_predecessor("A"))
///     .with_heuristic(Heuristic::LongestTaskTime);
///
/// assert_eq!(problem.tasks.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancingProblem {
    /// Tasks in tie-break order.
    pub tasks: Vec<Task>,
    /// Maximum cumulative task duration per station (seconds).
    pub cycle_time_secs: f64,
    /// Ranking heuristic.
    #[serde(default)]
    pub heuristic: Heuristic,
}

impl BalancingProblem {
    /// Creates an empty problem with the given cycle time.
    pub fn new(cycle_time_secs: f64) -> Self {
        Self {
            tasks: Vec::new(),
            cycle_time_secs,
            heuristic: Heuristic::default(),
        }
    }

    /// Adds a task. Order of insertion is the tie-break order.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Replaces the task list wholesale.
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    /// Sets the ranking heuristic.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Sum of all task durations (seconds).
    pub fn total_work_content(&self) -> f64 {
        self.tasks.iter().map(|t| t.duration_secs).sum()
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
