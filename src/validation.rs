//! Input validation for balancing problems.
//!
//! Value-level integrity checks run before any allocation work:
//! - Empty task list
//! - Non-positive cycle time
//! - Non-positive task durations
//! - Tasks longer than the cycle time (can never be placed)
//!
//! Structural checks — duplicate IDs, unknown predecessor references,
//! precedence cycles — live in [`crate::graph`], where the adjacency
//! structure is built; both layers report through the same error type.

use crate::models::BalancingProblem;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task references a predecessor that doesn't exist.
    UnknownPredecessor,
    /// The precedence relation contains a cycle.
    CyclicPrecedence,
    /// A task duration is zero or negative.
    NonPositiveDuration,
    /// The cycle time is zero or negative.
    NonPositiveCycleTime,
    /// A task's duration alone exceeds the cycle time.
    TaskExceedsCycleTime,
    /// The problem contains no tasks.
    EmptyProblem,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validates the value-level constraints of a balancing problem.
///
/// Checks:
/// 1. At least one task
/// 2. Positive cycle time
/// 3. Positive duration for every task
/// 4. No task longer than the cycle time
///
/// Structural constraints are checked by [`crate::graph::PrecedenceGraph::build`].
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &BalancingProblem) -> ValidationResult {
    let mut errors = Vec::new();

    if problem.tasks.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProblem,
            "Problem contains no tasks",
        ));
    }

    if !(problem.cycle_time_secs > 0.0 && problem.cycle_time_secs.is_finite()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveCycleTime,
            format!("Cycle time must be positive, got {}", problem.cycle_time_secs),
        ));
    }

    for task in &problem.tasks {
        if !(task.duration_secs > 0.0 && task.duration_secs.is_finite()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!(
                    "Task '{}' must have a positive duration, got {}",
                    task.id, task.duration_secs
                ),
            ));
        } else if problem.cycle_time_secs > 0.0 && task.duration_secs > problem.cycle_time_secs {
            errors.push(ValidationError::new(
                ValidationErrorKind::TaskExceedsCycleTime,
                format!(
                    "Task '{}' ({} s) exceeds the cycle time ({} s) and can never be placed",
                    task.id, task.duration_secs, problem.cycle_time_secs
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn sample_problem() -> BalancingProblem {
        BalancingProblem::new(10.0)
            .with_task(Task::new("A").with_duration(8.0))
            .with_task(Task::new("B").with_duration(5.0).with_predecessor("A"))
    }

    #[test]
    fn test_valid_problem() {
        assert!(validate_problem(&sample_problem()).is_ok());
    }

    #[test]
    fn test_empty_problem() {
        let errors = validate_problem(&BalancingProblem::new(10.0)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyProblem));
    }

    #[test]
    fn test_non_positive_cycle_time() {
        let mut problem = sample_problem();
        problem.cycle_time_secs = 0.0;
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveCycleTime));
    }

    #[test]
    fn test_non_positive_duration() {
        let problem = BalancingProblem::new(10.0).with_task(Task::new("A").with_duration(0.0));
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveDuration));
    }

    #[test]
    fn test_task_exceeds_cycle_time() {
        let problem = BalancingProblem::new(10.0).with_task(Task::new("big").with_duration(12.0));
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TaskExceedsCycleTime
                && e.message.contains("big")));
    }

    #[test]
    fn test_multiple_errors() {
        let problem = BalancingProblem::new(-1.0).with_task(Task::new("A").with_duration(-2.0));
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
