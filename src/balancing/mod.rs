//! Greedy station allocation and line KPIs.
//!
//! `LineBalancer` packs ranked eligible tasks into workstations under the
//! cycle-time capacity; `LineKpi` derives the standard balance metrics
//! from the finished assignment.
//!
//! # Algorithm
//!
//! The allocator is greedy and deterministic: it never reconsiders a
//! placement and uses no randomness, so a fixed problem and heuristic
//! always reproduce the same line. It does not guarantee the minimum
//! number of stations.
//!
//! # References
//!
//! - Helgeson & Birnie (1961), "Assembly Line Balancing Using the Ranked
//!   Positional Weight Technique"
//! - Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 4

mod allocator;
mod kpi;

pub use allocator::LineBalancer;
pub use kpi::LineKpi;

use crate::validation::ValidationError;

/// Errors surfaced by a balancing run.
#[derive(Debug, Clone, PartialEq)]
pub enum BalanceError {
    /// The problem failed input validation; no allocation was attempted.
    Invalid(Vec<ValidationError>),
    /// No task was eligible while unassigned tasks remained. Indicates
    /// malformed precedence data that slipped past validation; never
    /// retried.
    NoEligibleTask {
        /// Tasks already placed when the allocator stalled.
        assigned: usize,
        /// Tasks still waiting for a station.
        remaining: usize,
    },
}

impl std::fmt::Display for BalanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(errors) => {
                write!(f, "invalid balancing problem: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", e.message)?;
                }
                Ok(())
            }
            Self::NoEligibleTask {
                assigned,
                remaining,
            } => write!(
                f,
                "no eligible task found with {remaining} task(s) unassigned \
                 ({assigned} placed) - check precedence data"
            ),
        }
    }
}

impl std::error::Error for BalanceError {}
