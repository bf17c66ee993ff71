//! Greedy line balancer.
//!
//! # Algorithm
//!
//! 1. Validate the problem; build the precedence graph.
//! 2. If the ranked-positional-weight heuristic is selected, compute the
//!    weights once over the graph.
//! 3. While tasks remain: collect every unassigned task whose
//!    predecessors are all assigned, rank the candidates, and place the
//!    first one that fits the open station. If none fits, close the
//!    station and open the next.
//!
//! The candidate set is rebuilt and re-ranked after every placement, not
//! once per station: placing a task can make a higher-weighted successor
//! eligible while the station still has capacity, and that successor must
//! win the next scan.
//!
//! # Complexity
//! O(n² log n) over n tasks; the eligibility re-scan dominates.
//!
//! # Reference
//! Helgeson & Birnie (1961); Talbot, Patterson & Gehrlein (1986)

use std::cmp::Ordering;

use super::BalanceError;
use crate::graph::PrecedenceGraph;
use crate::models::{BalancingProblem, Heuristic, LineBalance, Station};
use crate::ranking::{
    weights, LongestTaskTime, RankedPositionalWeight, RankingContext, RankingRule,
};
use crate::validation::validate_problem;

/// Greedy cycle-time-constrained station allocator.
///
/// Stateless; one instance can serve any number of independent runs.
///
/// # Example
///
/// ```
/// use line_balance::balancing::LineBalancer;
/// use line_balance::models::{BalancingProblem, Task};
///
/// let problem = BalancingProblem::new(10.0)
///     .with_task(Task::new("A").with_duration(8.0))
///     .with_task(Task::new("B").with_duration(5.0).with_predecessor("A"));
///
/// let line = LineBalancer::new().balance(&problem).unwrap();
/// assert_eq!(line.station_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LineBalancer;

impl LineBalancer {
    /// Creates a balancer.
    pub fn new() -> Self {
        Self
    }

    /// Assigns every task to a station.
    ///
    /// Validation runs first and covers value-level checks
    /// ([`validate_problem`]) and structural checks
    /// ([`PrecedenceGraph::build`]); allocation starts only on a clean
    /// problem. The output is deterministic for a fixed problem and
    /// heuristic.
    pub fn balance(&self, problem: &BalancingProblem) -> Result<LineBalance, BalanceError> {
        validate_problem(problem).map_err(BalanceError::Invalid)?;
        let graph = PrecedenceGraph::build(&problem.tasks).map_err(BalanceError::Invalid)?;

        let durations: Vec<f64> = problem.tasks.iter().map(|t| t.duration_secs).collect();
        let context = match problem.heuristic {
            Heuristic::RankedPositionalWeight => RankingContext::with_positional_weights(
                weights::positional_weights(&graph, &durations),
            ),
            Heuristic::LongestTaskTime => RankingContext::default(),
        };
        let rule: &dyn RankingRule = match problem.heuristic {
            Heuristic::LongestTaskTime => &LongestTaskTime,
            Heuristic::RankedPositionalWeight => &RankedPositionalWeight,
        };

        let n = problem.tasks.len();
        let mut assigned = vec![false; n];
        let mut assigned_count = 0;
        let mut line = LineBalance::new();
        let mut current = Station::new(1);

        while assigned_count < n {
            // Candidates collected in input order; the stable descending
            // sort below then keeps input order among equal keys.
            let mut candidates: Vec<usize> = (0..n)
                .filter(|&i| {
                    !assigned[i] && graph.predecessors(i).iter().all(|&p| assigned[p])
                })
                .collect();

            if candidates.is_empty() {
                return Err(BalanceError::NoEligibleTask {
                    assigned: assigned_count,
                    remaining: n - assigned_count,
                });
            }

            candidates.sort_by(|&a, &b| {
                let key_a = rule.key(a, &problem.tasks[a], &context);
                let key_b = rule.key(b, &problem.tasks[b], &context);
                key_b.partial_cmp(&key_a).unwrap_or(Ordering::Equal)
            });

            // First candidate that fits the open station, in rank order.
            let fit = candidates.iter().copied().find(|&i| {
                current.load_secs + problem.tasks[i].duration_secs <= problem.cycle_time_secs
            });

            match fit {
                Some(i) => {
                    current.assign(problem.tasks[i].id.clone(), problem.tasks[i].duration_secs);
                    assigned[i] = true;
                    assigned_count += 1;
                }
                None => {
                    // Close the station even if not full; the same
                    // candidate set is retried in the new one. Validation
                    // guarantees every task fits an empty station, so the
                    // next iteration always places.
                    let next = Station::new(current.number + 1);
                    line.add_station(std::mem::replace(&mut current, next));
                }
            }
        }

        line.add_station(current);
        Ok(line)
    }
}
