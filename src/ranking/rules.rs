//! Built-in ranking rules.
//!
//! # Key Convention
//! All rules return higher keys for tasks that should be placed first.
//!
//! # References
//! - Helgeson & Birnie (1961), ranked positional weight
//! - Moodie & Young (1965), largest-candidate (longest task time) rule

use super::{RankingContext, RankingKey, RankingRule};
use crate::models::Task;

/// Longest Task Time.
///
/// Ranks eligible tasks by their own duration, longest first. Packs the
/// big work elements early, leaving short tasks to fill residual station
/// capacity.
#[derive(Debug, Clone, Copy)]
pub struct LongestTaskTime;

impl RankingRule for LongestTaskTime {
    fn name(&self) -> &'static str {
        "LTT"
    }

    fn key(&self, _index: usize, task: &Task, _context: &RankingContext) -> RankingKey {
        task.duration_secs
    }

    fn description(&self) -> &'static str {
        "Longest Task Time"
    }
}

/// Ranked Positional Weight.
///
/// Ranks eligible tasks by positional weight — own duration plus the
/// weights of direct successors — so tasks that unlock long downstream
/// chains are placed first. Weights are read from the context and must be
/// precomputed with [`super::weights::positional_weights`].
///
/// # Reference
/// Helgeson & Birnie (1961)
#[derive(Debug, Clone, Copy)]
pub struct RankedPositionalWeight;

impl RankingRule for RankedPositionalWeight {
    fn name(&self) -> &'static str {
        "RPW"
    }

    fn key(&self, index: usize, _task: &Task, context: &RankingContext) -> RankingKey {
        context.positional_weights[index]
    }

    fn description(&self) -> &'static str {
        "Ranked Positional Weight"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ltt_key_is_duration() {
        let ctx = RankingContext::default();
        let short = Task::new("short").with_duration(1.0);
        let long = Task::new("long").with_duration(5.0);
        assert!(LongestTaskTime.key(1, &long, &ctx) > LongestTaskTime.key(0, &short, &ctx));
    }

    #[test]
    fn test_rpw_reads_context() {
        let ctx = RankingContext::with_positional_weights(vec![6.0, 5.0, 3.0]);
        let task = Task::new("a").with_duration(1.0);
        assert_eq!(RankedPositionalWeight.key(0, &task, &ctx), 6.0);
        assert_eq!(RankedPositionalWeight.key(2, &task, &ctx), 3.0);
    }

    #[test]
    fn test_names() {
        assert_eq!(LongestTaskTime.name(), "LTT");
        assert_eq!(RankedPositionalWeight.description(), "Ranked Positional Weight");
    }
}
