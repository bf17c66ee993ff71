//! Positional weight computation.
//!
//! A task's positional weight is its own duration plus the weights of its
//! direct successors, accumulated in reverse topological order so every
//! successor's weight is final before it is added. Descendants shared by
//! several direct successors are counted once per path; this is the
//! classic formulation and intentionally not a transitive-closure sum.
//!
//! # Reference
//! Helgeson & Birnie (1961), "Assembly Line Balancing Using the Ranked
//! Positional Weight Technique"

use crate::graph::PrecedenceGraph;

/// Computes positional weights for every task.
///
/// `durations` is parallel to the graph's task indices. The returned
/// vector uses the same indexing. Requires an acyclic graph, which
/// [`PrecedenceGraph::build`] guarantees.
pub fn positional_weights(graph: &PrecedenceGraph, durations: &[f64]) -> Vec<f64> {
    debug_assert_eq!(graph.len(), durations.len());
    let mut weights = durations.to_vec();

    // Reverse topological order visits leaves first, so successor weights
    // are final when accumulated.
    for &node in graph.topological_order().iter().rev() {
        for &succ in graph.successors(node) {
            weights[node] += weights[succ];
        }
    }

    weights
}
