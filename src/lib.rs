//! Assembly line balancing engine.
//!
//! Assigns a set of interdependent production tasks to an ordered sequence
//! of workstations so that precedence constraints hold, no station exceeds
//! the cycle time, and station count and idle time stay low under a greedy
//! priority heuristic. Rendering, graph layout, and interactive data entry
//! are left to callers — this crate is the allocation engine only.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `BalancingProblem`, `Heuristic`,
//!   `Station`, `LineBalance`
//! - **`graph`**: Precedence DAG with Kahn topological ordering and
//!   structural validation (duplicate IDs, unknown predecessors, cycles)
//! - **`ranking`**: Priority rules (longest task time, ranked positional
//!   weight) and positional-weight computation
//! - **`balancing`**: The greedy station allocator and line KPIs
//! - **`validation`**: Value-level input checks (durations, cycle time)
//!
//! # Algorithm
//!
//! At each step the allocator collects every unassigned task whose
//! predecessors are all assigned, ranks the candidates by the active rule,
//! and places the first one that fits the open station's remaining
//! capacity. When nothing fits, the station closes and a new one opens.
//! The candidate set is rebuilt after every placement, since placing a
//! task may make a higher-ranked successor eligible for the same station.
//!
//! # References
//!
//! - Helgeson & Birnie (1961), "Assembly Line Balancing Using the Ranked
//!   Positional Weight Technique"
//! - Scholl (1999), "Balancing and Sequencing of Assembly Lines"
//! - Boysen, Fliedner & Scholl (2007), "A Classification of Assembly Line
//!   Balancing Problems"

pub mod balancing;
pub mod graph;
pub mod models;
pub mod ranking;
pub mod validation;
