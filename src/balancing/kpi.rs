//! Line performance metrics.
//!
//! Derived once from the finished assignment; purely arithmetic, no
//! failure modes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total work content | Σ task duration |
//! | Min stations | ⌈total work / cycle time⌉ (theoretical floor) |
//! | Actual stations | Stations opened by the allocator |
//! | Idle time | Σ over stations (cycle time − station load) |
//! | Efficiency | total work / (actual × cycle time) × 100 |
//! | Balance delay | 100 − efficiency |
//!
//! # Reference
//! Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 2.2

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{BalancingProblem, LineBalance};

/// Tolerance absorbed by the minimum-station division, so a total work
/// content within 0.01 s of an exact station multiple does not round up
/// to a phantom station.
const ROUNDING_TOLERANCE_SECS: f64 = 0.01;

/// Aggregate performance figures for a balanced line.
///
/// All times are in seconds; efficiency and balance delay are percentages.
#[derive(Debug, Clone, Serialize)]
pub struct LineKpi {
    /// Sum of all task durations.
    pub total_work_content: f64,
    /// Cycle time the line was balanced against.
    pub cycle_time: f64,
    /// Theoretical minimum number of stations.
    pub min_stations: usize,
    /// Stations actually opened.
    pub actual_stations: usize,
    /// Total unused capacity across all stations.
    pub idle_time: f64,
    /// Percentage of station capacity doing useful work.
    pub efficiency: f64,
    /// Percentage of station capacity left idle (100 − efficiency).
    pub balance_delay: f64,
    /// Cumulative load per station, keyed by station number. Ordered map
    /// so serialized output is reproducible.
    pub station_times: BTreeMap<usize, f64>,
}

impl LineKpi {
    /// Computes KPIs from a problem and its finished line balance.
    pub fn calculate(problem: &BalancingProblem, line: &LineBalance) -> Self {
        let total_work_content = problem.total_work_content();
        let cycle_time = problem.cycle_time_secs;
        let actual_stations = line.station_count();

        let station_times: BTreeMap<usize, f64> = line
            .stations
            .iter()
            .map(|s| (s.number, s.load_secs))
            .collect();

        let idle_time: f64 = line
            .stations
            .iter()
            .map(|s| s.idle_secs(cycle_time))
            .sum();

        let efficiency =
            total_work_content / (actual_stations as f64 * cycle_time) * 100.0;

        Self {
            total_work_content,
            cycle_time,
            min_stations: Self::theoretical_min_stations(total_work_content, cycle_time),
            actual_stations,
            idle_time,
            efficiency,
            balance_delay: 100.0 - efficiency,
            station_times,
        }
    }

    /// Theoretical minimum number of stations: ⌈total work / cycle time⌉.
    ///
    /// Computed as an epsilon-adjusted integer division instead of a
    /// naive floating ceiling, so accumulated rounding in the total work
    /// sum cannot inflate the bound. Always at least 1.
    pub fn theoretical_min_stations(total_work_secs: f64, cycle_time_secs: f64) -> usize {
        let stations =
            ((total_work_secs + cycle_time_secs - ROUNDING_TOLERANCE_SECS) / cycle_time_secs)
                .floor() as usize;
        stations.max(1)
    }

    /// Whether the line meets the given efficiency target (percent).
    pub fn meets_efficiency(&self, min_efficiency: f64) -> bool {
        self.efficiency >= min_efficiency
    }
}
