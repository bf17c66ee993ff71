//! Line balance (solution) model.
//!
//! A line balance is a complete assignment of tasks to an ordered sequence
//! of workstations. Station numbers are 1-based and contiguous; the task
//! list inside a station preserves placement order, which also encodes
//! intra-station precedence.
//!
//! # Reference
//! Scholl (1999), "Balancing and Sequencing of Assembly Lines", Ch. 2

use serde::{Deserialize, Serialize};

/// A workstation with its assigned tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station number (1-based, contiguous along the line).
    pub number: usize,
    /// Task IDs in the order they were placed.
    pub task_ids: Vec<String>,
    /// Cumulative assigned time (seconds). Never exceeds the cycle time.
    pub load_secs: f64,
}

impl Station {
    /// Creates an empty station.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            task_ids: Vec::new(),
            load_secs: 0.0,
        }
    }

    /// Records a task placement.
    pub fn assign(&mut self, task_id: impl Into<String>, duration_secs: f64) {
        self.task_ids.push(task_id.into());
        self.load_secs += duration_secs;
    }

    /// Number of tasks at this station.
    pub fn task_count(&self) -> usize {
        self.task_ids.len()
    }

    /// Unused capacity against the given cycle time (seconds).
    pub fn idle_secs(&self, cycle_time_secs: f64) -> f64 {
        cycle_time_secs - self.load_secs
    }
}

/// A complete task-to-station assignment.
///
/// Every input task appears in exactly one station; stations are ordered
/// by the order they were opened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineBalance {
    /// Stations in opening order.
    pub stations: Vec<Station>,
}

impl LineBalance {
    /// Creates an empty line balance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a station.
    pub fn add_station(&mut self, station: Station) {
        self.stations.push(station);
    }

    /// Number of stations opened.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Total assigned work across all stations (seconds).
    pub fn total_load_secs(&self) -> f64 {
        self.stations.iter().map(|s| s.load_secs).sum()
    }

    /// Total number of assigned tasks.
    pub fn task_count(&self) -> usize {
        self.stations.iter().map(|s| s.task_count()).sum()
    }

    /// Finds the station number hosting the given task.
    pub fn station_for_task(&self, task_id: &str) -> Option<usize> {
        self.stations
            .iter()
            .find(|s| s.task_ids.iter().any(|id| id == task_id))
            .map(|s| s.number)
    }

    /// Position of a task within its station's placement order.
    pub fn position_in_station(&self, task_id: &str) -> Option<(usize, usize)> {
        for station in &self.stations {
            if let Some(pos) = station.task_ids.iter().position(|id| id == task_id) {
                return Some((station.number, pos));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_assign() {
        let mut station = Station::new(1);
        station.assign("A", 8.0);
        station.assign("B", 1.5);

        assert_eq!(station.task_count(), 2);
        assert_eq!(station.task_ids, vec!["A", "B"]);
        assert!((station.load_secs - 9.5).abs() < 1e-12);
        assert!((station.idle_secs(10.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_line_queries() {
        let mut line = LineBalance::new();
        let mut s1 = Station::new(1);
        s1.assign("A", 8.0);
        let mut s2 = Station::new(2);
        s2.assign("B", 5.0);
        s2.assign("C", 3.0);
        line.add_station(s1);
        line.add_station(s2);

        assert_eq!(line.station_count(), 2);
        assert_eq!(line.task_count(), 3);
        assert_eq!(line.station_for_task("C"), Some(2));
        assert_eq!(line.station_for_task("missing"), None);
        assert_eq!(line.position_in_station("C"), Some((2, 1)));
        assert!((line.total_load_secs() - 16.0).abs() < 1e-12);
    }
}
