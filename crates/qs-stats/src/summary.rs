//! Plain aggregate row for one simulation run.

use std::fmt;

/// Aggregates of one run, as produced by
/// [`StatsCollector::summary`][crate::StatsCollector::summary].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub arrivals:                  usize,
    pub service_starts:            usize,
    pub departures:                usize,
    pub mean_wait_time:            f64,
    pub mean_queue_length:         f64,
    pub mean_time_in_system:       f64,
    pub utilization:               f64,
    pub time_weighted_utilization: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average wait time: {:.2} time units.", self.mean_wait_time)?;
        writeln!(f, "Average queue length: {:.2}.", self.mean_queue_length)?;
        write!(f, "Server utilization: {:.2}.", self.utilization)
    }
}
