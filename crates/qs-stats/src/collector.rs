//! `StatsCollector`: pure accumulation of engine samples.
//!
//! # Streams
//!
//! | Stream          | Pushed when                               | Value                 |
//! |-----------------|-------------------------------------------|-----------------------|
//! | `queue_lengths` | a customer arrives and requests a teller  | waiting-line length   |
//! | `wait_times`    | a customer starts service                 | `start - arrival`     |
//! | `busy_counts`   | the number of busy tellers changes        | tellers in use        |
//! | `departures`    | a customer finishes service               | time in system        |
//!
//! The engine pushes in simulated-time order, so every stream is sorted by
//! time.  [`time_weighted_utilization`][StatsCollector::time_weighted_utilization]
//! relies on that.

use qs_core::SimTime;

use crate::{SampleStream, Summary};

/// Receives the engine's samples and derives aggregates from them.
#[derive(Debug, Clone)]
pub struct StatsCollector {
    capacity:      usize,
    queue_lengths: SampleStream,
    wait_times:    SampleStream,
    busy_counts:   SampleStream,
    departures:    SampleStream,
}

impl StatsCollector {
    /// Create an empty collector for a resource of `capacity` units.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue_lengths: SampleStream::new(),
            wait_times:    SampleStream::new(),
            busy_counts:   SampleStream::new(),
            departures:    SampleStream::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // ── Recording ─────────────────────────────────────────────────────────

    pub fn record_queue_length(&mut self, t: SimTime, n: usize) {
        self.queue_lengths.push(t, n as f64);
    }

    pub fn record_wait_time(&mut self, t: SimTime, w: f64) {
        self.wait_times.push(t, w);
    }

    pub fn record_busy_count(&mut self, t: SimTime, b: usize) {
        self.busy_counts.push(t, b as f64);
    }

    pub fn record_departure(&mut self, t: SimTime, time_in_system: f64) {
        self.departures.push(t, time_in_system);
    }

    // ── Read-only views ───────────────────────────────────────────────────

    pub fn queue_lengths(&self) -> &SampleStream {
        &self.queue_lengths
    }

    pub fn wait_times(&self) -> &SampleStream {
        &self.wait_times
    }

    pub fn busy_counts(&self) -> &SampleStream {
        &self.busy_counts
    }

    pub fn departures(&self) -> &SampleStream {
        &self.departures
    }

    // ── Aggregates ────────────────────────────────────────────────────────

    /// Mean wait before service; `0.0` with no samples.
    pub fn mean_wait_time(&self) -> f64 {
        self.wait_times.mean()
    }

    /// Mean waiting-line length seen by arriving customers; `0.0` with no
    /// samples.
    pub fn mean_queue_length(&self) -> f64 {
        self.queue_lengths.mean()
    }

    /// Mean time from arrival to departure over departed customers.
    pub fn mean_time_in_system(&self) -> f64 {
        self.departures.mean()
    }

    /// Sum of busy-count samples over `capacity × sample_count`.
    ///
    /// Every sample carries equal weight regardless of how long that busy
    /// count lasted.  `0.0` with no samples.
    pub fn utilization(&self) -> f64 {
        let n = self.busy_counts.len();
        if n == 0 || self.capacity == 0 {
            return 0.0;
        }
        self.busy_counts.sum() / (self.capacity as f64 * n as f64)
    }

    /// Fraction of teller-time occupied over `[0, horizon]`.
    ///
    /// Integrates the busy-count step function (zero before the first sample,
    /// then the most recent sample's value) and divides by
    /// `capacity × horizon`.  Samples past the horizon are clipped.
    pub fn time_weighted_utilization(&self, horizon: SimTime) -> f64 {
        let end = horizon.as_f64();
        if end <= 0.0 || self.capacity == 0 {
            return 0.0;
        }

        let samples = self.busy_counts.as_slice();
        let mut busy_time = 0.0;
        for (i, s) in samples.iter().enumerate() {
            let start = s.time.as_f64();
            if start >= end {
                break;
            }
            let stop = samples
                .get(i + 1)
                .map(|next| next.time.as_f64().min(end))
                .unwrap_or(end);
            busy_time += s.value * (stop - start);
        }
        busy_time / (self.capacity as f64 * end)
    }

    /// Collapse every aggregate into one [`Summary`] row.
    pub fn summary(&self, horizon: SimTime) -> Summary {
        Summary {
            arrivals:                  self.queue_lengths.len(),
            service_starts:            self.wait_times.len(),
            departures:                self.departures.len(),
            mean_wait_time:            self.mean_wait_time(),
            mean_queue_length:         self.mean_queue_length(),
            mean_time_in_system:       self.mean_time_in_system(),
            utilization:               self.utilization(),
            time_weighted_utilization: self.time_weighted_utilization(horizon),
        }
    }
}
