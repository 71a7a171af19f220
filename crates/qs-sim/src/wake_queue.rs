//! `WakeQueue`: time-ordered pending events with FIFO ties.
//!
//! # Ordering
//!
//! Events are bucketed by wake time in a `BTreeMap<SimTime, VecDeque<E>>`.
//! The map orders buckets by time; within a bucket, events leave in the order
//! they were pushed.  Simultaneous events therefore fire in scheduling order,
//! which is what makes a seeded run reproducible.
//!
//! # Performance note
//!
//! Insert and pop are O(log W) where W is the number of distinct pending wake
//! times.  With real-valued exponential draws almost every event has its own
//! bucket, so W is close to the number of pending events, which for a bank
//! is a handful (one arrival plus one completion per busy teller).

use std::collections::{BTreeMap, VecDeque};

use qs_core::SimTime;

/// A priority queue mapping wake times to the events due at that time.
pub struct WakeQueue<E> {
    inner: BTreeMap<SimTime, VecDeque<E>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl<E> Default for WakeQueue<E> {
    fn default() -> Self {
        Self {
            inner: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<E> WakeQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `event` to wake at `time`, behind anything already due then.
    pub fn push(&mut self, time: SimTime, event: E) {
        self.inner.entry(time).or_default().push_back(event);
        self.total += 1;
    }

    /// Remove and return the earliest event, oldest first among equal times.
    pub fn pop_next(&mut self) -> Option<(SimTime, E)> {
        let mut bucket = self.inner.first_entry()?;
        let time = *bucket.key();
        let event = bucket.get_mut().pop_front();
        if bucket.get().is_empty() {
            bucket.remove();
        }
        let event = event?;
        self.total -= 1;
        Some((time, event))
    }

    /// Drop every queued event for which `keep` returns `false`.  Survivors
    /// keep their relative order.
    pub fn retain(&mut self, mut keep: impl FnMut(&E) -> bool) {
        self.inner.retain(|_, bucket| {
            bucket.retain(|e| keep(e));
            !bucket.is_empty()
        });
        self.total = self.inner.values().map(VecDeque::len).sum();
    }

    /// The earliest wake time with at least one queued event.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Total number of queued events across all wake times.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct wake times that have at least one queued event.
    pub fn time_count(&self) -> usize {
        self.inner.len()
    }
}
