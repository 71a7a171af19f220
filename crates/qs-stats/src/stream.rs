//! Append-only `(time, value)` sample streams.

use qs_core::SimTime;

/// One observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time:  SimTime,
    pub value: f64,
}

/// An ordered, append-only sequence of samples.
///
/// Only the owning [`StatsCollector`][crate::StatsCollector] can push; every
/// other caller sees a read-only view.
#[derive(Debug, Clone, Default)]
pub struct SampleStream {
    samples: Vec<Sample>,
}

impl SampleStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, time: SimTime, value: f64) {
        self.samples.push(Sample { time, value });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Sample values in append order, without their timestamps.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }

    pub fn sum(&self) -> f64 {
        self.values().sum()
    }

    /// Arithmetic mean of the values; `0.0` for an empty stream.
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum() / self.samples.len() as f64
        }
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }
}

impl<'a> IntoIterator for &'a SampleStream {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
