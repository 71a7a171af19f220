//! Simulation time model.
//!
//! # Design
//!
//! Time is a non-negative, finite real number of abstract time units.  The
//! inner value is an `OrderedFloat<f64>` so `SimTime` is `Ord` and can key a
//! `BTreeMap` directly; the constructor rejects NaN, infinities, and negative
//! values, so the total order never has to consider them.
//!
//! Unlike an integer tick, a real-valued clock drifts under repeated
//! addition.  The engine only ever computes `wake = now + delay` once per
//! event, so the drift never accumulates across events.

use std::fmt;

use ordered_float::OrderedFloat;

use crate::{CoreError, CoreResult};

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute point in simulated time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(OrderedFloat<f64>);

impl SimTime {
    pub const ZERO: SimTime = SimTime(OrderedFloat(0.0));

    /// Build a time from a raw value.
    ///
    /// Fails with [`CoreError::InvalidTime`] for NaN, infinite, or negative
    /// input.
    pub fn new(value: f64) -> CoreResult<SimTime> {
        if value.is_finite() && value >= 0.0 {
            // Normalise -0.0 so it compares equal to ZERO.
            Ok(SimTime(OrderedFloat(value + 0.0)))
        } else {
            Err(CoreError::InvalidTime(value))
        }
    }

    /// The raw value in time units.
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0.0
    }

    /// The time `delay` units after `self`.
    ///
    /// Fails if `delay` is negative or non-finite, or if the sum overflows to
    /// infinity.
    pub fn offset(self, delay: f64) -> CoreResult<SimTime> {
        if !(delay.is_finite() && delay >= 0.0) {
            return Err(CoreError::InvalidTime(delay));
        }
        SimTime::new(self.as_f64() + delay)
    }

    /// Time units elapsed from `earlier` to `self`, clamped at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        (self.as_f64() - earlier.as_f64()).max(0.0)
    }
}

impl Default for SimTime {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for SimTime {
    type Error = CoreError;

    fn try_from(value: f64) -> CoreResult<SimTime> {
        SimTime::new(value)
    }
}

impl From<SimTime> for f64 {
    #[inline]
    fn from(t: SimTime) -> f64 {
        t.as_f64()
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_f64())
    }
}
