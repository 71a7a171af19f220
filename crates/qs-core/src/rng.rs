//! Deterministic random durations.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded from `BankConfig::random_seed`.
//! Inter-arrival and service draws are interleaved on that single stream in
//! the order the engine asks for them.  Because the engine is single-threaded
//! and fires simultaneous events in FIFO order, the order of draws (and hence
//! every sampled value) is a pure function of the seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};

use crate::{BankConfig, CoreError, CoreResult};

/// Draws a source may reject in a row before it is considered broken.
pub const MAX_RESAMPLES: u32 = 64;

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// Used only from the single-threaded event loop.  Parallel replications each
/// build their own `SimRng` from their own seed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw one value from `dist`.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        self.0.sample(dist)
    }
}

// ── DurationSource ────────────────────────────────────────────────────────────

/// A source of inter-arrival and service durations.
///
/// Implementations should return strictly positive values; the engine still
/// routes every draw through [`next_positive`], so a source that occasionally
/// yields zero or a negative number is resampled rather than trusted.
pub trait DurationSource {
    /// Time until the next customer arrives.
    fn next_interarrival(&mut self) -> f64;

    /// How long the next customer occupies a teller.
    fn next_service_time(&mut self) -> f64;
}

/// Call `draw` until it yields a finite, strictly positive value.
///
/// Gives up with [`CoreError::DegenerateDuration`] after [`MAX_RESAMPLES`]
/// rejected draws.
pub fn next_positive(mut draw: impl FnMut() -> f64) -> CoreResult<f64> {
    let mut last = f64::NAN;
    for _ in 0..MAX_RESAMPLES {
        last = draw();
        if last.is_finite() && last > 0.0 {
            return Ok(last);
        }
    }
    Err(CoreError::DegenerateDuration { draws: MAX_RESAMPLES, last })
}

// ── ExpDurations ──────────────────────────────────────────────────────────────

/// Exponentially distributed durations from a seeded [`SimRng`].
pub struct ExpDurations {
    rng:          SimRng,
    interarrival: Exp<f64>,
    service:      Exp<f64>,
}

impl ExpDurations {
    /// Build a source with the given means (rate = 1 / mean).
    pub fn new(seed: u64, mean_interarrival: f64, mean_service: f64) -> CoreResult<Self> {
        Ok(Self {
            rng:          SimRng::new(seed),
            interarrival: exp_with_mean("mean_interarrival_time", mean_interarrival)?,
            service:      exp_with_mean("mean_service_time", mean_service)?,
        })
    }

    pub fn from_config(config: &BankConfig) -> CoreResult<Self> {
        Self::new(
            config.random_seed,
            config.mean_interarrival_time,
            config.mean_service_time,
        )
    }
}

impl DurationSource for ExpDurations {
    #[inline]
    fn next_interarrival(&mut self) -> f64 {
        self.rng.sample(&self.interarrival)
    }

    #[inline]
    fn next_service_time(&mut self) -> f64 {
        self.rng.sample(&self.service)
    }
}

fn exp_with_mean(name: &str, mean: f64) -> CoreResult<Exp<f64>> {
    if !(mean.is_finite() && mean > 0.0) {
        return Err(CoreError::Config(format!("{name} must be a positive finite number, got {mean}")));
    }
    Exp::new(1.0 / mean).map_err(|e| CoreError::Config(format!("{name}: {e}")))
}
