//! Top-level simulation configuration.

use std::fmt;

use crate::{CoreError, CoreResult, SimTime};

// ── HorizonPolicy ─────────────────────────────────────────────────────────────

/// What happens to customers still in the bank when the horizon is reached.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HorizonPolicy {
    /// Stop admitting arrivals at the horizon but let every queued or
    /// in-service customer finish naturally.
    #[default]
    Drain,
    /// Stop the clock at the horizon.  Customers still queued or in service
    /// are left dangling and never produce a departure record.
    Truncate,
}

impl fmt::Display for HorizonPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HorizonPolicy::Drain    => "drain",
            HorizonPolicy::Truncate => "truncate",
        })
    }
}

// ── BankConfig ────────────────────────────────────────────────────────────────

/// Configuration of one bank simulation run.
///
/// `Default` reproduces the reference scenario: seed 42, a customer every 5
/// time units on average, 3 units of service on average, two tellers, and a
/// 60-unit horizon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BankConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub random_seed: u64,

    /// Mean of the exponential inter-arrival distribution.
    pub mean_interarrival_time: f64,

    /// Mean of the exponential service-time distribution.
    pub mean_service_time: f64,

    /// Time after which no new customer arrives.
    pub simulation_horizon: f64,

    /// Number of tellers (resource capacity).  Fixed for the whole run.
    pub teller_count: usize,

    /// Whether in-flight customers finish after the horizon.
    pub horizon_policy: HorizonPolicy,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            random_seed:            42,
            mean_interarrival_time: 5.0,
            mean_service_time:      3.0,
            simulation_horizon:     60.0,
            teller_count:           2,
            horizon_policy:         HorizonPolicy::Drain,
        }
    }
}

impl BankConfig {
    /// Check every numeric option, failing on the first bad one.
    pub fn validate(&self) -> CoreResult<()> {
        positive("mean_interarrival_time", self.mean_interarrival_time)?;
        positive("mean_service_time", self.mean_service_time)?;
        positive("simulation_horizon", self.simulation_horizon)?;
        if self.teller_count == 0 {
            return Err(CoreError::Config("teller_count must be at least 1".into()));
        }
        Ok(())
    }

    /// The horizon as a [`SimTime`].
    pub fn horizon(&self) -> CoreResult<SimTime> {
        positive("simulation_horizon", self.simulation_horizon)?;
        SimTime::new(self.simulation_horizon)
    }

    /// A copy of this configuration with a different seed.
    pub fn with_seed(&self, seed: u64) -> BankConfig {
        BankConfig { random_seed: seed, ..self.clone() }
    }
}

fn positive(name: &str, value: f64) -> CoreResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{name} must be a positive finite number, got {value}")))
    }
}
