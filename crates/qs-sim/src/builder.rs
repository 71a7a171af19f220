//! Fluent builder for constructing a [`BankSim`].

use qs_core::{BankConfig, DurationSource, next_positive};
use qs_stats::StatsCollector;

use crate::{ArrivalGenerator, BankEvent, BankSim, Resource, SimClock, SimResult, sim::Bank};

/// Fluent builder for [`BankSim<D>`].
///
/// # Required inputs
///
/// - [`BankConfig`] - tellers, horizon, horizon policy, …
/// - `D: DurationSource` - where inter-arrival and service times come from
///   (e.g. [`qs_core::ExpDurations`])
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                               |
/// |--------------------------|---------------------------------------|
/// | `.poisson_arrivals(b)`   | `true` (the arrival generator runs)   |
/// | `.walk_in(t)`            | none (extra customers at `t`)         |
///
/// # Example
///
/// ```rust,ignore
/// let durations = ExpDurations::from_config(&config)?;
/// let mut sim = SimBuilder::new(config, durations)
///     .walk_in(0.0)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<D: DurationSource> {
    config:    BankConfig,
    durations: D,
    poisson:   bool,
    walk_ins:  Vec<f64>,
}

impl<D: DurationSource> SimBuilder<D> {
    /// Create a builder with all required inputs.
    pub fn new(config: BankConfig, durations: D) -> Self {
        Self {
            config,
            durations,
            poisson:  true,
            walk_ins: Vec::new(),
        }
    }

    /// Enable or disable the arrival generator.
    ///
    /// With the generator off, the only customers are the walk-ins.
    pub fn poisson_arrivals(mut self, enabled: bool) -> Self {
        self.poisson = enabled;
        self
    }

    /// Add one customer arriving at absolute time `at`.
    ///
    /// Walk-ins at the same instant arrive in the order they were added.
    pub fn walk_in(mut self, at: f64) -> Self {
        self.walk_ins.push(at);
        self
    }

    /// Validate the configuration, schedule the first arrivals, and return a
    /// ready-to-run [`BankSim`].
    pub fn build(mut self) -> SimResult<BankSim<D>> {
        self.config.validate()?;
        let horizon = self.config.horizon()?;
        let tellers = Resource::new(self.config.teller_count)?;

        let mut clock = SimClock::new();
        if self.poisson {
            let first = next_positive(|| self.durations.next_interarrival())?;
            clock.schedule(first, BankEvent::Arrival)?;
        }
        for &at in &self.walk_ins {
            clock.schedule(at, BankEvent::WalkIn)?;
        }

        Ok(BankSim {
            horizon,
            clock,
            bank: Bank {
                tellers,
                arrivals:   ArrivalGenerator::new(),
                durations:  self.durations,
                stats:      StatsCollector::new(self.config.teller_count),
                departures: Vec::new(),
            },
            config: self.config,
        })
    }
}
