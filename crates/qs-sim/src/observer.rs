//! Simulation observer trait for event logging and tracing.

use qs_core::{CustomerId, SimTime};
use tracing::info;

/// Callbacks invoked by [`BankSim::run`][crate::BankSim::run] as customers
/// move through the bank.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers are purely observational: they
/// get no handle on the simulation and cannot feed anything back into it.
///
/// # Example: departure counter
///
/// ```rust,ignore
/// struct Departures(usize);
///
/// impl SimObserver for Departures {
///     fn on_departure(&mut self, _now: SimTime, _customer: CustomerId) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// A customer arrived and asked for a teller.  `queue_len` is the waiting
    /// line length right after the request (including the customer if they
    /// had to queue).
    fn on_arrival(&mut self, _now: SimTime, _customer: CustomerId, _queue_len: usize) {}

    /// A customer was granted a teller after waiting `wait` time units.
    fn on_service_start(&mut self, _now: SimTime, _customer: CustomerId, _wait: f64) {}

    /// A customer finished service and left.
    fn on_departure(&mut self, _now: SimTime, _customer: CustomerId) {}

    /// Called once after the run stops.
    fn on_sim_end(&mut self, _final_time: SimTime) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that emits one `tracing` event per customer transition,
/// tagged with the simulated time.
pub struct TracingObserver;

impl SimObserver for TracingObserver {
    fn on_arrival(&mut self, now: SimTime, customer: CustomerId, queue_len: usize) {
        info!(time = %now, customer = customer.0, queue_len, "{customer} arrives at the bank at {now}.");
    }

    fn on_service_start(&mut self, now: SimTime, customer: CustomerId, wait: f64) {
        info!(time = %now, customer = customer.0, wait, "{customer} starts service at {now} (Waited {wait:.2}).");
    }

    fn on_departure(&mut self, now: SimTime, customer: CustomerId) {
        info!(time = %now, customer = customer.0, "{customer} finishes service at {now}.");
    }

    fn on_sim_end(&mut self, final_time: SimTime) {
        info!(time = %final_time, "simulation stopped");
    }
}
