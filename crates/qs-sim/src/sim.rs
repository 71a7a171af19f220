//! The `BankSim` struct and its event handlers.

use qs_core::{BankConfig, DurationSource, ExpDurations, HorizonPolicy, SimTime, next_positive};
use qs_stats::{StatsCollector, Summary};
use tracing::{debug, trace};

use crate::{
    ArrivalGenerator, CustomerProcess, CustomerRecord, Permit, Requested, Resource, SimBuilder,
    SimClock, SimError, SimObserver, SimResult,
};

// ── Events ────────────────────────────────────────────────────────────────────

/// A continuation waiting on the clock.
///
/// `ServiceComplete` carries the customer and the teller permit it holds, so
/// while a customer is being served the pending event is its sole owner.
#[derive(Debug)]
pub enum BankEvent {
    /// The arrival generator wakes: spawn a customer, schedule the next wake.
    Arrival,
    /// A single scheduled arrival that does not reschedule itself.
    WalkIn,
    /// A customer's service time has elapsed.
    ServiceComplete { customer: CustomerProcess, permit: Permit },
}

// ── Bank (everything except the clock) ────────────────────────────────────────

/// Simulation state the events act on.  Kept apart from the clock so an
/// event handler can borrow both mutably at once.
pub(crate) struct Bank<D: DurationSource> {
    pub(crate) tellers:    Resource<CustomerProcess>,
    pub(crate) arrivals:   ArrivalGenerator,
    pub(crate) durations:  D,
    pub(crate) stats:      StatsCollector,
    pub(crate) departures: Vec<CustomerRecord>,
}

impl<D: DurationSource> Bank<D> {
    fn fire<O: SimObserver>(
        &mut self,
        clock:    &mut SimClock<BankEvent>,
        event:    BankEvent,
        observer: &mut O,
    ) -> SimResult<()> {
        match event {
            BankEvent::Arrival => {
                if !self.arrivals.is_open() {
                    trace!(now = %clock.now(), "arrival past horizon dropped");
                    return Ok(());
                }
                let customer = self.arrivals.spawn(clock.now());
                let delay = next_positive(|| self.durations.next_interarrival())?;
                clock.schedule(delay, BankEvent::Arrival)?;
                self.admit(clock, customer, observer)
            }

            BankEvent::WalkIn => {
                if !self.arrivals.is_open() {
                    trace!(now = %clock.now(), "walk-in past horizon dropped");
                    return Ok(());
                }
                let customer = self.arrivals.spawn(clock.now());
                self.admit(clock, customer, observer)
            }

            BankEvent::ServiceComplete { customer, permit } => {
                self.complete(clock, customer, permit, observer)
            }
        }
    }

    /// A fresh customer asks for a teller.
    fn admit<O: SimObserver>(
        &mut self,
        clock:        &mut SimClock<BankEvent>,
        mut customer: CustomerProcess,
        observer:     &mut O,
    ) -> SimResult<()> {
        let now = clock.now();
        let id = customer.id();
        customer.request()?;

        let outcome = self.tellers.request(customer);
        self.stats.record_queue_length(now, outcome.queue_len());
        observer.on_arrival(now, id, outcome.queue_len());

        match outcome {
            Requested::Granted { requester, permit, .. } => {
                self.stats.record_busy_count(now, self.tellers.in_use());
                self.start_service(clock, requester, permit, observer)
            }
            Requested::Queued { .. } => {
                self.stats.record_busy_count(now, self.tellers.in_use());
                Ok(())
            }
        }
    }

    /// Sample a service time and put the customer on the clock until it ends.
    fn start_service<O: SimObserver>(
        &mut self,
        clock:        &mut SimClock<BankEvent>,
        mut customer: CustomerProcess,
        permit:       Permit,
        observer:     &mut O,
    ) -> SimResult<()> {
        let now = clock.now();
        let duration = next_positive(|| self.durations.next_service_time())?;
        let wait = customer.begin_service(now, duration)?;
        self.stats.record_wait_time(now, wait);
        observer.on_service_start(now, customer.id(), wait);
        clock.schedule(duration, BankEvent::ServiceComplete { customer, permit })?;
        Ok(())
    }

    /// Release the teller; the head of the line (if any) takes it over at the
    /// same instant.
    fn complete<O: SimObserver>(
        &mut self,
        clock:    &mut SimClock<BankEvent>,
        customer: CustomerProcess,
        permit:   Permit,
        observer: &mut O,
    ) -> SimResult<()> {
        let now = clock.now();
        let handoff = self.tellers.release(permit)?;
        self.stats.record_busy_count(now, self.tellers.in_use());

        let record = customer.depart(now)?;
        self.stats.record_departure(now, record.time_in_system());
        observer.on_departure(now, record.id);
        self.departures.push(record);

        match handoff {
            Some((next, permit)) => self.start_service(clock, next, permit, observer),
            None => Ok(()),
        }
    }
}

// ── BankSim ───────────────────────────────────────────────────────────────────

/// The bank simulation runner.
///
/// Holds the clock, the teller pool, the arrival generator, the duration
/// source, and the statistics collector.  Create via [`SimBuilder`] or
/// [`BankSim::from_config`].
pub struct BankSim<D: DurationSource = ExpDurations> {
    /// Configuration the run was built from.
    pub config: BankConfig,

    pub(crate) horizon: SimTime,
    pub(crate) clock:   SimClock<BankEvent>,
    pub(crate) bank:    Bank<D>,
}

impl BankSim<ExpDurations> {
    /// Validate `config` and build a simulation with exponential durations
    /// seeded from `config.random_seed`.
    pub fn from_config(config: BankConfig) -> SimResult<Self> {
        config.validate()?;
        let durations = ExpDurations::from_config(&config)?;
        SimBuilder::new(config, durations).build()
    }
}

impl<D: DurationSource> BankSim<D> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation to the horizon, then apply the horizon policy.
    ///
    /// With [`HorizonPolicy::Drain`] arrivals stop at the horizon and every
    /// customer already in the bank is served to completion.  With
    /// [`HorizonPolicy::Truncate`] the clock stops at the horizon.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        debug!(
            horizon = %self.horizon,
            tellers = self.bank.tellers.capacity(),
            policy = %self.config.horizon_policy,
            "simulation started"
        );

        let bank = &mut self.bank;
        self.clock
            .run_until(self.horizon, |clock, event| bank.fire(clock, event, observer))?;
        bank.arrivals.close(self.horizon);

        if self.config.horizon_policy == HorizonPolicy::Drain {
            // Only completions may fire after the horizon.
            self.clock.retain(|event| matches!(event, BankEvent::ServiceComplete { .. }));
            self.clock.run(|clock, event| bank.fire(clock, event, observer))?;
        }

        debug!(
            final_time = %self.clock.now(),
            fired = self.clock.fired(),
            departures = bank.departures.len(),
            dangling = bank.tellers.in_use() + bank.tellers.queue_len(),
            "simulation finished"
        );
        observer.on_sim_end(self.clock.now());
        Ok(())
    }

    /// Schedule one extra customer to arrive `delay` time units from now,
    /// independent of the arrival generator's own schedule.
    ///
    /// Fails with [`SimError::ArrivalsClosed`] once [`run`](Self::run) has
    /// reached the horizon.
    pub fn schedule_walk_in(&mut self, delay: f64) -> SimResult<SimTime> {
        if let Some(closed_at) = self.bank.arrivals.closed_at() {
            return Err(SimError::ArrivalsClosed { closed_at });
        }
        self.clock.schedule(delay, BankEvent::WalkIn)
    }

    /// Current simulated time.
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    pub fn horizon(&self) -> SimTime {
        self.horizon
    }

    /// Events fired so far.
    pub fn events_fired(&self) -> u64 {
        self.clock.fired()
    }

    /// Events still queued (non-zero after a truncated run).
    pub fn pending_events(&self) -> usize {
        self.clock.pending()
    }

    pub fn stats(&self) -> &StatsCollector {
        &self.bank.stats
    }

    pub fn tellers(&self) -> &Resource<CustomerProcess> {
        &self.bank.tellers
    }

    /// Departed customers, in departure order.
    pub fn departures(&self) -> &[CustomerRecord] {
        &self.bank.departures
    }

    /// Customers spawned so far.
    pub fn customers_spawned(&self) -> u64 {
        self.bank.arrivals.spawned()
    }

    /// Aggregates over the observation horizon.
    pub fn summary(&self) -> Summary {
        self.bank.stats.summary(self.horizon)
    }
}
