//! Arrival generator state.
//!
//! The generator itself never sleeps on a thread.  [`BankSim`][crate::BankSim]
//! keeps exactly one pending `BankEvent::Arrival` for it; each time that
//! event fires the generator spawns one customer and the sim schedules the
//! next arrival.  Closing the generator makes later arrival events no-ops,
//! which is how the horizon bounds new arrivals.

use qs_core::{CustomerId, SimTime};
use tracing::debug;

use crate::CustomerProcess;

#[derive(Debug)]
pub struct ArrivalGenerator {
    next_id: CustomerId,
    spawned: u64,
    closed:  Option<SimTime>,
}

impl Default for ArrivalGenerator {
    fn default() -> Self {
        Self {
            next_id: CustomerId::FIRST,
            spawned: 0,
            closed:  None,
        }
    }
}

impl ArrivalGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the next customer, arriving at `now`, with the next id.
    pub fn spawn(&mut self, now: SimTime) -> CustomerProcess {
        let id = self.next_id;
        self.next_id = id.next();
        self.spawned += 1;
        CustomerProcess::new(id, now)
    }

    /// Stop admitting customers.  Irreversible for the rest of the run.
    pub fn close(&mut self, now: SimTime) {
        if self.closed.is_none() {
            debug!(now = %now, spawned = self.spawned, "arrivals closed");
            self.closed = Some(now);
        }
    }

    pub fn is_open(&self) -> bool {
        self.closed.is_none()
    }

    /// When the generator was closed, if it has been.
    pub fn closed_at(&self) -> Option<SimTime> {
        self.closed
    }

    /// Customers spawned so far.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }
}
