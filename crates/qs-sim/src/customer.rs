//! Customer lifecycle.
//!
//! ```text
//! Created ──request()──▶ Requested ──begin_service()──▶ InService ──depart()──▶ CustomerRecord
//! ```
//!
//! `Requested` covers both "granted on the spot" and "waiting in line"; the
//! difference is only where the process value lives meanwhile.  `depart`
//! consumes the process, so a departed customer cannot fire again.

use qs_core::{CustomerId, SimTime};

use crate::{SimError, SimResult};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum CustomerState {
    Created,
    Requested,
    InService,
    Departed,
}

/// One customer moving through the bank.
#[derive(Debug)]
pub struct CustomerProcess {
    id:               CustomerId,
    arrival_time:     SimTime,
    service_start:    Option<SimTime>,
    service_duration: Option<f64>,
    state:            CustomerState,
}

impl CustomerProcess {
    pub fn new(id: CustomerId, arrival_time: SimTime) -> Self {
        Self {
            id,
            arrival_time,
            service_start: None,
            service_duration: None,
            state: CustomerState::Created,
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn arrival_time(&self) -> SimTime {
        self.arrival_time
    }

    pub fn state(&self) -> CustomerState {
        self.state
    }

    pub fn service_start(&self) -> Option<SimTime> {
        self.service_start
    }

    pub fn service_duration(&self) -> Option<f64> {
        self.service_duration
    }

    /// Mark the teller request as issued.
    pub fn request(&mut self) -> SimResult<()> {
        self.transition(CustomerState::Created, CustomerState::Requested)
    }

    /// Record the grant at `now` and the sampled service duration.
    /// Returns the wait time, which is never negative.
    pub fn begin_service(&mut self, now: SimTime, duration: f64) -> SimResult<f64> {
        self.transition(CustomerState::Requested, CustomerState::InService)?;
        self.service_start = Some(now);
        self.service_duration = Some(duration);
        Ok(now.since(self.arrival_time))
    }

    /// Finish service at `now` and turn into a departure record.
    pub fn depart(mut self, now: SimTime) -> SimResult<CustomerRecord> {
        self.transition(CustomerState::InService, CustomerState::Departed)?;
        let (Some(service_start), Some(service_duration)) = (self.service_start, self.service_duration)
        else {
            return Err(self.invalid(CustomerState::Departed));
        };
        Ok(CustomerRecord {
            id: self.id,
            arrival_time: self.arrival_time,
            service_start_time: service_start,
            service_duration,
            departure_time: now,
        })
    }

    fn transition(&mut self, from: CustomerState, to: CustomerState) -> SimResult<()> {
        if self.state != from {
            return Err(self.invalid(to));
        }
        self.state = to;
        Ok(())
    }

    fn invalid(&self, to: CustomerState) -> SimError {
        SimError::InvalidTransition { customer: self.id, from: self.state, to }
    }
}

/// Immutable account of one customer who completed service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomerRecord {
    pub id:                 CustomerId,
    pub arrival_time:       SimTime,
    pub service_start_time: SimTime,
    pub service_duration:   f64,
    pub departure_time:     SimTime,
}

impl CustomerRecord {
    pub fn wait_time(&self) -> f64 {
        self.service_start_time.since(self.arrival_time)
    }

    pub fn time_in_system(&self) -> f64 {
        self.departure_time.since(self.arrival_time)
    }
}
