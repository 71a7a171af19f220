use qs_core::{CoreError, CustomerId, SimTime};
use thiserror::Error;

use crate::CustomerState;

/// Engine errors.  None of them is recoverable: each one means either a bad
/// configuration (caught before the run) or a broken engine invariant.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("cannot schedule an event with delay {delay}: delay must be finite and non-negative")]
    InvalidDelay { delay: f64 },

    #[error("clock would move backward from {now} to {wake}")]
    CausalityViolation { now: SimTime, wake: SimTime },

    #[error("arrivals closed at {closed_at}; no walk-in can be scheduled")]
    ArrivalsClosed { closed_at: SimTime },

    #[error("release called on a resource with no units in use")]
    ReleaseWithoutGrant,

    #[error("{customer} cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        customer: CustomerId,
        from:     CustomerState,
        to:       CustomerState,
    },
}

pub type SimResult<T> = Result<T, SimError>;
