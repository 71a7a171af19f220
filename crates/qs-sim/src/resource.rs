//! `Resource`: a fixed pool of interchangeable units with a FIFO waiting line.
//!
//! # Invariants
//!
//! - `0 <= in_use <= capacity` at every point.
//! - The waiting line is non-empty only while `in_use == capacity`: a
//!   release hands its unit straight to the head of the line.
//! - Units are granted in exactly the order requesters joined the line.
//!
//! The pool is mutated only from inside clock-driven events, so the
//! single-threaded event loop is its only serialisation; there are no locks.
//!
//! A grant is represented by a [`Permit`].  Permits are neither `Clone` nor
//! `Copy`, and [`Resource::release`] consumes one, so a holder cannot release
//! the same unit twice.

use std::collections::VecDeque;

use qs_core::CoreError;
use tracing::trace;

use crate::{SimError, SimResult};

/// Proof of holding one unit of a [`Resource`].
#[derive(Debug)]
#[must_use = "dropping a Permit leaks a resource unit; pass it to Resource::release"]
pub struct Permit {
    _private: (),
}

impl Permit {
    fn new() -> Self {
        Permit { _private: () }
    }
}

/// Outcome of [`Resource::request`].
///
/// `Queued::queue_len` is the length of the waiting line right after the
/// requester joined it, counting the requester itself.
#[derive(Debug)]
pub enum Requested<T> {
    Granted { requester: T, permit: Permit },
    Queued { queue_len: usize },
}

impl<T> Requested<T> {
    /// Waiting-line length after the request.  An immediate grant only
    /// happens with an empty line, so it reports `0`.
    pub fn queue_len(&self) -> usize {
        match self {
            Requested::Granted { .. } => 0,
            Requested::Queued { queue_len } => *queue_len,
        }
    }
}

/// A bounded pool with FIFO-fair queueing.  `T` is whatever a waiting
/// requester is represented by; the pool owns it while it waits.
#[derive(Debug)]
pub struct Resource<T> {
    capacity: usize,
    in_use:   usize,
    waiting:  VecDeque<T>,
    granted:  u64,
}

impl<T> Resource<T> {
    /// Create a pool of `capacity` units.  Zero capacity is a configuration
    /// error.
    pub fn new(capacity: usize) -> SimResult<Self> {
        if capacity == 0 {
            return Err(CoreError::Config("resource capacity must be at least 1".into()).into());
        }
        Ok(Self {
            capacity,
            in_use:  0,
            waiting: VecDeque::new(),
            granted: 0,
        })
    }

    /// Ask for one unit.  Grants immediately if one is free, otherwise the
    /// requester is moved to the back of the waiting line.
    pub fn request(&mut self, requester: T) -> Requested<T> {
        if self.in_use < self.capacity {
            self.in_use += 1;
            self.granted += 1;
            trace!(in_use = self.in_use, capacity = self.capacity, "unit granted on request");
            Requested::Granted { requester, permit: Permit::new() }
        } else {
            self.waiting.push_back(requester);
            trace!(waiting = self.waiting.len(), "requester queued");
            Requested::Queued { queue_len: self.waiting.len() }
        }
    }

    /// Return the unit held by `permit`.
    ///
    /// If anyone is waiting, the freed unit goes straight to the head of the
    /// line within the same call, and that requester is handed back together
    /// with its new permit.
    pub fn release(&mut self, permit: Permit) -> SimResult<Option<(T, Permit)>> {
        let Permit { _private: () } = permit;
        if self.in_use == 0 {
            return Err(SimError::ReleaseWithoutGrant);
        }
        self.in_use -= 1;

        let Some(next) = self.waiting.pop_front() else {
            trace!(in_use = self.in_use, "unit released");
            return Ok(None);
        };
        self.in_use += 1;
        self.granted += 1;
        trace!(in_use = self.in_use, waiting = self.waiting.len(), "unit handed to head of line");
        Ok(Some((next, Permit::new())))
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn in_use(&self) -> usize {
        self.in_use
    }

    /// Current length of the waiting line.
    pub fn queue_len(&self) -> usize {
        self.waiting.len()
    }

    /// Requesters currently waiting, head of the line first.
    pub fn waiting(&self) -> impl Iterator<Item = &T> {
        self.waiting.iter()
    }

    /// Total grants so far (immediate and from the line).
    pub fn granted(&self) -> u64 {
        self.granted
    }
}
