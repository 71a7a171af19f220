//! `SimClock`: simulated time plus the queue of pending wake-ups.
//!
//! A continuation is an event value `E`.  The caller supplies one `fire`
//! function that interprets events; it receives the clock back, so firing an
//! event may schedule further events (this is how a multi-step process is
//! chained).  The clock never runs two events at once, and `now` only moves
//! forward.

use qs_core::SimTime;
use tracing::trace;

use crate::{SimError, SimResult, WakeQueue};

/// The simulated clock and its pending events.
pub struct SimClock<E> {
    now:   SimTime,
    queue: WakeQueue<E>,
    fired: u64,
}

impl<E> Default for SimClock<E> {
    fn default() -> Self {
        Self {
            now:   SimTime::ZERO,
            queue: WakeQueue::new(),
            fired: 0,
        }
    }
}

impl<E> SimClock<E> {
    /// A clock at time zero with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Number of events fired so far.
    #[inline]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Number of events still waiting to fire.
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Wake time of the earliest pending event.
    pub fn next_wake(&self) -> Option<SimTime> {
        self.queue.next_time()
    }

    /// Cancel every pending event for which `keep` returns `false`.
    pub fn retain(&mut self, keep: impl FnMut(&E) -> bool) {
        let before = self.queue.len();
        self.queue.retain(keep);
        trace!(now = %self.now, cancelled = before - self.queue.len(), "events cancelled");
    }

    /// Schedule `event` to fire `delay` time units from now.
    ///
    /// A zero delay is allowed and fires after everything already due at
    /// `now`.  Negative, NaN, or infinite delays fail with
    /// [`SimError::InvalidDelay`].  Returns the wake time.
    pub fn schedule(&mut self, delay: f64, event: E) -> SimResult<SimTime> {
        let wake = self
            .now
            .offset(delay)
            .map_err(|_| SimError::InvalidDelay { delay })?;
        self.queue.push(wake, event);
        trace!(now = %self.now, wake = %wake, pending = self.queue.len(), "event scheduled");
        Ok(wake)
    }

    /// Fire events in time order while the next wake time is `<= horizon`.
    ///
    /// When the next event lies past the horizon the clock is left at
    /// `horizon` and that event stays queued.  When the queue runs dry the
    /// clock stays at the last fired event.  A horizon earlier than `now`
    /// fails with [`SimError::CausalityViolation`].
    pub fn run_until<F>(&mut self, horizon: SimTime, mut fire: F) -> SimResult<()>
    where
        F: FnMut(&mut SimClock<E>, E) -> SimResult<()>,
    {
        if horizon < self.now {
            return Err(SimError::CausalityViolation { now: self.now, wake: horizon });
        }
        while let Some(event) = self.pop_due(Some(horizon))? {
            fire(self, event)?;
        }
        Ok(())
    }

    /// Fire events in time order until none remain.
    ///
    /// `fire` must eventually stop scheduling, or this never returns.
    pub fn run<F>(&mut self, mut fire: F) -> SimResult<()>
    where
        F: FnMut(&mut SimClock<E>, E) -> SimResult<()>,
    {
        while let Some(event) = self.pop_due(None)? {
            fire(self, event)?;
        }
        Ok(())
    }

    /// Pop the earliest event if it is due by `horizon`, advancing `now`.
    fn pop_due(&mut self, horizon: Option<SimTime>) -> SimResult<Option<E>> {
        let Some(wake) = self.queue.next_time() else {
            return Ok(None);
        };
        if let Some(h) = horizon {
            if wake > h {
                self.now = h;
                return Ok(None);
            }
        }
        if wake < self.now {
            return Err(SimError::CausalityViolation { now: self.now, wake });
        }
        let Some((wake, event)) = self.queue.pop_next() else {
            return Ok(None);
        };
        self.now = wake;
        self.fired += 1;
        trace!(now = %self.now, fired = self.fired, "event fired");
        Ok(Some(event))
    }
}
