//! Value debouncing.
//!
//! [`Debounced`] observes a rapidly changing input and publishes a settled
//! value only once the input has stayed unchanged for the configured delay.
//!
//! # Design
//!
//! - One pending-timer slot. Every input change replaces it, which is the
//!   cancellation of the previous timer.
//! - The slot carries the value that was current when it was scheduled, so a
//!   superseded value can never be published.
//! - Firing is polled: call `tick()` from the owner's event loop. Dropping the
//!   owner drops the slot, so no timer can fire after teardown.
//! - A zero delay settles synchronously inside `set()`.

use crate::clock::{Clock, SystemClock};
use std::time::{Duration, Instant};

/// A scheduled settle that has not fired yet.
#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Debounced projection of an input value.
#[derive(Debug)]
pub struct Debounced<T, C: Clock = SystemClock> {
    clock: C,
    delay: Duration,
    input: T,
    settled: T,
    pending: Option<Pending<T>>,
}

/// Create operations.
impl<T: Clone + PartialEq, C: Clock> Debounced<T, C> {
    /// Creates a debouncer whose settled value starts out equal to `initial`.
    pub fn new(initial: T, delay: Duration, clock: C) -> Self {
        Self {
            clock,
            delay,
            settled: initial.clone(),
            input: initial,
            pending: None,
        }
    }
}

/// Mutation operations.
impl<T: Clone + PartialEq, C: Clock> Debounced<T, C> {
    /// Feeds a new input value.
    ///
    /// Setting the current input again leaves any pending timer untouched.
    /// If the input is unsettled with nothing pending (after `cancel()`), it
    /// is scheduled again. Returns `true` only when the settled value was
    /// updated synchronously, which happens with a zero delay.
    pub fn set(&mut self, value: T) -> bool {
        if value == self.input && (self.pending.is_some() || self.input == self.settled) {
            return false;
        }
        self.input = value;

        if self.delay.is_zero() {
            self.pending = None;
            self.settled = self.input.clone();
            return true;
        }

        let deadline = self.clock.now() + self.delay;
        if self.pending.is_some() {
            tracing::trace!(delay_ms = self.delay.as_millis() as u64, "debounce timer rescheduled");
        } else {
            tracing::trace!(delay_ms = self.delay.as_millis() as u64, "debounce timer scheduled");
        }
        self.pending = Some(Pending {
            value: self.input.clone(),
            deadline,
        });
        false
    }

    /// Fires the pending timer if its deadline has passed.
    ///
    /// Returns `true` when the settled value was updated.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if !due {
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };

        self.settled = pending.value;
        tracing::debug!("debounce timer fired");
        true
    }

    /// Drops the pending timer without settling.
    ///
    /// The input keeps its value; setting it again reschedules the settle.
    ///
    /// Returns `true` if a timer was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

/// Query operations.
impl<T, C: Clock> Debounced<T, C> {
    /// The latest input value.
    pub fn input(&self) -> &T {
        &self.input
    }

    /// The most recent value that stayed unchanged for a full delay.
    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Deadline of the pending timer, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<T, C: Clock> Drop for Debounced<T, C> {
    fn drop(&mut self) {
        if self.pending.take().is_some() {
            tracing::trace!("pending debounce timer discarded on teardown");
        }
    }
}
