//! Time sources for the debounce primitive.
//!
//! Timers are polled deadlines: the owner stores `now + delay` and checks it
//! from its event loop with `tick()`. A clock only has to answer "what time is
//! it", which keeps the primitive deterministic under [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Monotonic wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually driven clock for tests and replays.
///
/// Clones share the same current time, so a clock handed to a
/// [`Debounced`](crate::Debounced) can still be advanced by the caller.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Time elapsed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Moves the clock to `elapsed` after its origin.
    ///
    /// Earlier values are ignored; the clock never runs backwards.
    pub fn set_elapsed(&self, elapsed: Duration) {
        if elapsed > self.elapsed.get() {
            self.elapsed.set(elapsed);
        }
    }

    /// Converts an instant produced by this clock back into elapsed time.
    pub fn elapsed_at(&self, instant: Instant) -> Duration {
        instant.saturating_duration_since(self.origin)
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
