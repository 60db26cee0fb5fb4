//! Cancel-and-reschedule debouncing.
//!
//! Each trigger pushes the deadline out by the quiet period, so a burst of
//! triggers collapses into a single firing once the burst has been quiet
//! for that long. The host drives time: it calls [`Debouncer::poll`] from
//! its timer or event loop and can read [`Debouncer::deadline`] to schedule
//! a wake-up instead of busy-polling.

use std::cell::Cell;
use web_time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Cell<Option<Instant>>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: Cell::new(None),
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }

    /// Cancels any pending firing and reschedules it `quiet` after `now`.
    pub fn schedule(&self, now: Instant) -> Instant {
        let deadline = now + self.quiet;
        self.deadline.set(Some(deadline));
        deadline
    }

    pub fn cancel(&self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.get().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline.get()
    }

    /// Returns `true` exactly once per scheduled burst, when `now` has
    /// reached the deadline.
    pub fn poll(&self, now: Instant) -> bool {
        match self.deadline.get() {
            Some(deadline) if now >= deadline => {
                self.deadline.set(None);
                true
            }
            _ => false,
        }
    }
}
