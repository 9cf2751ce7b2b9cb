#![forbid(unsafe_code)]

//! Cancelable delayed completion.
//!
//! [`Debounce`] models "run this after N ms unless superseded" without owning
//! a platform timer. The owner arms it with the current time, re-arms it on
//! every new input, and polls it from its frame/timer callback. A host that
//! wants to sleep until the deadline reads [`Debounce::deadline`].
//!
//! # Invariants
//!
//! 1. `poll()` returns `true` at most once per `arm()`.
//! 2. `cancel()` guarantees the pending completion never fires.
//! 3. Re-arming replaces the previous deadline (last writer wins).

use web_time::{Duration, Instant};

/// A single-shot, re-armable, cancelable deadline.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    /// Create a disarmed debounce with the given quiet period.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) so that completion fires `delay` after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Cancel any pending completion. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Whether a completion is pending.
    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The configured quiet period.
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Fire if the deadline has passed. Disarms on fire.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
