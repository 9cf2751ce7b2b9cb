#![forbid(unsafe_code)]

//! Velocity estimation for kinetic scrolling.
//!
//! Two estimators with different noise profiles:
//!
//! - [`SampleVelocity`] tracks a position and reports the velocity between
//!   the two most recent samples. Pointer drags deliver dense, accurate
//!   position updates, so the latest segment is the best predictor of where
//!   the finger was heading at release.
//! - [`SmoothedVelocity`] folds per-event instantaneous velocities into an
//!   exponential moving average. Wheel devices deliver sparse, quantized
//!   deltas whose instantaneous rate is noisy.
//!
//! All velocities are in pixels per millisecond.

use web_time::Instant;

/// Milliseconds between two instants as `f64` (zero if `later` is earlier).
#[must_use]
pub fn elapsed_ms(earlier: Instant, later: Instant) -> f64 {
    later.saturating_duration_since(earlier).as_secs_f64() * 1000.0
}

/// Velocity from the most recent pair of position samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleVelocity {
    last_position: f64,
    last_time: Instant,
    velocity: f64,
}

impl SampleVelocity {
    /// Start tracking at `position` with zero velocity.
    #[must_use]
    pub fn new(position: f64, now: Instant) -> Self {
        Self {
            last_position: position,
            last_time: now,
            velocity: 0.0,
        }
    }

    /// Record a new position sample.
    ///
    /// Samples that arrive in the same millisecond as the previous one are
    /// ignored so a burst of coalesced events cannot divide by ~zero.
    pub fn push(&mut self, position: f64, now: Instant) {
        let dt = elapsed_ms(self.last_time, now);
        if dt > 0.0 {
            self.velocity = (position - self.last_position) / dt;
            self.last_position = position;
            self.last_time = now;
        }
    }

    /// Current velocity estimate.
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Time of the last accepted sample.
    #[inline]
    #[must_use]
    pub fn last_time(&self) -> Instant {
        self.last_time
    }

    /// Zero the velocity, keeping the last position.
    pub fn clear(&mut self) {
        self.velocity = 0.0;
    }
}

/// Exponentially smoothed velocity over discrete deltas.
///
/// Each update computes `v = v * retain + instant * (1 - retain)` where
/// `instant = delta / elapsed_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedVelocity {
    retain: f64,
    velocity: f64,
    last_time: Option<Instant>,
}

impl SmoothedVelocity {
    /// Create an estimator keeping `retain` of the previous estimate per
    /// update. Clamped to `[0, 1]`.
    #[must_use]
    pub fn new(retain: f64) -> Self {
        Self {
            retain: retain.clamp(0.0, 1.0),
            velocity: 0.0,
            last_time: None,
        }
    }

    /// Fold a delta observed at `now` into the estimate.
    ///
    /// The first delta after construction (or [`reset`](Self::reset)) has no
    /// previous timestamp; its instantaneous rate counts as zero so a lone
    /// event only decays the estimate.
    pub fn push(&mut self, delta: f64, now: Instant) {
        let instant = match self.last_time {
            Some(last) => {
                let dt = elapsed_ms(last, now);
                if dt > 0.0 {
                    Some(delta / dt)
                } else {
                    None
                }
            }
            None => Some(0.0),
        };
        if let Some(instant) = instant {
            self.velocity = self.velocity * self.retain + instant * (1.0 - self.retain);
        }
        self.last_time = Some(now);
    }

    /// Current smoothed velocity.
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Zero the estimate. The last timestamp is kept so the next delta still
    /// measures its interval.
    pub fn clear(&mut self) {
        self.velocity = 0.0;
    }

    /// Forget everything, including the last timestamp.
    pub fn reset(&mut self) {
        self.velocity = 0.0;
        self.last_time = None;
    }
}
