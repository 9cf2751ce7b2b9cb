#![forbid(unsafe_code)]

//! Tween: eased interpolation between two scalar positions.
//!
//! # Failure Modes
//!
//! - Zero duration: clamped to 1ns so progress jumps straight to 1.0 on the
//!   first tick instead of dividing by zero.
//! - Non-finite endpoints: the caller's problem; the tween interpolates
//!   whatever it is given.

use std::time::Duration;

use super::{Animation, EasingFn, ease_out};

/// Interpolates a scalar from `from` to `to` over `duration`.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFn,
}

impl Tween {
    /// Create a tween with ease-out easing.
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            elapsed: Duration::ZERO,
            easing: ease_out,
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Start position.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.from
    }

    /// End position.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.to
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time elapsed since the start (may exceed `duration`).
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Linear progress `elapsed / duration`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
    }

    /// Current interpolated position.
    ///
    /// Returns exactly `to` once complete, so callers land on the rest
    /// position without floating-point drift.
    #[must_use]
    pub fn position(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        self.from + (self.to - self.from) * f64::from(self.value())
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::linear;

    const MS_16: Duration = Duration::from_millis(16);

    #[test]
    fn starts_at_from() {
        let tween = Tween::new(-80.0, -160.0, Duration::from_millis(210));
        assert_eq!(tween.position(), -80.0);
        assert!(!tween.is_complete());
    }

    #[test]
    fn lands_exactly_on_target() {
        let mut tween = Tween::new(-80.0, -160.0, Duration::from_millis(210));
        for _ in 0..20 {
            tween.tick(MS_16);
        }
        assert!(tween.is_complete());
        assert_eq!(tween.position(), -160.0);
    }

    #[test]
    fn linear_midpoint() {
        let mut tween = Tween::new(0.0, 100.0, Duration::from_millis(100)).easing(linear);
        tween.tick(Duration::from_millis(50));
        assert!((tween.position() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut tween = Tween::new(0.0, 10.0, Duration::ZERO);
        tween.tick(Duration::from_nanos(1));
        assert!(tween.is_complete());
        assert_eq!(tween.position(), 10.0);
    }

    #[test]
    fn overshoot_tracks_time_past_end() {
        let mut tween = Tween::new(0.0, 1.0, Duration::from_millis(100));
        tween.tick(Duration::from_millis(130));
        assert_eq!(tween.overshoot(), Duration::from_millis(30));
    }

    #[test]
    fn reset_rewinds() {
        let mut tween = Tween::new(0.0, 1.0, Duration::from_millis(100));
        tween.tick(Duration::from_millis(100));
        tween.reset();
        assert_eq!(tween.progress(), 0.0);
        assert_eq!(tween.position(), 0.0);
    }

    #[test]
    fn position_is_monotonic_toward_target() {
        let mut tween = Tween::new(0.0, -200.0, Duration::from_millis(300));
        let mut prev = tween.position();
        while !tween.is_complete() {
            tween.tick(MS_16);
            let pos = tween.position();
            assert!(pos <= prev, "moved backward: {prev} -> {pos}");
            prev = pos;
        }
    }
}
