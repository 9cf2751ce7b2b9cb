#![forbid(unsafe_code)]

//! Time-driven animation primitives.
//!
//! Animations here are explicit state machines advanced by [`Animation::tick`]
//! with the elapsed [`Duration`] since the previous tick. They never read a
//! clock or schedule themselves; the host decides when to call `tick`
//! (typically once per display frame). This keeps the easing math pure and
//! testable independently of any event loop.
//!
//! # Invariants
//!
//! 1. `value()` is in `[0.0, 1.0]` for every easing in this module.
//! 2. Once `is_complete()` returns true it stays true until `reset()`.
//! 3. `overshoot()` is zero until the animation completes.

use std::time::Duration;

mod tween;

pub use tween::Tween;

/// An easing curve mapping linear progress `t` in `[0, 1]` to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// A time-driven animation.
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current eased progress in `[0.0, 1.0]`.
    fn value(&self) -> f32;

    /// Return to the initial state.
    fn reset(&mut self);

    /// Time elapsed past completion (zero while still running).
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Identity easing.
#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-out: `1 - (1 - t)^2`.
///
/// Monotonic deceleration with no overshoot; the wheel snap curve.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv
}
