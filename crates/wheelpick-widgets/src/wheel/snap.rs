#![forbid(unsafe_code)]

//! Snap animation: the single time-boxed interpolation that settles the
//! wheel onto an item.
//!
//! A [`SnapAnimation`] eases the offset from where the gesture left it to
//! the target's rest offset with a quadratic ease-out. It never schedules
//! itself; the owner advances it from its frame callback via
//! [`SnapAnimation::advance_to`].
//!
//! # Commit point
//!
//! The selection commit is allowed once linear progress passes
//! `commit_progress` and the interpolated offset is nearest the target.
//! [`SnapAnimation::take_commit`] reports that moment at most once; the
//! completion path uses [`SnapAnimation::is_committed`] to catch settles
//! that never crossed it (very short distances).

use wheelpick_core::animation::{Animation, Tween, ease_out};
use wheelpick_core::{Duration, Instant};

use super::config::SnapConfig;

/// Settle duration for wheel-device and direct-click settles:
/// `min(max, base + distance * per_item)`.
#[must_use]
pub fn direct_settle_duration(distance: usize, config: &SnapConfig) -> Duration {
    let ms = config
        .direct_base_ms
        .saturating_add(config.direct_per_item_ms.saturating_mul(distance as u64))
        .min(config.direct_max_ms);
    Duration::from_millis(ms)
}

/// Settle duration after a drag release.
///
/// Short hops (one item or less) use the base duration. Longer ones grow
/// with distance, shrink with release speed (px/s), and are clamped to
/// `[base, max]`.
#[must_use]
pub fn drag_settle_duration(distance: usize, speed: f64, config: &SnapConfig) -> Duration {
    if distance <= 1 {
        return Duration::from_millis(config.drag_base_ms);
    }
    let base = config.drag_base_ms as f64;
    let raw = base + distance as f64 * config.drag_per_item_ms as f64
        - speed.abs() * config.drag_speed_discount;
    let ms = if raw.is_finite() {
        raw.clamp(base, config.drag_max_ms as f64)
    } else {
        base
    };
    Duration::from_millis(ms.round() as u64)
}

/// An in-flight settle toward `target_index`.
#[derive(Debug, Clone)]
pub struct SnapAnimation {
    tween: Tween,
    target_index: usize,
    commit_progress: f32,
    committed: bool,
    clock: Instant,
}

impl SnapAnimation {
    /// Start a settle from `from` to `to` (the target's rest offset) at `now`.
    #[must_use]
    pub fn new(
        from: f64,
        to: f64,
        target_index: usize,
        duration: Duration,
        commit_progress: f32,
        now: Instant,
    ) -> Self {
        Self {
            tween: Tween::new(from, to, duration).easing(ease_out),
            target_index,
            commit_progress,
            committed: false,
            clock: now,
        }
    }

    /// The index being settled on.
    #[inline]
    #[must_use]
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// The target's rest offset.
    #[inline]
    #[must_use]
    pub fn target_offset(&self) -> f64 {
        self.tween.end()
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.tween.duration()
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.tween.progress()
    }

    /// Interpolated offset; exactly the target offset once complete.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.tween.position()
    }

    /// Advance to wall-clock `now` (no-op if `now` is not later than the
    /// previous frame).
    pub fn advance_to(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.clock);
        if now > self.clock {
            self.clock = now;
        }
        self.tick(dt);
    }

    /// Whether the commit already fired for this settle.
    #[inline]
    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Mark the commit as fired if the commit point has been reached.
    ///
    /// `nearest_index` is the index nearest the interpolated offset. Returns
    /// `true` exactly once per animation.
    pub fn take_commit(&mut self, nearest_index: usize) -> bool {
        if self.committed
            || self.progress() <= self.commit_progress
            || nearest_index != self.target_index
        {
            return false;
        }
        self.committed = true;
        true
    }

    /// Mark the commit as fired unconditionally. Returns `false` if it had
    /// already fired.
    pub fn force_commit(&mut self) -> bool {
        !std::mem::replace(&mut self.committed, true)
    }
}

impl Animation for SnapAnimation {
    fn tick(&mut self, dt: Duration) {
        self.tween.tick(dt);
    }

    fn is_complete(&self) -> bool {
        self.tween.is_complete()
    }

    fn value(&self) -> f32 {
        self.tween.value()
    }

    fn reset(&mut self) {
        self.tween.reset();
        self.committed = false;
    }

    fn overshoot(&self) -> Duration {
        self.tween.overshoot()
    }
}
