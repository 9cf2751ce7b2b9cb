#![forbid(unsafe_code)]

//! Input normalization: turning raw wheel-device and pointer streams into
//! offset movement.
//!
//! # Wheel devices
//!
//! Scroll wheels and trackpads deliver many small discrete deltas with no
//! end signal. [`WheelAccumulator`] absorbs sub-threshold jitter, converts
//! accumulated delta into offset steps, tracks a smoothed velocity, and
//! records the dominant direction. The owner synthesizes gesture end with
//! a [`Debounce`](wheelpick_core::timer::Debounce) and then calls
//! [`WheelAccumulator::finish`].
//!
//! Granularity is classified per event: a delta with magnitude below
//! `fine_delta_limit` is fine (trackpad-like) and moves the wheel only after
//! `fine_threshold` px have accumulated, at `1 / fine_divisor` of the
//! accumulated delta. Coarse deltas use the coarse threshold and divisor.
//!
//! # Pointer drags
//!
//! [`DragGesture`] captures one pointer (mouse, or the first touch) from
//! `Down` to `Up`/`Cancel`. The offset follows the pointer 1:1 from where
//! the drag started; velocity is taken from the last pair of samples.

use wheelpick_core::Instant;
use wheelpick_core::event::{PointerInput, PointerKind};
use wheelpick_core::velocity::{SampleVelocity, SmoothedVelocity};

use super::config::WheelDeviceConfig;
use super::momentum::ScrollDirection;

// ---------------------------------------------------------------------------
// Wheel device
// ---------------------------------------------------------------------------

/// Wheel-device delta classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
    /// Small deltas (trackpads, high-resolution wheels).
    #[default]
    Fine,
    /// Large deltas (notched mouse wheels).
    Coarse,
}

impl Granularity {
    /// Classify a delta.
    #[must_use]
    pub fn classify(delta: f64, config: &WheelDeviceConfig) -> Self {
        if delta.abs() < config.fine_delta_limit {
            Self::Fine
        } else {
            Self::Coarse
        }
    }

    /// Accumulated delta needed before the wheel moves.
    #[must_use]
    pub fn threshold(self, config: &WheelDeviceConfig) -> f64 {
        match self {
            Self::Fine => config.fine_threshold,
            Self::Coarse => config.coarse_threshold,
        }
    }

    /// Divisor from accumulated delta to offset movement.
    #[must_use]
    pub fn divisor(self, config: &WheelDeviceConfig) -> f64 {
        match self {
            Self::Fine => config.fine_divisor,
            Self::Coarse => config.coarse_divisor,
        }
    }
}

/// Release state of a finished wheel gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelRelease {
    /// Smoothed delta velocity in px/ms (positive = forward).
    pub velocity: f64,
    /// Divisor of the last granularity seen.
    pub divisor: f64,
    /// Dominant direction, if any event was large enough to set one.
    pub direction: Option<ScrollDirection>,
    /// Net offset movement applied during the gesture, in px.
    pub travel: f64,
}

impl WheelRelease {
    /// Velocity converted to offset space (px/ms).
    #[must_use]
    pub fn offset_velocity(&self) -> f64 {
        -self.velocity / self.divisor
    }

    /// Whole rows the gesture moved the list (rounded).
    #[must_use]
    pub fn travel_rows(&self, item_height: f64) -> usize {
        let rows = (self.travel / item_height).abs().round();
        if rows.is_finite() { rows as usize } else { 0 }
    }
}

/// Cross-event state for one wheel-device gesture.
#[derive(Debug, Clone)]
pub struct WheelAccumulator {
    pending: f64,
    velocity: SmoothedVelocity,
    direction: Option<ScrollDirection>,
    granularity: Granularity,
    travel: f64,
}

impl WheelAccumulator {
    /// Create an idle accumulator.
    #[must_use]
    pub fn new(config: &WheelDeviceConfig) -> Self {
        Self {
            pending: 0.0,
            velocity: SmoothedVelocity::new(config.smoothing),
            direction: None,
            granularity: Granularity::default(),
            travel: 0.0,
        }
    }

    /// Undispatched delta.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> f64 {
        self.pending
    }

    /// Smoothed delta velocity (px/ms).
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity.velocity()
    }

    /// Dominant direction so far.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    /// Net offset movement applied so far this gesture.
    #[inline]
    #[must_use]
    pub fn travel(&self) -> f64 {
        self.travel
    }

    /// Note offset movement actually applied for a step (after damping and
    /// clamping).
    pub fn record_travel(&mut self, moved: f64) {
        if moved.is_finite() {
            self.travel += moved;
        }
    }

    /// Granularity of the most recent event.
    #[inline]
    #[must_use]
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Fold one pixel delta into the gesture.
    ///
    /// Returns the offset movement to apply (already negated, so a forward
    /// delta yields a negative step), or `None` while the accumulated delta
    /// is below the threshold.
    pub fn push(&mut self, delta: f64, now: Instant, config: &WheelDeviceConfig) -> Option<f64> {
        if delta.abs() > config.direction_min_delta {
            self.direction = ScrollDirection::from_delta(delta);
        }
        self.pending += delta;
        self.velocity.push(delta, now);
        self.granularity = Granularity::classify(delta, config);

        if self.pending.abs() < self.granularity.threshold(config) {
            return None;
        }
        let step = -self.pending / self.granularity.divisor(config);
        self.pending = self.pending.signum() * config.residual;
        Some(step)
    }

    /// End the gesture: report its release state and clear per-gesture
    /// state. The last event timestamp is kept so the next gesture's first
    /// delta still measures its interval.
    pub fn finish(&mut self, config: &WheelDeviceConfig) -> WheelRelease {
        let release = WheelRelease {
            velocity: self.velocity.velocity(),
            divisor: self.granularity.divisor(config),
            direction: self.direction,
            travel: self.travel,
        };
        self.pending = 0.0;
        self.direction = None;
        self.travel = 0.0;
        self.velocity.clear();
        release
    }

    /// Forget everything, including the last event timestamp.
    pub fn reset(&mut self) {
        self.pending = 0.0;
        self.direction = None;
        self.travel = 0.0;
        self.granularity = Granularity::default();
        self.velocity.reset();
    }
}

// ---------------------------------------------------------------------------
// Pointer drag
// ---------------------------------------------------------------------------

/// A live pointer drag.
#[derive(Debug, Clone)]
pub struct DragGesture {
    kind: PointerKind,
    id: u32,
    start_y: f64,
    start_offset: f64,
    travel: f64,
    velocity: SampleVelocity,
}

impl DragGesture {
    /// Capture `pointer` with the list at `offset`.
    #[must_use]
    pub fn start(pointer: &PointerInput, offset: f64, now: Instant) -> Self {
        Self {
            kind: pointer.kind,
            id: pointer.id,
            start_y: pointer.y,
            start_offset: offset,
            travel: 0.0,
            velocity: SampleVelocity::new(offset, now),
        }
    }

    /// Whether `pointer` is the captured one.
    #[must_use]
    pub fn owns(&self, pointer: &PointerInput) -> bool {
        pointer.same_pointer(self.kind, self.id)
    }

    /// Device kind of the captured pointer.
    #[must_use]
    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    /// Pointer position at `Down`.
    #[must_use]
    pub fn start_y(&self) -> f64 {
        self.start_y
    }

    /// Offset before elastic resistance for a pointer at `y`.
    #[must_use]
    pub fn tentative_offset(&self, y: f64) -> f64 {
        self.start_offset + (y - self.start_y)
    }

    /// Note pointer travel without moving the list.
    pub fn track(&mut self, y: f64) {
        if y.is_finite() {
            self.travel = self.travel.max((y - self.start_y).abs());
        }
    }

    /// Record a move: pointer at `y`, list now at `offset`.
    pub fn record(&mut self, y: f64, offset: f64, now: Instant) {
        self.track(y);
        self.velocity.push(offset, now);
    }

    /// Largest distance from the start seen so far, in px.
    #[must_use]
    pub fn travel(&self) -> f64 {
        self.travel
    }

    /// Whether the pointer never strayed more than `slop` px.
    #[must_use]
    pub fn is_tap(&self, slop: f64) -> bool {
        self.travel <= slop
    }

    /// Offset velocity (px/ms) from the last pair of samples.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity.velocity()
    }
}
