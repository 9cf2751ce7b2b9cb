#![forbid(unsafe_code)]

//! Simulated frame clock for driving a [`Wheel`] in tests.
//!
//! [`FrameDriver`] owns a wheel and a synthetic clock. Events are delivered
//! at the current simulated time; [`FrameDriver::advance`] moves the clock
//! forward in fixed frames, ticking the wheel on each one. Every commit the
//! wheel produces is collected in order.
//!
//! ```ignore
//! use wheelpick_widgets::testing::FrameDriver;
//! use wheelpick_widgets::wheel::{Wheel, WheelItem};
//!
//! let items = (1..=5).map(WheelItem::from).collect();
//! let mut driver = FrameDriver::new(Wheel::new(items, Some(&3)));
//! driver.click(4);
//! driver.settle();
//! assert_eq!(driver.committed_values(), vec![5]);
//! ```

use wheelpick_core::event::{Event, PointerInput, WheelInput};
use wheelpick_core::{Duration, Instant};

use crate::wheel::{Wheel, WheelChange};

/// Default frame interval (~60 Hz).
pub const FRAME: Duration = Duration::from_millis(16);

/// Upper bound on frames [`FrameDriver::settle`] will run.
const SETTLE_FRAME_LIMIT: usize = 10_000;

/// A wheel on a simulated clock.
#[derive(Debug)]
pub struct FrameDriver<V> {
    wheel: Wheel<V>,
    now: Instant,
    frame: Duration,
    changes: Vec<WheelChange<V>>,
}

impl<V: Clone + PartialEq> FrameDriver<V> {
    /// Drive `wheel` from the current instant with 16ms frames.
    #[must_use]
    pub fn new(wheel: Wheel<V>) -> Self {
        Self {
            wheel,
            now: Instant::now(),
            frame: FRAME,
            changes: Vec::new(),
        }
    }

    /// Use a different frame interval (builder pattern).
    #[must_use]
    pub fn with_frame(mut self, frame: Duration) -> Self {
        self.frame = frame.max(Duration::from_millis(1));
        self
    }

    /// The wheel.
    #[must_use]
    pub fn wheel(&self) -> &Wheel<V> {
        &self.wheel
    }

    /// The wheel, mutably (for prop sync).
    pub fn wheel_mut(&mut self) -> &mut Wheel<V> {
        &mut self.wheel
    }

    /// Current simulated time.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Every commit so far, in order.
    #[must_use]
    pub fn changes(&self) -> &[WheelChange<V>] {
        &self.changes
    }

    /// Committed values so far, in order.
    #[must_use]
    pub fn committed_values(&self) -> Vec<V> {
        self.changes.iter().map(|c| c.value.clone()).collect()
    }

    /// Drain the collected commits.
    pub fn take_changes(&mut self) -> Vec<WheelChange<V>> {
        std::mem::take(&mut self.changes)
    }

    /// Deliver an event at the current time.
    pub fn send(&mut self, event: impl Into<Event>) {
        let change = self.wheel.handle_event(&event.into(), self.now);
        self.changes.extend(change);
    }

    /// Advance one frame and tick.
    pub fn frame(&mut self) {
        self.now += self.frame;
        let change = self.wheel.tick(self.now);
        self.changes.extend(change);
    }

    /// Advance by `duration`, ticking once per whole frame.
    pub fn advance(&mut self, duration: Duration) {
        let mut remaining = duration;
        while remaining >= self.frame {
            self.frame();
            remaining -= self.frame;
        }
        if !remaining.is_zero() {
            self.now += remaining;
            let change = self.wheel.tick(self.now);
            self.changes.extend(change);
        }
    }

    /// Run frames until the wheel asks for no further wakeup.
    ///
    /// Returns the number of frames run.
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.wheel.next_wakeup().is_some() && frames < SETTLE_FRAME_LIMIT {
            self.frame();
            frames += 1;
        }
        frames
    }

    /// Click item `index` (direct selection).
    pub fn click(&mut self, index: usize) {
        let change = self.wheel.select_index(index, self.now);
        self.changes.extend(change);
    }

    /// One pixel-mode wheel event, then one frame of time.
    pub fn scroll(&mut self, delta_y: f64) {
        self.send(WheelInput::pixels(delta_y));
        self.frame();
    }

    /// Press the mouse at `from`, move to `to` in `steps` frames, and
    /// release there. The pointer is released without a final frame, so the
    /// last move's velocity is what the wheel sees.
    pub fn mouse_drag(&mut self, from: f64, to: f64, steps: usize) {
        self.drag_with(PointerInput::mouse_down, PointerInput::mouse_move, from, to, steps);
        self.send(PointerInput::mouse_up(to));
    }

    /// Touch variant of [`mouse_drag`](Self::mouse_drag).
    pub fn touch_drag(&mut self, from: f64, to: f64, steps: usize) {
        self.drag_with(PointerInput::touch_start, PointerInput::touch_move, from, to, steps);
        self.send(PointerInput::touch_end(to));
    }

    /// Press at `from` and move to `to` in `steps` frames, without releasing.
    pub fn mouse_hold_drag(&mut self, from: f64, to: f64, steps: usize) {
        self.drag_with(PointerInput::mouse_down, PointerInput::mouse_move, from, to, steps);
    }

    fn drag_with(
        &mut self,
        down: fn(f64) -> PointerInput,
        moved: fn(f64) -> PointerInput,
        from: f64,
        to: f64,
        steps: usize,
    ) {
        self.send(down(from));
        let steps = steps.max(1);
        for step in 1..=steps {
            self.now += self.frame;
            let y = from + (to - from) * step as f64 / steps as f64;
            self.send(moved(y));
        }
    }
}
