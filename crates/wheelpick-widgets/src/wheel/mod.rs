#![forbid(unsafe_code)]

//! Kinetic wheel picker engine.
//!
//! A [`Wheel`] is a vertically scrolling list of items with a fixed
//! selection band in the middle. Scroll-wheel, touch, and mouse input move
//! a continuous offset; when a gesture ends the wheel projects momentum,
//! animates onto the nearest valid item, and commits that item's value.
//!
//! # Driving a wheel
//!
//! The engine owns no timers or callbacks. The host:
//!
//! 1. feeds input through [`Wheel::handle_event`],
//! 2. calls [`Wheel::tick`] whenever [`Wheel::next_wakeup`] asks for it
//!    (every frame while animating, or once at the wheel-gesture deadline),
//! 3. forwards any returned [`WheelChange`] to its own change handler,
//! 4. renders [`Wheel::project`] inside [`Wheel::layout`].
//!
//! Dropping the wheel releases everything; there is nothing to unregister.
//!
//! # Invariants
//!
//! 1. Exactly one driver (drag, pending wheel gesture, or snap animation)
//!    owns the offset at a time. Starting one supersedes the others.
//! 2. A commit is never produced while a drag is live.
//! 3. Each settle produces at most one commit, and only when the settled
//!    value differs from the authoritative value.
//! 4. After a settle completes, `current_index == clamp(round(-offset / h))`
//!    and the offset is exactly on a rest position.
//! 5. Rest offsets stay within `[-(len - 1) * h, 0]`. Drags overshoot with
//!    elastic resistance; wheel input overshoots by at most
//!    `max_overscroll_items` rows.
//!
//! # Example
//!
//! ```
//! use wheelpick_core::Instant;
//! use wheelpick_widgets::wheel::{Wheel, WheelItem};
//!
//! let items: Vec<_> = (1..=5).map(WheelItem::from).collect();
//! let mut wheel = Wheel::new(items, Some(&3));
//! assert_eq!(wheel.current_index(), Some(2));
//! assert_eq!(wheel.offset(), -80.0);
//!
//! let t0 = Instant::now();
//! assert!(wheel.select_index(4, t0).is_none());
//! assert!(wheel.next_wakeup().is_some());
//! ```

pub mod config;
pub mod input;
mod item;
pub mod momentum;
pub mod position;
pub mod render;
pub mod snap;

pub use config::{
    DragConfig, RenderConfig, SnapConfig, WheelConfig, WheelConfigError, WheelDeviceConfig,
};
pub use item::{Wakeup, WheelChange, WheelItem, WheelPhase};
pub use render::{ItemView, WheelLayout};

use wheelpick_core::Instant;
use wheelpick_core::animation::Animation;
use wheelpick_core::event::{Event, PointerInput, PointerPhase, WheelInput};
use wheelpick_core::timer::Debounce;

use self::input::{DragGesture, WheelAccumulator};
use self::momentum::{MomentumInput, project_target};
use self::position::PositionModel;
use self::snap::{SnapAnimation, direct_settle_duration, drag_settle_duration};

/// The single owner of the offset.
#[derive(Debug, Clone, Default)]
enum Driver {
    #[default]
    Idle,
    Dragging(DragGesture),
    Scrolling(Debounce),
    Animating(SnapAnimation),
}

/// What a frame did to an animation.
enum Frame {
    Running,
    CommitPoint(usize),
    Finished { index: usize, commit: bool },
}

/// A wheel picker instance.
#[derive(Debug, Clone)]
pub struct Wheel<V> {
    items: Vec<WheelItem<V>>,
    value: Option<V>,
    config: WheelConfig,
    model: PositionModel,
    driver: Driver,
    accumulator: WheelAccumulator,
}

impl<V: Clone + PartialEq> Wheel<V> {
    /// Create a wheel with the default configuration, at rest on the first
    /// item whose value equals `value` (index 0 if none does).
    #[must_use]
    pub fn new(items: Vec<WheelItem<V>>, value: Option<&V>) -> Self {
        Self::build(items, value, WheelConfig::default())
    }

    /// Create a wheel with a custom configuration.
    pub fn with_config(
        items: Vec<WheelItem<V>>,
        value: Option<&V>,
        config: WheelConfig,
    ) -> Result<Self, WheelConfigError> {
        Ok(Self::build(items, value, config.validated()?))
    }

    fn build(items: Vec<WheelItem<V>>, value: Option<&V>, config: WheelConfig) -> Self {
        let index = value.and_then(|v| position_of(&items, v)).unwrap_or(0);
        let model = PositionModel::new(config.item_height, items.len(), index);
        let accumulator = WheelAccumulator::new(&config.wheel);
        tracing::debug!(len = items.len(), index, "wheel mounted");
        Self {
            items,
            value: value.cloned(),
            config,
            model,
            driver: Driver::Idle,
            accumulator,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The items.
    #[must_use]
    pub fn items(&self) -> &[WheelItem<V>] {
        &self.items
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// The authoritative value: the last prop value or committed value.
    #[must_use]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Highlighted index, or `None` for an empty wheel.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (!self.model.is_empty()).then(|| self.model.current_index())
    }

    /// Continuous offset in px.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.model.offset()
    }

    /// The position model.
    #[must_use]
    pub fn position(&self) -> &PositionModel {
        &self.model
    }

    /// Which driver owns the offset.
    #[must_use]
    pub fn phase(&self) -> WheelPhase {
        match self.driver {
            Driver::Idle => WheelPhase::Idle,
            Driver::Dragging(_) => WheelPhase::Dragging,
            Driver::Scrolling(_) => WheelPhase::Scrolling,
            Driver::Animating(_) => WheelPhase::Animating,
        }
    }

    /// When [`tick`](Self::tick) must run next, or `None` at rest.
    #[must_use]
    pub fn next_wakeup(&self) -> Option<Wakeup> {
        match &self.driver {
            Driver::Animating(_) => Some(Wakeup::NextFrame),
            Driver::Scrolling(debounce) => debounce.deadline().map(Wakeup::At),
            Driver::Idle | Driver::Dragging(_) => None,
        }
    }

    /// Viewport geometry.
    #[must_use]
    pub fn layout(&self) -> WheelLayout {
        WheelLayout::new(&self.config)
    }

    /// Visible items for this frame.
    #[must_use]
    pub fn project(&self) -> Vec<ItemView<'_>> {
        render::project_items(&self.items, &self.model, &self.layout(), &self.config.render)
    }

    /// Index of the item under viewport coordinate `y`.
    #[must_use]
    pub fn hit_test(&self, y: f64) -> Option<usize> {
        render::hit_test(y, &self.model, &self.layout())
    }

    // -----------------------------------------------------------------------
    // Prop sync
    // -----------------------------------------------------------------------

    /// Replace the items.
    ///
    /// Identical items are a no-op. Otherwise any driver is dropped without
    /// committing and the wheel rests on the authoritative value's index,
    /// or on the previous index (clamped) if the value is no longer listed.
    pub fn set_items(&mut self, items: Vec<WheelItem<V>>) {
        if items == self.items {
            return;
        }
        self.items = items;
        self.drop_driver();
        self.model.set_len(self.items.len());
        let index = self
            .value
            .as_ref()
            .and_then(|v| position_of(&self.items, v))
            .unwrap_or(self.model.current_index());
        self.model.set_rest(index);
        tracing::debug!(len = self.items.len(), index, "items replaced");
    }

    /// Sync the authoritative value from the host.
    ///
    /// Equal values are a no-op, so echoing a commit back is safe even
    /// mid-animation. A different listed value jumps to its rest position
    /// without animating or committing.
    pub fn set_value(&mut self, value: Option<&V>) {
        if self.value.as_ref() == value {
            return;
        }
        self.value = value.cloned();
        if let Some(index) = value.and_then(|v| position_of(&self.items, v)) {
            self.drop_driver();
            self.model.set_rest(index);
            tracing::debug!(index, "value synced");
        }
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Feed one input event.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> Option<WheelChange<V>> {
        if let Some(modality) = event.modality() {
            if !self.config.modalities.contains(modality) {
                return None;
            }
        }
        match event {
            Event::Wheel(input) => {
                self.on_wheel(input, now);
                None
            }
            Event::Pointer(pointer) => self.on_pointer(pointer, now),
            Event::Focus(false) => {
                self.cancel();
                None
            }
            Event::Focus(true) => None,
        }
    }

    /// Animate to `index` (clamped), as for a click on that item.
    pub fn select_index(&mut self, index: usize, now: Instant) -> Option<WheelChange<V>> {
        if self.model.is_empty() || matches!(self.driver, Driver::Dragging(_)) {
            return None;
        }
        let target = self.model.clamp_position(index);
        if matches!(self.driver, Driver::Idle)
            && target == self.model.current_index()
            && self.model.is_near_rest(target, self.config.snap.rest_tolerance)
        {
            self.model.set_rest(target);
            tracing::debug!(target_index = target, "selection already at rest");
            return None;
        }
        self.drop_driver();
        let duration = direct_settle_duration(self.model.distance_to(target), &self.config.snap);
        tracing::debug!(target_index = target, "direct selection");
        self.settle(target, duration, now)
    }

    /// Abandon any driver and rest on the nearest item without committing.
    pub fn cancel(&mut self) {
        if matches!(self.driver, Driver::Idle) {
            return;
        }
        let phase = self.phase();
        self.drop_driver();
        self.model.set_rest(self.model.nearest_index());
        tracing::debug!(?phase, index = self.model.current_index(), "driver cancelled");
    }

    /// Advance timers and animation to `now`.
    pub fn tick(&mut self, now: Instant) -> Option<WheelChange<V>> {
        match self.phase() {
            WheelPhase::Scrolling => {
                let fired = match &mut self.driver {
                    Driver::Scrolling(debounce) => debounce.poll(now),
                    _ => false,
                };
                if fired {
                    self.driver = Driver::Idle;
                    return self.end_wheel_gesture(now);
                }
                None
            }
            WheelPhase::Animating => match self.advance_animation(now) {
                Frame::Running => None,
                Frame::CommitPoint(index) => {
                    self.model.set_current_index(index);
                    self.commit(index)
                }
                Frame::Finished { index, commit } => {
                    self.model.set_rest(index);
                    self.driver = Driver::Idle;
                    tracing::debug!(index, "settled");
                    if commit { self.commit(index) } else { None }
                }
            },
            WheelPhase::Idle | WheelPhase::Dragging => None,
        }
    }

    fn advance_animation(&mut self, now: Instant) -> Frame {
        let Driver::Animating(snap) = &mut self.driver else {
            return Frame::Running;
        };
        snap.advance_to(now);
        self.model.set_offset(snap.position());
        let target = snap.target_index();
        if snap.is_complete() {
            return Frame::Finished {
                index: target,
                commit: snap.force_commit(),
            };
        }
        if snap.take_commit(self.model.nearest_index()) {
            Frame::CommitPoint(target)
        } else {
            Frame::Running
        }
    }

    fn on_wheel(&mut self, input: &WheelInput, now: Instant) {
        if self.model.is_empty() || matches!(self.driver, Driver::Dragging(_)) {
            return;
        }
        let mut debounce = match std::mem::take(&mut self.driver) {
            Driver::Scrolling(debounce) => debounce,
            Driver::Animating(_) => {
                tracing::debug!("wheel input interrupted snap animation");
                Debounce::new(self.config.wheel.debounce())
            }
            Driver::Idle | Driver::Dragging(_) => Debounce::new(self.config.wheel.debounce()),
        };

        let delta = input.to_pixels(self.config.item_height, self.config.viewport_height());
        let step = self.accumulator.push(delta, now, &self.config.wheel);
        tracing::trace!(
            delta,
            pending = self.accumulator.pending(),
            velocity = self.accumulator.velocity(),
            "wheel delta"
        );
        if let Some(step) = step {
            self.step_offset(step);
        }

        debounce.arm(now);
        self.driver = Driver::Scrolling(debounce);
    }

    /// Apply a wheel step with damping and a hard cap past either end.
    fn step_offset(&mut self, step: f64) {
        let wheel = &self.config.wheel;
        let (min, max) = self.model.bounds();
        let tentative = self.model.offset() + step;
        let next = if tentative > max || tentative < min {
            self.model.offset() + step * (1.0 - wheel.overscroll_resistance)
        } else {
            tentative
        };
        let margin = wheel.max_overscroll_items * self.config.item_height;
        let before = self.model.offset();
        self.model
            .set_offset(self.model.clamp_overscroll(next, margin));
        self.model.sync_index();
        self.accumulator.record_travel(self.model.offset() - before);
    }

    fn end_wheel_gesture(&mut self, now: Instant) -> Option<WheelChange<V>> {
        let release = self.accumulator.finish(&self.config.wheel);
        let target = project_target(MomentumInput {
            offset: self.model.offset(),
            velocity: release.offset_velocity(),
            min_velocity: self.config.wheel.min_velocity / release.divisor,
            factor: self.config.wheel.momentum_factor,
            item_height: self.config.item_height,
            len: self.items.len(),
            direction: release.direction,
            reach: Some(release.travel_rows(self.config.item_height)),
        });
        let duration = direct_settle_duration(self.model.distance_to(target), &self.config.snap);
        tracing::debug!(
            target_index = target,
            velocity = release.velocity,
            direction = ?release.direction,
            travel = release.travel,
            "wheel gesture ended"
        );
        self.settle(target, duration, now)
    }

    fn on_pointer(&mut self, pointer: &PointerInput, now: Instant) -> Option<WheelChange<V>> {
        if self.model.is_empty() {
            return None;
        }
        match pointer.phase {
            PointerPhase::Down => {
                if matches!(self.driver, Driver::Dragging(_)) || !pointer.y.is_finite() {
                    return None;
                }
                if !matches!(self.driver, Driver::Idle) {
                    tracing::debug!(phase = ?self.phase(), "pointer down superseded driver");
                }
                self.drop_driver();
                self.driver = Driver::Dragging(DragGesture::start(pointer, self.model.offset(), now));
                tracing::debug!(kind = ?pointer.kind, y = pointer.y, "drag started");
                None
            }
            PointerPhase::Move => {
                let resistance = self.config.drag.elastic_resistance;
                if let Driver::Dragging(drag) = &mut self.driver {
                    if drag.owns(pointer) && pointer.y.is_finite() {
                        let offset = self
                            .model
                            .rubber_band(drag.tentative_offset(pointer.y), resistance);
                        self.model.set_offset(offset);
                        self.model.sync_index();
                        drag.record(pointer.y, offset, now);
                    }
                }
                None
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                let mut drag = match std::mem::take(&mut self.driver) {
                    Driver::Dragging(drag) if drag.owns(pointer) => drag,
                    other => {
                        self.driver = other;
                        return None;
                    }
                };
                if pointer.phase == PointerPhase::Cancel {
                    tracing::debug!("drag cancelled by platform");
                    return self.release(0.0, now);
                }
                drag.track(pointer.y);
                if drag.is_tap(self.config.drag.tap_slop) {
                    if let Some(index) = self.hit_test(drag.start_y()) {
                        tracing::debug!(index, "tap");
                        return self.select_index(index, now);
                    }
                }
                self.release(drag.velocity(), now)
            }
        }
    }

    /// Settle after a drag with release `velocity` (px/ms, offset space).
    fn release(&mut self, velocity: f64, now: Instant) -> Option<WheelChange<V>> {
        let drag = &self.config.drag;
        let target = project_target(MomentumInput {
            offset: self.model.offset(),
            velocity,
            min_velocity: drag.min_velocity,
            factor: drag.momentum_factor,
            item_height: self.config.item_height,
            len: self.items.len(),
            direction: None,
            reach: None,
        });
        let speed = velocity.abs() * 1000.0;
        let duration =
            drag_settle_duration(self.model.distance_to(target), speed, &self.config.snap);
        tracing::debug!(target_index = target, velocity, "drag released");
        self.settle(target, duration, now)
    }

    /// Start a snap to `target`, or land immediately if already there.
    fn settle(
        &mut self,
        target: usize,
        duration: wheelpick_core::Duration,
        now: Instant,
    ) -> Option<WheelChange<V>> {
        let snap = &self.config.snap;
        if target == self.model.current_index()
            && self.model.is_near_rest(target, snap.rest_tolerance)
        {
            self.model.set_rest(target);
            self.driver = Driver::Idle;
            return self.commit(target);
        }
        tracing::debug!(
            target_index = target,
            duration_ms = duration.as_millis() as u64,
            "snap started"
        );
        self.driver = Driver::Animating(SnapAnimation::new(
            self.model.offset(),
            self.model.rest_offset(target),
            target,
            duration,
            snap.commit_progress,
            now,
        ));
        None
    }

    /// Make `index` authoritative. `None` if its value already is.
    fn commit(&mut self, index: usize) -> Option<WheelChange<V>> {
        let item = self.items.get(index)?;
        if self.value.as_ref() == Some(&item.value) {
            return None;
        }
        let value = item.value.clone();
        self.value = Some(value.clone());
        tracing::debug!(index, "selection committed");
        Some(WheelChange { index, value })
    }

    fn drop_driver(&mut self) {
        if matches!(self.driver, Driver::Scrolling(_)) {
            self.accumulator.reset();
        }
        self.driver = Driver::Idle;
    }
}

fn position_of<V: PartialEq>(items: &[WheelItem<V>], value: &V) -> Option<usize> {
    items.iter().position(|item| &item.value == value)
}
