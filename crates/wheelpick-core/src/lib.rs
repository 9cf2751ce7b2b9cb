#![forbid(unsafe_code)]

//! Core: input events, animation primitives, timers, and velocity tracking.
//!
//! # Role in wheelpick
//! `wheelpick-core` is the platform-neutral layer. It owns the normalized
//! input event types that every host (DOM, winit, terminal) maps its native
//! events onto, plus the small time-driven building blocks the wheel engine
//! composes: easing curves, tweens, debounce deadlines, and velocity
//! estimators.
//!
//! # Primary responsibilities
//! - **Event**: canonical wheel-device, pointer (mouse/touch), and focus input.
//! - **Modalities**: per-modality enable flags so hosts can drop inputs they
//!   do not have (a touch-only target has no mouse).
//! - **Animation**: the [`animation::Animation`] trait, easing functions, and
//!   [`animation::Tween`].
//! - **Debounce**: cancelable delayed completion for synthesizing gesture end.
//! - **Velocity**: last-sample and exponentially smoothed estimators.
//!
//! # How it fits in the system
//! `wheelpick-widgets` consumes these types and never touches a platform
//! clock or event loop directly. Time always flows in as an explicit
//! [`Instant`](web_time::Instant) argument, so every behavior is deterministic
//! under test.

pub mod animation;
pub mod event;
pub mod logging;
pub mod timer;
pub mod velocity;

pub use web_time::{Duration, Instant};
