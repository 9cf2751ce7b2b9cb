#![forbid(unsafe_code)]

//! Wheel picker engine for wheelpick.
//!
//! # Role in wheelpick
//! `wheelpick-widgets` holds the interaction and animation engine of the
//! kinetic wheel picker. It consumes canonical events from `wheelpick-core`
//! and reports render projections that `wheelpick-style` can dress.
//!
//! # This crate provides
//! - [`wheel::Wheel`], the engine: position model, input normalization,
//!   momentum projection, snap animation, and render projection.
//! - [`wheel::WheelConfig`], every tuned constant as named configuration
//!   (TOML/JSON loading behind the `config` feature).
//! - `testing::FrameDriver` (feature `test-helpers`), a simulated frame
//!   clock for scenario tests.

pub mod wheel;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use wheel::{Wheel, WheelChange, WheelConfig, WheelItem, WheelPhase};
