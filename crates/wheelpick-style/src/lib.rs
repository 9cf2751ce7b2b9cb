#![forbid(unsafe_code)]

//! Style types for wheelpick.
//!
//! # Role in wheelpick
//! `wheelpick-style` is the shared vocabulary for colors and wheel styling.
//! The engine in `wheelpick-widgets` only reports selection and distance;
//! this crate decides what that looks like, without dragging in any
//! behavior.
//!
//! # This crate provides
//! - [`Color`] with CSS-compatible parsing and formatting.
//! - [`WheelStyle`] for the cosmetic wheel parameters and per-item resolution.
//! - [`WheelTheme`] light/dark palettes.

/// Color type and CSS parsing.
pub mod color;
/// Light and dark palettes.
pub mod theme;
/// Wheel typography, colors, and item style resolution.
pub mod wheel_style;

pub use color::{Color, ColorParseError};
pub use theme::{ThemeMode, WheelTheme};
pub use wheel_style::{ItemState, ItemStyle, WheelStyle};
