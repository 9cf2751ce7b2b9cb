#![forbid(unsafe_code)]

//! wheelpick public facade crate.
//!
//! This crate provides the stable surface area for hosts embedding a kinetic
//! wheel picker. It re-exports the common types from the internal crates and
//! offers a lightweight prelude.
//!
//! ```
//! use wheelpick::prelude::*;
//!
//! let items = (1..=12).map(WheelItem::from).collect();
//! let mut wheel = Wheel::new(items, Some(&6));
//! assert_eq!(wheel.current_index(), Some(5));
//!
//! let now = Instant::now();
//! assert!(wheel.select_index(8, now).is_none());
//! assert_eq!(wheel.phase(), WheelPhase::Animating);
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use wheelpick_core::event::{
    DeltaMode, Event, Modalities, PointerInput, PointerKind, PointerPhase, WheelInput,
};
pub use wheelpick_core::{Duration, Instant};

// --- Style re-exports ------------------------------------------------------

pub use wheelpick_style::{
    Color, ColorParseError, ItemState, ItemStyle, ThemeMode, WheelStyle, WheelTheme,
};

// --- Widget re-exports -----------------------------------------------------

pub use wheelpick_widgets::wheel::config::WheelConfigError;
pub use wheelpick_widgets::wheel::render::{ItemView, WheelLayout};
pub use wheelpick_widgets::wheel::{Wakeup, Wheel, WheelChange, WheelConfig, WheelItem, WheelPhase};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for wheelpick hosts.
#[derive(Debug)]
pub enum Error {
    /// Wheel configuration failed to load or validate.
    Config(WheelConfigError),
    /// A style color string did not parse.
    Color(ColorParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Color(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Color(err) => Some(err),
        }
    }
}

impl From<WheelConfigError> for Error {
    fn from(err: WheelConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ColorParseError> for Error {
    fn from(err: ColorParseError) -> Self {
        Self::Color(err)
    }
}

/// Standard result type for wheelpick APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Color, Duration, Error, Event, Instant, ItemView, Modalities, PointerInput, Result, ThemeMode,
        Wakeup, Wheel, WheelChange, WheelConfig, WheelInput, WheelItem, WheelPhase, WheelStyle,
        WheelTheme,
    };

    pub use crate::{core, style, widgets};
}

pub use wheelpick_core as core;
pub use wheelpick_style as style;
pub use wheelpick_widgets as widgets;
