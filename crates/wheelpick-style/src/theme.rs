#![forbid(unsafe_code)]

//! Light and dark picker themes.
//!
//! A [`WheelTheme`] is the palette a picker frame applies to its wheels:
//! the wheel colors themselves plus the surrounding card background and the
//! caption label color.

use crate::color::Color;
use crate::wheel_style::WheelStyle;

/// Built-in theme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ThemeMode {
    /// Dark text on a light card.
    #[default]
    Light,
    /// Light text on a dark card.
    Dark,
}

/// Palette for a picker frame and its wheels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelTheme {
    /// Card background.
    pub background: Color,
    /// Unselected item text.
    pub text: Color,
    /// Selected item text.
    pub selected_text: Color,
    /// Selection band fill.
    pub highlight: Color,
    /// Selection band top/bottom border.
    pub highlight_border: Color,
    /// Caption label above the wheel.
    pub label: Color,
}

impl WheelTheme {
    /// The light palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            background: Color::WHITE,
            text: Color::rgb(0x66, 0x66, 0x66),
            selected_text: Color::BLACK,
            highlight: Color::rgba(0, 0, 0, 0.05),
            highlight_border: Color::rgba(0, 0, 0, 0.1),
            label: Color::rgb(0x99, 0x99, 0x99),
        }
    }

    /// The dark palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            background: Color::rgb(0x1e, 0x1e, 0x1e),
            text: Color::rgb(0xa0, 0xa0, 0xa0),
            selected_text: Color::WHITE,
            highlight: Color::rgba(255, 255, 255, 0.1),
            highlight_border: Color::rgba(255, 255, 255, 0.2),
            label: Color::rgb(0x77, 0x77, 0x77),
        }
    }

    /// Palette for a mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Apply the palette's colors to a wheel style, keeping its typography.
    #[must_use]
    pub fn apply(&self, style: WheelStyle) -> WheelStyle {
        WheelStyle {
            text_color: self.text,
            selected_text_color: self.selected_text,
            highlight_color: self.highlight,
            highlight_border_color: self.highlight_border,
            ..style
        }
    }
}

impl Default for WheelTheme {
    fn default() -> Self {
        Self::light()
    }
}
