#![forbid(unsafe_code)]

//! Cosmetic wheel parameters and per-item style resolution.
//!
//! Nothing here affects behavior: the wheel engine decides *which* item is
//! selected and how far each item is from the center, and [`WheelStyle`]
//! turns that into font, color, and opacity for a renderer.

use crate::color::Color;

/// Typography and colors for a wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WheelStyle {
    /// Font size of the selected item, in px.
    pub font_size: f32,
    /// Font size of every other item, in px.
    pub unselected_font_size: f32,
    /// Font weight of unselected items.
    pub font_weight: u16,
    /// Font weight of the selected item.
    pub selected_font_weight: u16,
    /// Unselected text color.
    pub text_color: Color,
    /// Selected text color.
    pub selected_text_color: Color,
    /// Selection band fill.
    pub highlight_color: Color,
    /// Selection band border.
    pub highlight_border_color: Color,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            unselected_font_size: 14.0,
            font_weight: 400,
            selected_font_weight: 600,
            text_color: Color::rgb(0x66, 0x66, 0x66),
            selected_text_color: Color::BLACK,
            highlight_color: Color::rgba(0, 0, 0, 0.05),
            highlight_border_color: Color::rgba(0, 0, 0, 0.1),
        }
    }
}

/// What the engine knows about one projected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemState {
    /// The item is the current selection.
    pub selected: bool,
    /// The item is flagged disabled. Cosmetic only.
    pub disabled: bool,
}

/// Resolved visual style for one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    /// Font size in px.
    pub font_size: f32,
    /// Font weight.
    pub font_weight: u16,
    /// Text color.
    pub color: Color,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Render with disabled affordances (strike-through, dimming).
    pub disabled: bool,
}

impl WheelStyle {
    /// Resolve the style of one item given its state and distance falloff.
    #[must_use]
    pub fn resolve(&self, state: ItemState, opacity: f32) -> ItemStyle {
        let selected = state.selected && !state.disabled;
        ItemStyle {
            font_size: if state.selected {
                self.font_size
            } else {
                self.unselected_font_size
            },
            font_weight: if state.selected {
                self.selected_font_weight
            } else {
                self.font_weight
            },
            color: if selected {
                self.selected_text_color
            } else {
                self.text_color
            },
            opacity: opacity.clamp(0.0, 1.0),
            disabled: state.disabled,
        }
    }

    /// Opaque end of the top/bottom edge fade gradients.
    ///
    /// Dark when the selected text is white (a dark theme), light otherwise.
    #[must_use]
    pub fn fade_overlay(&self) -> Color {
        if self.selected_text_color == Color::WHITE {
            Color::rgba(30, 30, 30, 0.95)
        } else {
            Color::rgba(245, 245, 245, 0.95)
        }
    }
}
