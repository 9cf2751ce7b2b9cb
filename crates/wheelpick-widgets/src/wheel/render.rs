#![forbid(unsafe_code)]

//! Render projection: what each item looks like this frame.
//!
//! Pure functions of the items, the position model, and the layout. The
//! list origin is shifted down by `visible_items / 2` rows so the item at
//! rest sits inside the fixed highlight band in the middle of the viewport.
//!
//! Items whose list-space top falls outside
//! `[-cull_above_items * h, cull_below_items * h]` are culled. The margin
//! is deliberately generous and asymmetric; it bounds per-frame work on
//! long lists without exact viewport math.

use wheelpick_style::{ItemState, ItemStyle, WheelStyle};

use super::config::{RenderConfig, WheelConfig};
use super::item::WheelItem;
use super::position::PositionModel;

/// Fixed geometry of a wheel viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    /// Row height in px.
    pub item_height: f64,
    /// Viewport height in px.
    pub viewport_height: f64,
    /// Top of the highlight band, in viewport px.
    pub highlight_top: f64,
    /// Height of each top/bottom edge fade, in px.
    pub fade_height: f64,
    /// Downward shift of the list origin that centers the selection.
    pub content_shift: f64,
}

impl WheelLayout {
    /// Layout for a configuration.
    #[must_use]
    pub fn new(config: &WheelConfig) -> Self {
        let h = config.item_height;
        let center_row = (config.visible_items / 2) as f64;
        Self {
            item_height: h,
            viewport_height: config.viewport_height(),
            highlight_top: center_row * h,
            fade_height: center_row * h,
            content_shift: center_row * h,
        }
    }

    /// Bottom of the highlight band, in viewport px.
    #[must_use]
    pub fn highlight_bottom(&self) -> f64 {
        self.highlight_top + self.item_height
    }
}

/// One visible item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemView<'a> {
    /// Index in the item list.
    pub index: usize,
    /// Display text.
    pub label: &'a str,
    /// List-space top: `offset + index * h`.
    pub top: f64,
    /// Viewport-space top (list top plus the centering shift).
    pub y: f64,
    /// Distance from the highlighted index, in items.
    pub distance: usize,
    /// Opacity falloff in `[min_opacity, 1]`.
    pub opacity: f32,
    /// This is the highlighted item.
    pub selected: bool,
    /// The item is flagged disabled.
    pub disabled: bool,
}

impl ItemView<'_> {
    /// State for style resolution.
    #[must_use]
    pub fn state(&self) -> ItemState {
        ItemState {
            selected: self.selected,
            disabled: self.disabled,
        }
    }

    /// Resolve font, color, and opacity under `style`.
    #[must_use]
    pub fn style(&self, style: &WheelStyle) -> ItemStyle {
        style.resolve(self.state(), self.opacity)
    }
}

/// Opacity for an item `distance` rows from the selection.
#[must_use]
pub fn falloff(distance: usize, config: &RenderConfig) -> f32 {
    (1.0 - config.opacity_step * distance as f32).max(config.min_opacity)
}

/// Project every non-culled item.
#[must_use]
pub fn project_items<'a, V>(
    items: &'a [WheelItem<V>],
    model: &PositionModel,
    layout: &WheelLayout,
    config: &RenderConfig,
) -> Vec<ItemView<'a>> {
    let h = model.item_height();
    let offset = model.offset();
    let current = model.current_index();
    let min_top = -config.cull_above_items * h;
    let max_top = config.cull_below_items * h;

    // Skip straight to the first row that can pass the top cull.
    let first = ((min_top - offset) / h).ceil().max(0.0);
    let first = if first.is_finite() {
        (first as usize).min(items.len())
    } else {
        0
    };

    items[first..]
        .iter()
        .enumerate()
        .map(|(i, item)| (first + i, item))
        .map(|(index, item)| (index, item, offset + index as f64 * h))
        .take_while(|&(_, _, top)| top <= max_top)
        .filter(|&(_, _, top)| top >= min_top)
        .map(|(index, item, top)| {
            let distance = index.abs_diff(current);
            ItemView {
                index,
                label: &item.label,
                top,
                y: top + layout.content_shift,
                distance,
                opacity: falloff(distance, config),
                selected: index == current,
                disabled: item.disabled,
            }
        })
        .collect()
}

/// Index of the item under viewport coordinate `y`, if any.
#[must_use]
pub fn hit_test(y: f64, model: &PositionModel, layout: &WheelLayout) -> Option<usize> {
    if model.is_empty() || !y.is_finite() {
        return None;
    }
    let list_y = y - layout.content_shift - model.offset();
    let row = (list_y / model.item_height()).floor();
    if row < 0.0 || row >= model.len() as f64 {
        return None;
    }
    Some(row as usize)
}
