#![forbid(unsafe_code)]

//! Tuning configuration for the wheel engine.
//!
//! Every empirically tuned constant of the wheel's feel (smoothing weights,
//! thresholds, momentum factors, durations, falloff) is a named field here
//! with a default equal to the tuned value, so `WheelConfig::default()`
//! reproduces the reference behavior exactly.
//!
//! # Loading
//!
//! ```toml
//! # wheel.toml
//! item_height = 48.0
//!
//! [wheel]
//! debounce_ms = 120
//!
//! [drag]
//! momentum_factor = 500.0
//! ```
//!
//! ```rust,ignore
//! let config = WheelConfig::from_toml_file("wheel.toml")?;
//! let config = WheelConfig::from_json_str(json)?;
//! ```
//!
//! Loaders (feature `config`) validate before returning; a config that
//! parses but fails [`WheelConfig::validate`] yields
//! [`WheelConfigError::Validation`].

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use thiserror::Error;
use wheelpick_core::Duration;
use wheelpick_core::event::Modalities;

// ---------------------------------------------------------------------------
// Top-level WheelConfig
// ---------------------------------------------------------------------------

/// Complete wheel configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct WheelConfig {
    /// Height of one item row in px. Default: 40.
    pub item_height: f64,
    /// Number of item rows in the viewport (odd, selection in the middle).
    /// Default: 5.
    pub visible_items: usize,
    /// Enabled input modalities. Default: all.
    pub modalities: Modalities,
    /// Wheel-device (scroll wheel / trackpad) handling.
    pub wheel: WheelDeviceConfig,
    /// Touch/mouse drag handling.
    pub drag: DragConfig,
    /// Snap animation timing and commit policy.
    pub snap: SnapConfig,
    /// Render projection falloff and culling.
    pub render: RenderConfig,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            item_height: 40.0,
            visible_items: 5,
            modalities: Modalities::all(),
            wheel: WheelDeviceConfig::default(),
            drag: DragConfig::default(),
            snap: SnapConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl WheelConfig {
    /// Set the item height (builder pattern).
    #[must_use]
    pub fn with_item_height(mut self, item_height: f64) -> Self {
        self.item_height = item_height;
        self
    }

    /// Set the enabled modalities (builder pattern).
    #[must_use]
    pub fn with_modalities(mut self, modalities: Modalities) -> Self {
        self.modalities = modalities;
        self
    }

    /// Viewport height in px (`visible_items * item_height`).
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.visible_items as f64 * self.item_height
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, WheelConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, WheelConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, WheelConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, WheelConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML string.
    #[cfg(feature = "config")]
    pub fn to_toml_string(&self) -> Result<String, WheelConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Return `self` if valid, otherwise the collected validation errors.
    pub fn validated(self) -> Result<Self, WheelConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(WheelConfigError::Validation(errors))
        }
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(self.item_height.is_finite() && self.item_height > 0.0) {
            errors.push(format!(
                "item_height must be finite and > 0, got {}",
                self.item_height
            ));
        }
        if self.visible_items == 0 || self.visible_items % 2 == 0 {
            errors.push(format!(
                "visible_items must be odd and > 0, got {}",
                self.visible_items
            ));
        }

        let w = &self.wheel;
        if !(0.0..=1.0).contains(&w.smoothing) {
            errors.push(format!(
                "wheel.smoothing must be in [0, 1], got {}",
                w.smoothing
            ));
        }
        if w.fine_divisor <= 0.0 || w.coarse_divisor <= 0.0 {
            errors.push("wheel.fine_divisor and wheel.coarse_divisor must be > 0".into());
        }
        if w.fine_threshold < 0.0 || w.coarse_threshold < 0.0 {
            errors.push("wheel thresholds must be >= 0".into());
        }
        if w.residual < 0.0 {
            errors.push(format!("wheel.residual must be >= 0, got {}", w.residual));
        }
        if w.debounce_ms == 0 {
            errors.push("wheel.debounce_ms must be > 0".into());
        }
        if w.momentum_factor < 0.0 {
            errors.push("wheel.momentum_factor must be >= 0".into());
        }
        if !(0.0..=1.0).contains(&w.overscroll_resistance) {
            errors.push(format!(
                "wheel.overscroll_resistance must be in [0, 1], got {}",
                w.overscroll_resistance
            ));
        }
        if w.max_overscroll_items < 0.0 {
            errors.push("wheel.max_overscroll_items must be >= 0".into());
        }

        let d = &self.drag;
        if !(0.0..=1.0).contains(&d.elastic_resistance) {
            errors.push(format!(
                "drag.elastic_resistance must be in [0, 1], got {}",
                d.elastic_resistance
            ));
        }
        if d.momentum_factor < 0.0 {
            errors.push("drag.momentum_factor must be >= 0".into());
        }
        if d.tap_slop < 0.0 {
            errors.push("drag.tap_slop must be >= 0".into());
        }

        let s = &self.snap;
        if !(0.0..1.0).contains(&s.commit_progress) {
            errors.push(format!(
                "snap.commit_progress must be in [0, 1), got {}",
                s.commit_progress
            ));
        }
        if s.direct_max_ms == 0 || s.drag_max_ms == 0 {
            errors.push("snap max durations must be > 0".into());
        }
        if s.drag_base_ms > s.drag_max_ms {
            errors.push(format!(
                "snap.drag_base_ms ({}) must not exceed snap.drag_max_ms ({})",
                s.drag_base_ms, s.drag_max_ms
            ));
        }

        let r = &self.render;
        if !(0.0..=1.0).contains(&r.min_opacity) {
            errors.push(format!(
                "render.min_opacity must be in [0, 1], got {}",
                r.min_opacity
            ));
        }
        if r.cull_above_items < 0.0 || r.cull_below_items < 0.0 {
            errors.push("render cull margins must be >= 0".into());
        }

        errors
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Wheel-device (scroll wheel / trackpad) parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct WheelDeviceConfig {
    /// Deltas with magnitude below this are fine-grained (trackpad-like).
    /// Default: 10.
    pub fine_delta_limit: f64,
    /// Accumulated delta needed before fine input moves the wheel. Default: 5.
    pub fine_threshold: f64,
    /// Divisor converting accumulated fine delta to offset. Default: 5.
    pub fine_divisor: f64,
    /// Accumulated delta needed before coarse input moves the wheel. Default: 2.
    pub coarse_threshold: f64,
    /// Divisor converting accumulated coarse delta to offset. Default: 8.
    pub coarse_divisor: f64,
    /// Residual kept in the accumulator (in the scroll direction) after a
    /// move. Default: 5.
    pub residual: f64,
    /// Weight of the previous velocity in the moving average. Default: 0.7.
    pub smoothing: f64,
    /// Minimum |delta| for an event to update the dominant direction.
    /// Default: 1.
    pub direction_min_delta: f64,
    /// Quiet period after the last wheel event before the gesture ends.
    /// Default: 100ms.
    pub debounce_ms: u64,
    /// Multiplier projecting velocity (px/ms) to distance. Default: 800.
    pub momentum_factor: f64,
    /// Smoothed velocity (px/ms) below which no momentum is applied.
    /// Default: 0.05.
    pub min_velocity: f64,
    /// Fraction of each step that is absorbed while past either end.
    /// Default: 0.5.
    pub overscroll_resistance: f64,
    /// Maximum overscroll past either end, in items. Default: 1.
    pub max_overscroll_items: f64,
}

impl Default for WheelDeviceConfig {
    fn default() -> Self {
        Self {
            fine_delta_limit: 10.0,
            fine_threshold: 5.0,
            fine_divisor: 5.0,
            coarse_threshold: 2.0,
            coarse_divisor: 8.0,
            residual: 5.0,
            smoothing: 0.7,
            direction_min_delta: 1.0,
            debounce_ms: 100,
            momentum_factor: 800.0,
            min_velocity: 0.05,
            overscroll_resistance: 0.5,
            max_overscroll_items: 1.0,
        }
    }
}

impl WheelDeviceConfig {
    /// The debounce quiet period.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Touch/mouse drag parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct DragConfig {
    /// Multiplier projecting release velocity (px/ms) to distance.
    /// Default: 600.
    pub momentum_factor: f64,
    /// Release velocity (px/ms) below which no momentum is applied.
    /// Default: 0.01.
    pub min_velocity: f64,
    /// Fraction of overshoot past the ends that is absorbed. Default: 0.5.
    pub elastic_resistance: f64,
    /// Maximum pointer travel (px) for a down/up pair to count as a tap.
    /// Default: 4.
    pub tap_slop: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            momentum_factor: 600.0,
            min_velocity: 0.01,
            elastic_resistance: 0.5,
            tap_slop: 4.0,
        }
    }
}

/// Snap animation timing and commit policy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SnapConfig {
    /// Linear progress after which the commit may fire. Default: 0.3.
    pub commit_progress: f32,
    /// Base duration for wheel/click settles. Default: 150ms.
    pub direct_base_ms: u64,
    /// Extra duration per item of distance for wheel/click. Default: 30ms.
    pub direct_per_item_ms: u64,
    /// Cap for wheel/click settles. Default: 300ms.
    pub direct_max_ms: u64,
    /// Base (and minimum) duration for drag settles. Default: 300ms.
    pub drag_base_ms: u64,
    /// Extra duration per item of distance for drag settles. Default: 50ms.
    pub drag_per_item_ms: u64,
    /// Cap for drag settles. Default: 500ms.
    pub drag_max_ms: u64,
    /// Milliseconds removed per px/s of release speed. Default: 0.2.
    pub drag_speed_discount: f64,
    /// Distance (px) from rest under which no animation is needed.
    /// Default: 2.
    pub rest_tolerance: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            commit_progress: 0.3,
            direct_base_ms: 150,
            direct_per_item_ms: 30,
            direct_max_ms: 300,
            drag_base_ms: 300,
            drag_per_item_ms: 50,
            drag_max_ms: 500,
            drag_speed_discount: 0.2,
            rest_tolerance: 2.0,
        }
    }
}

/// Render projection parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct RenderConfig {
    /// Items whose top is more than this many rows above the list origin
    /// are culled. Default: 3.
    pub cull_above_items: f64,
    /// Items whose top is more than this many rows below the list origin
    /// are culled. Default: 8.
    pub cull_below_items: f64,
    /// Opacity lost per item of distance from the selection. Default: 0.2.
    pub opacity_step: f32,
    /// Opacity floor. Default: 0.3.
    pub min_opacity: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cull_above_items: 3.0,
            cull_below_items: 8.0,
            opacity_step: 0.2,
            min_opacity: 0.3,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from loading or validating a [`WheelConfig`].
#[derive(Debug, Error)]
pub enum WheelConfigError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// TOML serialization error.
    #[cfg(feature = "config")]
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Validation errors.
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
