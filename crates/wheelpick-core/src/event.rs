#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! Hosts translate their native input (DOM `wheel`/`mousedown`/`touchmove`,
//! winit `MouseWheel`, terminal mouse reports) into these types before handing
//! them to a wheel. All events derive `Clone` and `PartialEq` for use in tests
//! and recorded traces.
//!
//! # Design Notes
//!
//! - Vertical coordinates are `f64` pixels relative to the top edge of the
//!   wheel viewport; they may be negative or exceed the viewport height while
//!   a pointer is captured.
//! - Wheel deltas follow the DOM convention: positive `delta_y` scrolls
//!   toward later items.
//! - Mouse and touch share one [`PointerInput`] shape; [`PointerKind`]
//!   distinguishes them so each modality can be switched off independently.

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A scroll-wheel or trackpad event.
    Wheel(WheelInput),

    /// A mouse or touch pointer event.
    Pointer(PointerInput),

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost.
    Focus(bool),
}

impl Event {
    /// The modality this event belongs to, if any.
    #[must_use]
    pub const fn modality(&self) -> Option<Modalities> {
        match self {
            Self::Wheel(_) => Some(Modalities::WHEEL),
            Self::Pointer(p) => Some(p.kind.modality()),
            Self::Focus(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Wheel device
// ---------------------------------------------------------------------------

/// Unit of a wheel delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaMode {
    /// Delta is already in pixels (trackpads, most browsers).
    #[default]
    Pixel,
    /// Delta is in lines.
    Line,
    /// Delta is in pages.
    Page,
}

/// A single wheel-device event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelInput {
    /// Vertical delta; positive scrolls toward later items.
    pub delta_y: f64,
    /// Unit of `delta_y`.
    pub mode: DeltaMode,
}

impl WheelInput {
    /// A pixel-mode wheel event.
    #[must_use]
    pub const fn pixels(delta_y: f64) -> Self {
        Self {
            delta_y,
            mode: DeltaMode::Pixel,
        }
    }

    /// A line-mode wheel event.
    #[must_use]
    pub const fn lines(delta_y: f64) -> Self {
        Self {
            delta_y,
            mode: DeltaMode::Line,
        }
    }

    /// Normalize the delta to pixels.
    ///
    /// Non-finite deltas normalize to zero.
    #[must_use]
    pub fn to_pixels(&self, line_px: f64, page_px: f64) -> f64 {
        let px = match self.mode {
            DeltaMode::Pixel => self.delta_y,
            DeltaMode::Line => self.delta_y * line_px,
            DeltaMode::Page => self.delta_y * page_px,
        };
        if px.is_finite() { px } else { 0.0 }
    }
}

// ---------------------------------------------------------------------------
// Pointer (mouse + touch)
// ---------------------------------------------------------------------------

/// Which physical device produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    /// Mouse or pen.
    Mouse,
    /// Finger on a touch surface.
    Touch,
}

impl PointerKind {
    /// The modality flag for this pointer kind.
    #[must_use]
    pub const fn modality(self) -> Modalities {
        match self {
            Self::Mouse => Modalities::MOUSE,
            Self::Touch => Modalities::TOUCH,
        }
    }
}

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerPhase {
    /// Button pressed / finger touched down.
    Down,
    /// Pointer moved (with or without capture).
    Move,
    /// Button released / finger lifted.
    Up,
    /// The platform aborted the interaction (e.g. `touchcancel`).
    Cancel,
}

/// A mouse or touch event in wheel-viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerInput {
    /// Device kind.
    pub kind: PointerKind,
    /// Interaction phase.
    pub phase: PointerPhase,
    /// Pointer identifier (touch identifier; 0 for the mouse).
    pub id: u32,
    /// Vertical position in pixels from the top of the wheel viewport.
    pub y: f64,
}

impl PointerInput {
    /// Create a pointer event.
    #[must_use]
    pub const fn new(kind: PointerKind, phase: PointerPhase, y: f64) -> Self {
        Self {
            kind,
            phase,
            id: 0,
            y,
        }
    }

    /// Set the pointer identifier (builder pattern).
    #[must_use]
    pub const fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    /// Mouse button pressed at `y`.
    #[must_use]
    pub const fn mouse_down(y: f64) -> Self {
        Self::new(PointerKind::Mouse, PointerPhase::Down, y)
    }

    /// Mouse moved to `y`.
    #[must_use]
    pub const fn mouse_move(y: f64) -> Self {
        Self::new(PointerKind::Mouse, PointerPhase::Move, y)
    }

    /// Mouse button released at `y`.
    #[must_use]
    pub const fn mouse_up(y: f64) -> Self {
        Self::new(PointerKind::Mouse, PointerPhase::Up, y)
    }

    /// Touch started at `y`.
    #[must_use]
    pub const fn touch_start(y: f64) -> Self {
        Self::new(PointerKind::Touch, PointerPhase::Down, y)
    }

    /// Touch moved to `y`.
    #[must_use]
    pub const fn touch_move(y: f64) -> Self {
        Self::new(PointerKind::Touch, PointerPhase::Move, y)
    }

    /// Touch ended at `y`.
    #[must_use]
    pub const fn touch_end(y: f64) -> Self {
        Self::new(PointerKind::Touch, PointerPhase::Up, y)
    }

    /// Whether this event comes from the same physical pointer as `other`.
    #[must_use]
    pub fn same_pointer(&self, kind: PointerKind, id: u32) -> bool {
        self.kind == kind && self.id == id
    }
}

impl From<WheelInput> for Event {
    fn from(input: WheelInput) -> Self {
        Self::Wheel(input)
    }
}

impl From<PointerInput> for Event {
    fn from(input: PointerInput) -> Self {
        Self::Pointer(input)
    }
}

// ---------------------------------------------------------------------------
// Modalities
// ---------------------------------------------------------------------------

bitflags! {
    /// Input modalities a wheel listens to.
    ///
    /// Each modality is handled independently; clearing a flag makes the
    /// wheel ignore that kind of event entirely.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Modalities: u8 {
        /// Scroll wheels and trackpads.
        const WHEEL = 0b0000_0001;
        /// Touch drag.
        const TOUCH = 0b0000_0010;
        /// Mouse drag.
        const MOUSE = 0b0000_0100;
    }
}

impl Default for Modalities {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_mode_scales_by_line_height() {
        let wheel = WheelInput::lines(3.0);
        assert_eq!(wheel.to_pixels(40.0, 200.0), 120.0);
    }

    #[test]
    fn page_mode_scales_by_page_height() {
        let wheel = WheelInput {
            delta_y: -1.0,
            mode: DeltaMode::Page,
        };
        assert_eq!(wheel.to_pixels(40.0, 200.0), -200.0);
    }

    #[test]
    fn non_finite_delta_is_zero() {
        assert_eq!(WheelInput::pixels(f64::NAN).to_pixels(40.0, 200.0), 0.0);
        assert_eq!(WheelInput::pixels(f64::INFINITY).to_pixels(40.0, 200.0), 0.0);
    }

    #[test]
    fn event_modality_mapping() {
        assert_eq!(
            Event::from(WheelInput::pixels(1.0)).modality(),
            Some(Modalities::WHEEL)
        );
        assert_eq!(
            Event::from(PointerInput::touch_start(0.0)).modality(),
            Some(Modalities::TOUCH)
        );
        assert_eq!(
            Event::from(PointerInput::mouse_down(0.0)).modality(),
            Some(Modalities::MOUSE)
        );
        assert_eq!(Event::Focus(false).modality(), None);
    }

    #[test]
    fn default_modalities_enable_everything() {
        let m = Modalities::default();
        assert!(m.contains(Modalities::WHEEL | Modalities::TOUCH | Modalities::MOUSE));
    }

    #[test]
    fn same_pointer_checks_kind_and_id() {
        let p = PointerInput::touch_move(10.0).with_id(7);
        assert!(p.same_pointer(PointerKind::Touch, 7));
        assert!(!p.same_pointer(PointerKind::Touch, 8));
        assert!(!p.same_pointer(PointerKind::Mouse, 7));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn pointer_event_json_round_trip() {
        let event = Event::from(PointerInput::mouse_move(42.5));
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
