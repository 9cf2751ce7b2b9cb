#![forbid(unsafe_code)]

//! Wheel items and the commit payload.

/// One selectable row.
///
/// Order is significant: the item at position `i` rests at offset `-i * h`.
/// Values are matched by equality, first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelItem<V> {
    /// Opaque identifier reported on commit.
    pub value: V,
    /// Display text.
    pub label: String,
    /// Rendered with disabled affordances. Selection is not blocked.
    #[cfg_attr(feature = "config", serde(default))]
    pub disabled: bool,
}

impl<V> WheelItem<V> {
    /// An enabled item.
    #[must_use]
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
        }
    }

    /// Set the disabled flag (builder pattern).
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl<V: ToString> From<V> for WheelItem<V> {
    fn from(value: V) -> Self {
        let label = value.to_string();
        Self::new(value, label)
    }
}

/// A selection commit: the item that became authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelChange<V> {
    /// Index of the committed item.
    pub index: usize,
    /// Its value.
    pub value: V,
}

/// Which driver currently owns the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WheelPhase {
    /// At rest.
    #[default]
    Idle,
    /// A pointer drag is live.
    Dragging,
    /// Wheel-device input is arriving; gesture end is pending.
    Scrolling,
    /// A snap animation is running.
    Animating,
}

/// When the host should call [`Wheel::tick`](super::Wheel::tick) next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wakeup {
    /// On the next display frame.
    NextFrame,
    /// Once this deadline has passed.
    At(wheelpick_core::Instant),
}
