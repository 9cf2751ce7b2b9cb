#![forbid(unsafe_code)]

//! Position model: the continuous offset and the discrete selection.
//!
//! The list is laid out vertically at a uniform row height `h`. Item `i`
//! sits at rest when `offset == -i * h`, so offsets are non-positive for
//! every rest position and the valid rest range is
//! `[-(len - 1) * h, 0]`.
//!
//! # Invariants
//!
//! 1. `current_index < len` whenever `len > 0`.
//! 2. [`PositionModel::set_rest`] leaves the offset exactly on a rest
//!    position (no floating-point drift).
//! 3. An empty model has offset 0 and bounds `(0, 0)`.

/// Offset and selection for a single wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionModel {
    item_height: f64,
    len: usize,
    offset: f64,
    current_index: usize,
}

impl PositionModel {
    /// Create a model at rest on `index` (clamped).
    #[must_use]
    pub fn new(item_height: f64, len: usize, index: usize) -> Self {
        let mut model = Self {
            item_height,
            len,
            offset: 0.0,
            current_index: 0,
        };
        model.set_rest(index);
        model
    }

    /// Row height in px.
    #[inline]
    #[must_use]
    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    /// Number of items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current offset in px.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Currently highlighted index (0 when empty).
    #[inline]
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Move the offset without touching the selection.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = if offset.is_finite() { offset } else { 0.0 };
    }

    /// Highlight `index` (clamped) without moving the offset.
    pub fn set_current_index(&mut self, index: usize) {
        self.current_index = self.clamp_position(index);
    }

    /// Change the item count, keeping the selection in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.current_index = self.clamp_position(self.current_index);
    }

    /// Rest offset of `index`: `-index * h`.
    #[must_use]
    pub fn rest_offset(&self, index: usize) -> f64 {
        -(index as f64) * self.item_height
    }

    /// `(min, max)` rest offsets: `(-(len - 1) * h, 0)`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        match self.len {
            0 => (0.0, 0.0),
            n => (self.rest_offset(n - 1), 0.0),
        }
    }

    /// Clamp a possibly out-of-range index into `[0, len - 1]`.
    #[must_use]
    pub fn clamp_index(&self, index: i64) -> usize {
        match self.len {
            0 => 0,
            n => index.clamp(0, n as i64 - 1) as usize,
        }
    }

    /// Clamp a list position into `[0, len - 1]` without leaving `usize`.
    #[must_use]
    pub fn clamp_position(&self, index: usize) -> usize {
        index.min(self.len.saturating_sub(1))
    }

    /// Unclamped index nearest to an arbitrary offset: `round(-offset / h)`.
    #[must_use]
    pub fn index_at(&self, offset: f64) -> i64 {
        let raw = (-offset / self.item_height).round();
        if raw.is_finite() { raw as i64 } else { 0 }
    }

    /// Unclamped index nearest to the current offset.
    #[must_use]
    pub fn nearest_raw_index(&self) -> i64 {
        self.index_at(self.offset)
    }

    /// Clamped index nearest to the current offset.
    #[must_use]
    pub fn nearest_index(&self) -> usize {
        self.clamp_index(self.nearest_raw_index())
    }

    /// Whether the offset lies within `tolerance` px of `index`'s rest.
    #[must_use]
    pub fn is_near_rest(&self, index: usize, tolerance: f64) -> bool {
        (self.offset - self.rest_offset(index)).abs() < tolerance
    }

    /// Elastic resistance past the bounds.
    ///
    /// Inside the bounds the tentative offset is returned unchanged. Past an
    /// end, only `1 - resistance` of the overshoot is kept.
    #[must_use]
    pub fn rubber_band(&self, tentative: f64, resistance: f64) -> f64 {
        let (min, max) = self.bounds();
        let keep = 1.0 - resistance;
        if tentative > max {
            max + (tentative - max) * keep
        } else if tentative < min {
            min + (tentative - min) * keep
        } else {
            tentative
        }
    }

    /// Clamp an offset to the bounds extended by `margin` px on either end.
    #[must_use]
    pub fn clamp_overscroll(&self, offset: f64, margin: f64) -> f64 {
        let (min, max) = self.bounds();
        offset.clamp(min - margin, max + margin)
    }

    /// Put the model at rest on `index` (clamped).
    pub fn set_rest(&mut self, index: usize) {
        let index = self.clamp_position(index);
        self.current_index = index;
        self.offset = self.rest_offset(index);
    }

    /// Highlight the index nearest the current offset.
    ///
    /// Returns `true` if the highlighted index changed.
    pub fn sync_index(&mut self) -> bool {
        let nearest = self.nearest_index();
        let changed = nearest != self.current_index;
        self.current_index = nearest;
        changed
    }

    /// Item distance between the highlighted index and `index`.
    #[must_use]
    pub fn distance_to(&self, index: usize) -> usize {
        self.current_index.abs_diff(index)
    }
}
