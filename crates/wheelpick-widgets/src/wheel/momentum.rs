#![forbid(unsafe_code)]

//! Momentum projection: where a released gesture would come to rest.
//!
//! [`project_target`] is a pure function of the release state. It predicts
//! the offset the list would coast to (`offset + velocity * factor`), rounds
//! to the nearest item, and clamps into the list.
//!
//! Wheel-device gestures carry a dominant [`ScrollDirection`]. If the
//! projection points against it (a stray reverse sample at the end of a
//! burst), momentum is discarded and the nearest item wins. They also carry
//! a `reach`: momentum may take the wheel past the nearest item by at most
//! as many rows as the gesture itself scrolled.

/// Direction of travel in index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Toward later items (decreasing offset).
    Forward,
    /// Toward earlier items (increasing offset).
    Backward,
}

impl ScrollDirection {
    /// Direction of a wheel delta (positive delta scrolls forward).
    #[must_use]
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::Forward)
        } else if delta < 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }

    /// Whether moving from index `from` to `to` contradicts this direction.
    #[must_use]
    pub fn contradicts(self, from: i64, to: i64) -> bool {
        match self {
            Self::Forward => to < from,
            Self::Backward => to > from,
        }
    }
}

/// Release state fed to [`project_target`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumInput {
    /// Offset at release, in px.
    pub offset: f64,
    /// Offset velocity at release, in px/ms.
    pub velocity: f64,
    /// Velocities with magnitude below this are ignored.
    pub min_velocity: f64,
    /// Projection multiplier (ms).
    pub factor: f64,
    /// Row height in px.
    pub item_height: f64,
    /// Number of items.
    pub len: usize,
    /// Dominant direction of the gesture, if it tracks one.
    pub direction: Option<ScrollDirection>,
    /// Most rows momentum may add beyond the nearest item. `None` is
    /// unbounded.
    pub reach: Option<usize>,
}

/// Predict the resting index for a released gesture.
///
/// The result is always in `[0, len - 1]` (0 for an empty list).
#[must_use]
pub fn project_target(input: MomentumInput) -> usize {
    if input.len == 0 {
        return 0;
    }
    let index_at = |offset: f64| -> i64 {
        let raw = (-offset / input.item_height).round();
        if raw.is_finite() { raw as i64 } else { 0 }
    };

    let nearest = index_at(input.offset);
    let target = if !input.velocity.is_finite() || input.velocity.abs() < input.min_velocity {
        nearest
    } else {
        let predicted = input.offset + input.velocity * input.factor;
        let projected = index_at(predicted);
        let projected = match input.direction {
            Some(direction) if direction.contradicts(nearest, projected) => nearest,
            _ => projected,
        };
        match input.reach {
            Some(reach) => {
                let reach = i64::try_from(reach).unwrap_or(i64::MAX);
                projected.clamp(nearest.saturating_sub(reach), nearest.saturating_add(reach))
            }
            None => projected,
        }
    };

    let last = i64::try_from(input.len - 1).unwrap_or(i64::MAX);
    target.clamp(0, last) as usize
}
