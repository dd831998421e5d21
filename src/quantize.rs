//! Snapping of normalized values to a finite number of slider positions.

use crate::constants::UNBOUNDED_RESOLUTION_RAW;

/// Number of discrete positions a slider can settle at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Resolution {
    #[default]
    Unbounded,
    /// `n` positions including both ends; `Positions(2)` allows only the endpoints.
    Positions(u32),
}

impl Resolution {
    /// Convert the raw integer form used by external slider descriptions.
    ///
    /// Returns `None` for non-positive values, which are configuration errors.
    pub fn from_raw(raw: i64) -> Option<Self> {
        if raw >= UNBOUNDED_RESOLUTION_RAW {
            Some(Self::Unbounded)
        } else if raw > 0 {
            u32::try_from(raw).ok().map(Self::Positions)
        } else {
            None
        }
    }

    /// Effective step count between the ends of the track.
    pub fn steps(&self) -> Option<u32> {
        match *self {
            Self::Unbounded => None,
            Self::Positions(n) => Some(n.saturating_sub(1)),
        }
    }
}

/// Snap `value` to the nearest of the resolution's positions.
///
/// Ties round half away from zero (`f32::round`). A single-position
/// resolution pins every value to the minimum end.
#[inline]
pub fn quantize(value: f32, resolution: Resolution) -> f32 {
    match resolution.steps() {
        None => value,
        Some(0) => 0.0,
        Some(steps) => {
            let steps = steps as f32;
            (value * steps).round() / steps
        }
    }
}
