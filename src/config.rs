//! Static construction data for a slider, as produced by external
//! interaction descriptions.

use glam::Vec3;
use std::time::Duration;

use crate::axis::Track;
use crate::constants::DEFAULT_TRANSITION;
use crate::error::{Result, SliderError};
use crate::quantize::Resolution;

#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    pub name: String,
    /// Track start, as an offset from the handle's rest position in parent space.
    pub min_position: Vec3,
    /// Track end, as an offset from the handle's rest position in parent space.
    pub max_position: Vec3,
    pub resolution: Resolution,
    pub transition: Duration,
    pub initial_value: f32,
    pub fixed: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            name: String::from("slider"),
            min_position: Vec3::ZERO,
            max_position: Vec3::X,
            resolution: Resolution::Unbounded,
            transition: DEFAULT_TRANSITION,
            initial_value: 0.0,
            fixed: false,
        }
    }
}

impl SliderConfig {
    pub fn new(name: impl Into<String>, min_position: Vec3, max_position: Vec3) -> Self {
        Self {
            name: name.into(),
            min_position,
            max_position,
            ..Self::default()
        }
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_transition_ms(mut self, ms: u64) -> Self {
        self.transition = Duration::from_millis(ms);
        self
    }

    pub fn with_initial_value(mut self, value: f32) -> Self {
        self.initial_value = value;
        self
    }

    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Check the configuration and build the parent-local track, with the
    /// endpoints offset by the handle's rest position.
    pub fn validate(&self, rest_local_position: Vec3) -> Result<Track> {
        if let Resolution::Positions(0) = self.resolution {
            return Err(SliderError::InvalidResolution {
                name: self.name.clone(),
                resolution: 0,
            });
        }
        if !rest_local_position.is_finite() {
            return Err(SliderError::NonFiniteInput {
                name: self.name.clone(),
            });
        }
        if !(0.0..=1.0).contains(&self.initial_value) {
            return Err(SliderError::ValueOutOfRange {
                name: self.name.clone(),
                value: self.initial_value,
            });
        }
        let min = rest_local_position + self.min_position;
        let max = rest_local_position + self.max_position;
        if !min.is_finite() || !max.is_finite() {
            return Err(SliderError::NonFiniteInput {
                name: self.name.clone(),
            });
        }
        Track::new(min, max).ok_or_else(|| SliderError::ZeroLengthTrack {
            name: self.name.clone(),
        })
    }
}
