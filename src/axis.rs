//! The fixed 1-D track a slider handle moves along.
//!
//! Endpoints are stored in the parent's local space. World-space quantities
//! are derived from the parent-to-world transform on every use because the
//! mounting parent may move between frames.

use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    min_position: Vec3,
    max_position: Vec3,
    direction: Vec3,
}

impl Track {
    /// Returns `None` when the endpoints coincide or are not finite.
    pub fn new(min_position: Vec3, max_position: Vec3) -> Option<Self> {
        if !min_position.is_finite() || !max_position.is_finite() {
            return None;
        }
        let direction = max_position - min_position;
        if direction == Vec3::ZERO {
            return None;
        }
        Some(Self {
            min_position,
            max_position,
            direction,
        })
    }

    pub fn min_position(&self) -> Vec3 {
        self.min_position
    }

    pub fn max_position(&self) -> Vec3 {
        self.max_position
    }

    /// `max_position - min_position` in parent-local space.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Track direction in world space (no translation applied).
    #[inline]
    pub fn world_direction(&self, parent: &Mat4) -> Vec3 {
        parent.transform_vector3(self.direction)
    }

    #[inline]
    pub fn world_min_position(&self, parent: &Mat4) -> Vec3 {
        parent.transform_point3(self.min_position)
    }

    #[inline]
    pub fn world_max_position(&self, parent: &Mat4) -> Vec3 {
        parent.transform_point3(self.max_position)
    }
}
