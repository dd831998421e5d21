//! Drag session helper: keeps the handle from jumping to the ray at drag start.
//!
//! ## Usage
//!
//! 1) Begin a session with [`DragSession::begin`], passing the projection of the
//!    starting pose and the value vector of the slider's current value.
//! 2) On each continued pose, feed the new projection to [`DragSession::target`]
//!    to get the offset-corrected value vector to apply.
//!
//! If the starting pose was degenerate the session anchors itself on the first
//! usable projection instead, so continuity holds either way.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    offset: Option<Vec3>,
    start_value: f32,
}

impl DragSession {
    pub fn begin(projected: Option<Vec3>, current_value_vector: Vec3, start_value: f32) -> Self {
        Self {
            offset: projected.map(|p| current_value_vector - p),
            start_value,
        }
    }

    /// Offset between the value vector and the ray projection, once anchored.
    pub fn offset(&self) -> Option<Vec3> {
        self.offset
    }

    pub fn start_value(&self) -> f32 {
        self.start_value
    }

    /// Value vector intended by `projected`, corrected by the session offset.
    ///
    /// `current_value_vector` is only used to anchor a session whose start
    /// pose could not be projected.
    pub fn target(&mut self, projected: Vec3, current_value_vector: Vec3) -> Vec3 {
        let offset = *self
            .offset
            .get_or_insert_with(|| current_value_vector - projected);
        projected + offset
    }
}
