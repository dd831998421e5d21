//! Frame-driven transition of a slider value toward a target.
//!
//! A [`Transition`] is plain state advanced by [`Transition::advance`] once per
//! frame. Cancelling a transition means dropping it.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    target: f32,
    initial_distance: f32,
    remaining: f32,
    direction: f32,
    duration: Duration,
}

impl Transition {
    /// Start moving from `current` to `target` at a constant rate so that the
    /// whole distance is covered in `duration`.
    ///
    /// A zero duration produces a transition that is already finished.
    pub fn new(current: f32, target: f32, duration: Duration) -> Self {
        let initial_distance = (current - target).abs();
        let direction = if current > target { -1.0 } else { 1.0 };
        let remaining = if duration.is_zero() { 0.0 } else { initial_distance };
        Self {
            target,
            initial_distance,
            remaining,
            direction,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Interpolated value at the current remaining distance.
    #[inline]
    pub fn value(&self) -> f32 {
        self.target - self.remaining * self.direction
    }

    /// Consume `dt` of frame time and return the new interpolated value.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        if !self.is_finished() {
            let fraction = dt.as_secs_f32() / self.duration.as_secs_f32();
            self.remaining = (self.remaining - self.initial_distance * fraction).max(0.0);
        }
        self.value()
    }
}
