//! A single slider instance: normalized value, handle position and the
//! activity slot shared by dragging and animation.

use glam::{Mat4, Vec3};
use std::time::Duration;

use crate::animator::Transition;
use crate::axis::Track;
use crate::config::SliderConfig;
use crate::drag::DragSession;
use crate::error::{Result, SliderError};
use crate::event::{Attribute, AttributeValue, SliderEvent};
use crate::projector::{project_pose_onto_axis, Pose};
use crate::quantize::{quantize, Resolution};

/// What currently owns the slider's value. At most one drag or one animation
/// is live at a time; starting either replaces whatever was there.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Activity {
    Idle,
    Dragging(DragSession),
    Animating(Transition),
}

#[derive(Clone, Debug)]
pub struct Slider {
    name: String,
    track: Track,
    resolution: Resolution,
    transition: Duration,
    parent: Mat4,
    value: f32,
    fixed: bool,
    handle_position: Vec3,
    activity: Activity,
}

impl Slider {
    /// Build a slider whose handle rests at `rest_local_position` in the
    /// parent's space. The handle is placed at the configured initial value
    /// immediately.
    pub fn new(config: &SliderConfig, rest_local_position: Vec3, parent: Mat4) -> Result<Self> {
        let track = config.validate(rest_local_position)?;
        let mut slider = Self {
            name: config.name.clone(),
            track,
            resolution: config.resolution,
            transition: config.transition,
            parent,
            value: 0.0,
            fixed: config.fixed,
            handle_position: track.world_min_position(&parent),
            activity: Activity::Idle,
        };
        slider.apply_value(quantize(config.initial_value, slider.resolution));
        Ok(slider)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized position along the track, always in [0, 1].
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// While fixed, continued drag updates are ignored; programmatic sets still apply.
    pub fn set_fixed(&mut self, fixed: bool) {
        self.fixed = fixed;
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn transition(&self) -> Duration {
        self.transition
    }

    pub fn parent_transform(&self) -> Mat4 {
        self.parent
    }

    /// World position of the controlled object.
    pub fn handle_position(&self) -> Vec3 {
        self.handle_position
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.activity, Activity::Dragging(_))
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.activity, Activity::Animating(_))
    }

    pub fn world_direction(&self) -> Vec3 {
        self.track.world_direction(&self.parent)
    }

    pub fn world_min_position(&self) -> Vec3 {
        self.track.world_min_position(&self.parent)
    }

    pub fn world_max_position(&self) -> Vec3 {
        self.track.world_max_position(&self.parent)
    }

    /// Replace the parent-to-world transform and re-seat the handle at the
    /// current value.
    pub fn set_parent_transform(&mut self, parent: Mat4) {
        self.parent = parent;
        self.apply_value(self.value);
    }

    #[inline]
    fn value_vector(&self) -> Vec3 {
        self.world_direction() * self.value
    }

    // ---------------- Drag interaction ----------------

    /// Start a drag at `pose`. Supersedes any running animation or drag.
    pub fn begin_drag(&mut self, pose: &Pose, out: &mut Vec<SliderEvent>) {
        match self.activity {
            Activity::Animating(t) => {
                log::debug!(
                    "[slider] {} transition to {:.3} cancelled by drag",
                    self.name,
                    t.target()
                );
            }
            Activity::Dragging(_) => {
                log::debug!("[slider] {} drag restarted", self.name);
            }
            Activity::Idle => {}
        }

        let projected =
            project_pose_onto_axis(pose, self.world_direction(), self.world_min_position());
        if projected.is_none() {
            log::trace!("[slider] {} drag start pose parallel to track", self.name);
        }
        let session = DragSession::begin(projected, self.value_vector(), self.value);
        self.activity = Activity::Dragging(session);

        log::info!("[slider] {} drag start value={:.3}", self.name, self.value);
        out.push(SliderEvent::DragStart { value: self.value });
    }

    /// Follow `pose` during a drag. Returns whether the handle moved; a `Drag`
    /// event is emitted only in that case.
    ///
    /// Ignored while fixed, and skipped when the pose is parallel to the track.
    pub fn continue_drag(&mut self, pose: &Pose, out: &mut Vec<SliderEvent>) -> Result<bool> {
        let Activity::Dragging(mut session) = self.activity else {
            return Err(self.no_active_drag("continue"));
        };
        if self.fixed {
            return Ok(false);
        }

        let projected =
            project_pose_onto_axis(pose, self.world_direction(), self.world_min_position());
        let Some(projected) = projected else {
            log::trace!("[slider] {} skipped drag update parallel to track", self.name);
            return Ok(false);
        };

        let target = session.target(projected, self.value_vector());
        self.activity = Activity::Dragging(session);

        let changed = self.apply_value_vector(target);
        if changed {
            log::trace!("[slider] {} drag value={:.4}", self.name, self.value);
            out.push(SliderEvent::Drag { value: self.value });
        }
        Ok(changed)
    }

    /// Finish the drag, settling the handle on the nearest allowed position.
    /// Returns the settled value.
    pub fn end_drag(&mut self, pose: &Pose, out: &mut Vec<SliderEvent>) -> Result<f32> {
        let Activity::Dragging(session) = self.activity else {
            return Err(self.no_active_drag("end"));
        };
        self.activity = Activity::Idle;
        self.apply_value(quantize(self.value, self.resolution));

        log::trace!("[slider] {} drag released at {:?}", self.name, pose.position);
        log::info!(
            "[slider] {} drag end value={:.3} start={:.3}",
            self.name,
            self.value,
            session.start_value()
        );
        out.push(SliderEvent::DragEnd { value: self.value });
        Ok(self.value)
    }

    fn no_active_drag(&self, op: &str) -> SliderError {
        log::warn!("[slider] {} drag {} without an active drag", self.name, op);
        SliderError::NoActiveDrag {
            name: self.name.clone(),
        }
    }

    // ---------------- Programmatic sets ----------------

    /// Jump to `value` (snapped to the resolution) without animating.
    /// Supersedes any running animation or drag. Returns whether the handle moved.
    pub fn set_value(&mut self, value: f32) -> Result<bool> {
        self.check_value(value)?;
        self.activity = Activity::Idle;
        let effective = quantize(value, self.resolution);
        log::debug!("[slider] {} set value={:.3}", self.name, effective);
        Ok(self.apply_value(effective))
    }

    /// Move to `value` (snapped to the resolution) over the configured
    /// transition time, driven by [`Slider::tick`]. Supersedes any running
    /// animation or drag. A zero transition time applies the value at once.
    pub fn animate_to(&mut self, value: f32) -> Result<()> {
        self.check_value(value)?;
        let effective = quantize(value, self.resolution);
        let transition = Transition::new(self.value, effective, self.transition);

        if transition.is_finished() {
            self.activity = Activity::Idle;
            self.apply_value(effective);
            log::debug!("[slider] {} jumped to {:.3}", self.name, effective);
        } else {
            self.activity = Activity::Animating(transition);
            log::debug!(
                "[slider] {} transition {:.3} -> {:.3} over {:?}",
                self.name,
                self.value,
                effective,
                self.transition
            );
        }
        Ok(())
    }

    /// Advance a running animation by `dt`. Returns whether the handle moved.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Activity::Animating(mut transition) = self.activity else {
            return false;
        };
        let value = transition.advance(dt);
        let changed = self.apply_value(value);

        if transition.is_finished() {
            self.activity = Activity::Idle;
            log::debug!("[slider] {} transition finished at {:.3}", self.name, self.value);
        } else {
            self.activity = Activity::Animating(transition);
        }
        changed
    }

    /// Apply an attribute from an interaction description. `VALUE` animates,
    /// `FIXED` toggles whether drags are followed.
    pub fn set_attribute(&mut self, attribute: Attribute, value: AttributeValue) -> Result<()> {
        match (attribute, value) {
            (Attribute::Value, AttributeValue::Float(v)) => self.animate_to(v),
            (Attribute::Fixed, AttributeValue::Bool(fixed)) => {
                self.set_fixed(fixed);
                Ok(())
            }
            (attribute, _) => Err(SliderError::AttributeType {
                name: self.name.clone(),
                attribute,
                expected: match attribute {
                    Attribute::Value => "float",
                    Attribute::Fixed => "bool",
                },
            }),
        }
    }

    fn check_value(&self, value: f32) -> Result<()> {
        if (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(SliderError::ValueOutOfRange {
                name: self.name.clone(),
                value,
            })
        }
    }

    // ---------------- Value application ----------------

    /// Place the handle at `world_min_position + vector`, clamped to the track.
    ///
    /// A vector pointing against the track clamps to the minimum end; one
    /// longer than the track clamps to the maximum end. Components off the
    /// track (a drag offset taken before the parent moved) are dropped.
    /// Returns whether the handle's world position changed.
    pub fn apply_value_vector(&mut self, vector: Vec3) -> bool {
        if !vector.is_finite() {
            return false;
        }
        let world_direction = self.world_direction();
        let track_len = world_direction.length();
        if track_len <= 0.0 || !track_len.is_finite() {
            return self.place(0.0, Vec3::ZERO);
        }

        let vector = vector.project_onto(world_direction);
        let vector = if vector.dot(world_direction) < 0.0 {
            Vec3::ZERO
        } else if vector.length() > track_len {
            world_direction
        } else {
            vector
        };

        self.place((vector.length() / track_len).min(1.0), vector)
    }

    /// Value-vector placement for a vector known to be `world_direction * value`;
    /// stores `value` as given so settled values stay exact.
    fn apply_value(&mut self, value: f32) -> bool {
        let value = value.clamp(0.0, 1.0);
        self.place(value, self.world_direction() * value)
    }

    fn place(&mut self, value: f32, vector: Vec3) -> bool {
        self.value = value;
        let target = self.world_min_position() + vector;
        if self.handle_position != target {
            self.handle_position = target;
            true
        } else {
            false
        }
    }
}
