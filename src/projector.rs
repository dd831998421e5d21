use glam::Vec3;

use crate::constants::{DEGENERATE_SIN_SQ, RAY_PLANE_EPSILON};

/// A pointing ray, e.g. from a hand or controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub forward: Vec3,
}

impl Pose {
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self { position, forward }
    }

    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.position + self.forward * t
    }
}

/// Signed ray parameter where the line through the ray meets the plane
/// `{p : dot(p - plane_point, plane_normal) == 0}`.
///
/// Hits behind the ray origin are returned as negative `t`; `None` only when
/// the ray runs parallel to the plane.
#[inline]
pub fn intersect_ray_plane(
    ray_origin: Vec3,
    ray_dir: Vec3,
    plane_point: Vec3,
    plane_normal: Vec3,
) -> Option<f32> {
    let denom = ray_dir.dot(plane_normal);
    if denom.abs() <= RAY_PLANE_EPSILON * plane_normal.length() * ray_dir.length() {
        return None;
    }
    Some((plane_point - ray_origin).dot(plane_normal) / denom)
}

/// Vector from the track's world minimum to the point the pose intends,
/// projected onto the track direction.
///
/// The ray is intersected with the plane that contains the track and faces
/// the ray; the component of the hit that leaves the track is discarded. The
/// result may point backwards or overshoot the track; callers clamp.
///
/// Returns `None` when the ray is parallel to the track.
pub fn project_pose_onto_axis(
    pose: &Pose,
    world_direction: Vec3,
    world_min_position: Vec3,
) -> Option<Vec3> {
    let plane_normal = world_direction.cross(pose.forward);
    let scale_sq = world_direction.length_squared() * pose.forward.length_squared();
    if plane_normal.length_squared() <= DEGENERATE_SIN_SQ * scale_sq {
        return None;
    }

    let interaction_normal = world_direction.cross(plane_normal);
    let t = intersect_ray_plane(
        pose.position,
        pose.forward,
        world_min_position,
        interaction_normal,
    )?;
    let hit = pose.point_at(t);

    let delta = hit - world_min_position;
    Some(delta.project_onto(world_direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn ray_plane_hit_in_front() {
        let t = intersect_ray_plane(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert_eq!(t, Some(5.0));
    }

    #[test]
    fn ray_plane_hit_behind_is_negative() {
        let t = intersect_ray_plane(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -2.0), Vec3::Z);
        assert_eq!(t, Some(-2.0));
    }

    #[test]
    fn ray_plane_parallel_is_none() {
        assert!(intersect_ray_plane(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 1.0), Vec3::Z).is_none());
    }

    #[test]
    fn pointing_straight_down_at_the_track() {
        let pose = Pose::new(Vec3::new(0.3, 2.0, 0.0), Vec3::NEG_Y);
        let v = project_pose_onto_axis(&pose, Vec3::X, Vec3::ZERO).unwrap();
        assert!(approx(v, Vec3::new(0.3, 0.0, 0.0)));
    }

    #[test]
    fn off_plane_aim_is_projected_back_onto_track() {
        // Ray passes beside the track (z = 0.4); only the along-track part survives.
        let pose = Pose::new(Vec3::new(0.7, 1.0, 0.4), Vec3::NEG_Y);
        let v = project_pose_onto_axis(&pose, Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO).unwrap();
        assert!(approx(v, Vec3::new(0.7, 0.0, 0.0)));
    }

    #[test]
    fn oblique_ray_uses_plane_facing_the_ray() {
        let forward = Vec3::new(1.0, -1.0, 0.0).normalize();
        let pose = Pose::new(Vec3::new(0.0, 1.0, 0.0), forward);
        let v = project_pose_onto_axis(&pose, Vec3::X, Vec3::ZERO).unwrap();
        assert!(approx(v, Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn result_can_point_backwards_or_overshoot() {
        let behind = Pose::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::NEG_Y);
        let beyond = Pose::new(Vec3::new(3.0, 1.0, 0.0), Vec3::NEG_Y);
        let b = project_pose_onto_axis(&behind, Vec3::X, Vec3::ZERO).unwrap();
        let o = project_pose_onto_axis(&beyond, Vec3::X, Vec3::ZERO).unwrap();
        assert!(b.dot(Vec3::X) < 0.0);
        assert!(o.length() > 1.0);
    }

    #[test]
    fn tiny_track_and_short_forward_still_project() {
        let pose = Pose::new(Vec3::new(2.5e-6, 1e-3, 0.0), Vec3::NEG_Y * 1e-4);
        let v = project_pose_onto_axis(&pose, Vec3::new(5e-6, 0.0, 0.0), Vec3::ZERO).unwrap();
        assert!((v.x - 2.5e-6).abs() < 1e-10, "got {v:?}");
    }

    #[test]
    fn zero_forward_is_degenerate() {
        let pose = Pose::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO);
        assert!(project_pose_onto_axis(&pose, Vec3::X, Vec3::ZERO).is_none());
    }

    #[test]
    fn ray_parallel_to_track_is_degenerate() {
        let pose = Pose::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(project_pose_onto_axis(&pose, Vec3::X, Vec3::ZERO).is_none());
        let backwards = Pose::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_X * 3.0);
        assert!(project_pose_onto_axis(&backwards, Vec3::X, Vec3::ZERO).is_none());
    }
}
