use std::time::Duration;

// Shared interaction tuning constants.

// Geometry
pub const DEGENERATE_SIN_SQ: f32 = 1e-10; // squared sine of the ray/track angle below which they count as parallel
pub const RAY_PLANE_EPSILON: f32 = 1e-6; // |dot(ray, normal)| below which a ray is parallel to a plane

// Quantization
pub const UNBOUNDED_RESOLUTION_RAW: i64 = i32::MAX as i64; // raw sentinel used by external slider descriptions

// Animation
pub const DEFAULT_TRANSITION: Duration = Duration::ZERO; // programmatic sets jump unless configured otherwise
