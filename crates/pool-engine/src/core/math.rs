//! 2D vector helpers on top of `glam::DVec2`.
//!
//! The engine works in f64 table units. Everything here is a thin, allocation
//! free wrapper so the collision code can talk in terms of normals and tangents.

use glam::DVec2;

/// 2D vector value type used for every position and velocity in the engine.
pub type Vector2 = DVec2;

/// Unit vector along `n`, or `None` when `n` has no usable direction
/// (zero length or non-finite components).
pub fn unit_normal(n: Vector2) -> Option<Vector2> {
    n.try_normalize()
}

/// Unit tangent for a unit normal: the normal rotated 90° counter-clockwise.
pub fn unit_tangent(unit_normal: Vector2) -> Vector2 {
    unit_normal.perp()
}

/// Unit direction for an angle in radians (`(cos, sin)`).
pub fn direction(angle: f64) -> Vector2 {
    Vector2::from_angle(angle)
}

/// Project `v` onto an orthonormal basis, returning `(normal, tangent)` scalars.
pub fn decompose(v: Vector2, unit_normal: Vector2, unit_tangent: Vector2) -> (f64, f64) {
    (unit_normal.dot(v), unit_tangent.dot(v))
}

/// Rebuild a vector from its normal and tangential scalar components.
pub fn compose(normal: f64, tangent: f64, unit_normal: Vector2, unit_tangent: Vector2) -> Vector2 {
    unit_normal * normal + unit_tangent * tangent
}
