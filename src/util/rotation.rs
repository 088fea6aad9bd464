//! Rotation and basis helpers for orientation math.
//!
//! Every function here returns finite output for any finite input, including
//! zero-length and anti-parallel vectors, by falling back to deterministic
//! axes instead of dividing by a vanishing length.

use std::f32::consts::PI;

use glam::{Quat, Vec3};

/// Dot-product margin under which two unit vectors count as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Squared length under which a projected vector has no usable direction.
const DEGENERATE_LENGTH_SQ: f32 = 1e-12;

/// Component of `v` orthogonal to the unit vector `axis`, normalized.
///
/// Returns `None` when `v` is zero, non-finite, or parallel to `axis`.
#[must_use]
pub fn orthogonal_unit(v: Vec3, axis: Vec3) -> Option<Vec3> {
    let projected = v - axis * v.dot(axis);
    if !projected.is_finite()
        || projected.length_squared() <= DEGENERATE_LENGTH_SQ
    {
        return None;
    }
    projected.try_normalize()
}

/// Unit vector orthogonal to `axis`, preferring the direction of `hint`.
///
/// Falls back to [`Vec3::any_orthonormal_vector`] when `hint` is unusable.
#[must_use]
pub fn orthogonal_or_any(hint: Vec3, axis: Vec3) -> Vec3 {
    orthogonal_unit(hint, axis).unwrap_or_else(|| axis.any_orthonormal_vector())
}

/// Minimal rotation taking the unit vector `from` onto the unit vector `to`.
///
/// Built from the cross and dot product of the two vectors (half-angle
/// quaternion). When they are anti-parallel the axis is undefined, so the
/// rotation is half a turn about `fallback_axis` projected orthogonal to
/// `from`, or about an arbitrary orthonormal vector if that projection is
/// degenerate too.
#[must_use]
pub fn rotation_between(from: Vec3, to: Vec3, fallback_axis: Vec3) -> Quat {
    let dot = from.dot(to);
    if dot >= 1.0 - PARALLEL_EPSILON {
        return Quat::IDENTITY;
    }
    if dot <= -1.0 + PARALLEL_EPSILON {
        let axis = orthogonal_or_any(fallback_axis, from);
        return Quat::from_axis_angle(axis, PI);
    }
    let axis = from.cross(to);
    Quat::from_xyzw(axis.x, axis.y, axis.z, 1.0 + dot).normalize()
}

/// Whether `v` has unit length within `tolerance`.
#[inline]
#[must_use]
pub fn is_unit(v: Vec3, tolerance: f32) -> bool {
    (v.length() - 1.0).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_between_maps_from_onto_to() {
        let from = Vec3::new(0.0, 0.0, -1.0);
        let to = Vec3::new(1.0, 2.0, -0.5).normalize();
        let q = rotation_between(from, to, Vec3::Y);
        assert!((q * from).abs_diff_eq(to, 1e-6));
    }

    #[test]
    fn rotation_between_is_minimal() {
        // The rotation axis is perpendicular to both vectors, so anything
        // along the common normal stays put.
        let q = rotation_between(Vec3::X, Vec3::Y, Vec3::Z);
        assert!((q * Vec3::Z).abs_diff_eq(Vec3::Z, 1e-6));
    }

    #[test]
    fn identical_vectors_give_identity() {
        let v = Vec3::new(0.3, -0.4, 0.5).normalize();
        assert_eq!(rotation_between(v, v, Vec3::Y), Quat::IDENTITY);
    }

    #[test]
    fn anti_parallel_uses_fallback_axis() {
        let q = rotation_between(Vec3::Z, Vec3::NEG_Z, Vec3::Y);
        assert!(q.is_finite());
        assert!((q * Vec3::Z).abs_diff_eq(Vec3::NEG_Z, 1e-6));
        // Half turn about the fallback leaves it fixed.
        assert!((q * Vec3::Y).abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn anti_parallel_with_parallel_fallback_still_finite() {
        let q = rotation_between(Vec3::Z, Vec3::NEG_Z, Vec3::Z);
        assert!(q.is_finite());
        assert!((q * Vec3::Z).abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn orthogonal_unit_rejects_degenerate_input() {
        assert_eq!(orthogonal_unit(Vec3::ZERO, Vec3::Z), None);
        assert_eq!(orthogonal_unit(Vec3::Z * 3.0, Vec3::Z), None);
        assert_eq!(orthogonal_unit(Vec3::splat(f32::NAN), Vec3::Z), None);
        let v = orthogonal_unit(Vec3::new(0.0, 2.0, 1.0), Vec3::Z);
        assert_eq!(v, Some(Vec3::Y));
    }

    #[test]
    fn orthogonal_or_any_always_returns_unit() {
        let v = orthogonal_or_any(Vec3::X, Vec3::X);
        assert!(is_unit(v, 1e-6));
        assert!(v.dot(Vec3::X).abs() < 1e-6);
    }
}
