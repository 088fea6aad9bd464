//! Camera alignment to a gizmo orientation.

use crate::camera::core::SceneCamera;
use crate::util::rotation::{orthogonal_unit, rotation_between};
use crate::widget::orientation::WidgetOrientation;

/// Rotate `camera` about its focal point so that it views the scene the way
/// `target` describes.
///
/// The camera-to-focal-point offset is turned onto the new view direction
/// at its old length, so the distance to the focal point is preserved. The
/// new up vector is `target.up`; when that is degenerate the old up carried
/// by the minimal rotation between the two view directions is used instead.
/// Both vectors are renormalized, and up is made orthogonal to the view
/// direction.
///
/// Returns `false`, leaving the camera untouched, when `target.direction`
/// has no usable direction.
pub fn align_camera<C>(camera: &mut C, target: &WidgetOrientation) -> bool
where
    C: SceneCamera + ?Sized,
{
    let Some(new_view) = target.view_direction().try_normalize() else {
        log::debug!("ignoring degenerate gizmo direction {}", target.direction);
        return false;
    };

    let current = camera.orientation();
    let focal_point = camera.focal_point();
    let offset = focal_point - camera.position();

    // The rotated offset would land on `new_view` at the same length, so it
    // is rebuilt from the exact direction to keep repeated updates from
    // drifting. The rotation itself only carries the old up vector over
    // for the fallback below; anti-parallel flips turn about that up.
    let distance = offset.length();
    let rotation = rotation_between(current.direction, new_view, current.up);
    let up = orthogonal_unit(target.up, new_view)
        .or_else(|| orthogonal_unit(rotation * current.up, new_view))
        .unwrap_or_else(|| new_view.any_orthonormal_vector());

    camera.set_position(focal_point - new_view * distance);
    camera.set_view_up(up);
    true
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::core::Camera;
    use crate::util::rotation::is_unit;

    const TOLERANCE: f32 = 1e-6;

    fn camera(position: Vec3, focal_point: Vec3, up: Vec3) -> Camera {
        Camera::default().looking_at(position, focal_point, up)
    }

    /// Orthonormal gizmo bases spread over the sphere of view directions.
    fn sample_bases() -> Vec<WidgetOrientation> {
        let n = 64;
        let golden = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
        (0..n)
            .map(|i| {
                let y = 1.0 - 2.0 * (i as f32 + 0.5) / n as f32;
                let r = (1.0 - y * y).sqrt();
                let theta = golden * i as f32;
                let direction = Vec3::new(r * theta.cos(), y, r * theta.sin()).normalize();
                let up = direction.any_orthonormal_vector();
                WidgetOrientation::new(direction, up)
            })
            .collect()
    }

    #[test]
    fn up_is_unit_and_orthogonal_for_all_bases() {
        for target in sample_bases() {
            let mut cam = camera(Vec3::new(1.0, 2.0, 7.0), Vec3::ONE, Vec3::Y);
            assert!(align_camera(&mut cam, &target));

            let o = cam.orientation();
            assert!(is_unit(cam.view_up, TOLERANCE));
            assert!(cam.view_up.dot(target.view_direction()).abs() < TOLERANCE);
            assert!(o.direction.abs_diff_eq(target.view_direction(), 1e-5));
        }
    }

    #[test]
    fn distance_is_preserved() {
        let focal = Vec3::new(-3.0, 4.0, 0.5);
        let start = Vec3::new(2.0, -1.0, 9.0);
        let expected = start.distance(focal);
        let mut cam = camera(start, focal, Vec3::Y);
        for target in sample_bases() {
            assert!(align_camera(&mut cam, &target));
            assert!((cam.distance() - expected).abs() < 5e-4);
            assert_eq!(cam.focal_point, focal);
        }
    }

    #[test]
    fn repeated_update_is_idempotent() {
        let target =
            WidgetOrientation::new(Vec3::new(0.3, 0.5, -0.8).normalize(), Vec3::Z)
                .normalized()
                .unwrap();
        let mut cam = camera(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        assert!(align_camera(&mut cam, &target));
        let first = cam.clone();
        assert!(align_camera(&mut cam, &target));

        assert!(cam.position.abs_diff_eq(first.position, TOLERANCE));
        assert!(cam.view_up.abs_diff_eq(first.view_up, TOLERANCE));
    }

    #[test]
    fn anti_parallel_flip_is_finite() {
        // View direction (0,0,1) to (0,0,-1).
        let mut cam = camera(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::Y);
        let target = WidgetOrientation::new(Vec3::Z, Vec3::Y);
        assert!(align_camera(&mut cam, &target));

        assert!(cam.position.is_finite());
        assert!(cam.view_up.is_finite());
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-5));
        assert!(cam.view_up.abs_diff_eq(Vec3::Y, TOLERANCE));
    }

    #[test]
    fn anti_parallel_flip_with_degenerate_up_uses_rotated_up() {
        let mut cam = camera(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::Y);
        let target = WidgetOrientation::new(Vec3::Z, Vec3::ZERO);
        assert!(align_camera(&mut cam, &target));

        // Half turn about the old up keeps it.
        assert!(cam.view_up.abs_diff_eq(Vec3::Y, TOLERANCE));
        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-5));
    }

    #[test]
    fn scenario_look_from_positive_x() {
        let mut cam = camera(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let target = WidgetOrientation::new(Vec3::X, Vec3::Y);
        assert!(align_camera(&mut cam, &target));

        assert!(cam.position.abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-5));
        assert!(cam.view_up.abs_diff_eq(Vec3::Y, TOLERANCE));
        let o = cam.orientation();
        assert!(o.direction.abs_diff_eq(Vec3::NEG_X, TOLERANCE));
    }

    #[test]
    fn up_parallel_to_view_falls_back_to_rotated_up() {
        let mut cam = camera(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        // Up given along the new direction: unusable.
        let target = WidgetOrientation::new(Vec3::X, Vec3::X);
        assert!(align_camera(&mut cam, &target));
        assert!(cam.view_up.abs_diff_eq(Vec3::Y, TOLERANCE));
    }

    #[test]
    fn fallback_up_follows_minimal_rotation() {
        // Tilting the view from -Z down to -Y turns the old +Y up into -Z.
        let mut cam = camera(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let target = WidgetOrientation::new(Vec3::Y, Vec3::ZERO);
        assert!(align_camera(&mut cam, &target));

        assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 5.0, 0.0), 1e-5));
        assert!(cam.view_up.abs_diff_eq(Vec3::NEG_Z, 1e-5));
        assert!((cam.distance() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn skewed_up_is_orthogonalized() {
        let mut cam = camera(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let target = WidgetOrientation::new(Vec3::X, Vec3::new(0.5, 2.0, 0.0));
        assert!(align_camera(&mut cam, &target));
        assert!(cam.view_up.abs_diff_eq(Vec3::Y, TOLERANCE));
    }

    #[test]
    fn degenerate_direction_is_ignored() {
        let mut cam = camera(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let before = cam.clone();
        let zero = WidgetOrientation::new(Vec3::ZERO, Vec3::Y);
        let nan = WidgetOrientation::new(Vec3::splat(f32::NAN), Vec3::Y);
        assert!(!align_camera(&mut cam, &zero));
        assert!(!align_camera(&mut cam, &nan));
        assert_eq!(cam, before);
    }

    #[test]
    fn unnormalized_input_is_renormalized() {
        let mut cam = camera(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let target = WidgetOrientation::new(Vec3::X * 4.0, Vec3::Y * 0.25);
        assert!(align_camera(&mut cam, &target));
        assert!(cam.position.abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-5));
        assert!(is_unit(cam.view_up, TOLERANCE));
    }
}
