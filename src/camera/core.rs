use glam::{Mat4, Quat, Vec3};

use crate::camera::orientation::CameraOrientation;
use crate::options::CameraOptions;
use crate::util::rotation::orthogonal_or_any;

/// Read/write access to the pose of a scene camera.
///
/// This is the whole surface the orientation synchronizer needs; a host
/// with its own camera type implements it instead of using [`Camera`].
pub trait SceneCamera {
    /// Camera position in world space.
    fn position(&self) -> Vec3;
    /// Move the camera without touching its focal point.
    fn set_position(&mut self, position: Vec3);
    /// Point the camera looks at.
    fn focal_point(&self) -> Vec3;
    /// Move the focal point without touching the camera position.
    fn set_focal_point(&mut self, focal_point: Vec3);
    /// View-up vector.
    fn view_up(&self) -> Vec3;
    /// Replace the view-up vector.
    fn set_view_up(&mut self, up: Vec3);

    /// Current orthonormal viewing frame.
    fn orientation(&self) -> CameraOrientation {
        CameraOrientation::from_look_at(self.position(), self.focal_point(), self.view_up())
    }

    /// Distance between the camera and its focal point.
    fn distance(&self) -> f32 {
        self.position().distance(self.focal_point())
    }
}

/// Perspective camera defined by position, focal point, view-up, and
/// projection parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Look-at target position.
    pub focal_point: Vec3,
    /// Up direction vector.
    pub view_up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl Camera {
    /// Camera one unit up the `+Z` axis, looking at the origin with `+Y` up.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            position: Vec3::Z,
            focal_point: Vec3::ZERO,
            view_up: Vec3::Y,
            aspect: 1.0,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Replace the pose, keeping the projection parameters.
    #[must_use]
    pub fn looking_at(mut self, position: Vec3, focal_point: Vec3, view_up: Vec3) -> Self {
        self.position = position;
        self.focal_point = focal_point;
        self.view_up = view_up;
        self
    }

    /// Build the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let o = self.orientation();
        Mat4::look_at_rh(self.position, self.focal_point, o.up)
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range
        let proj = Mat4::perspective_rh(self.fovy.to_radians(), self.aspect, self.znear, self.zfar);
        proj * self.view_matrix()
    }

    /// Rotate the camera about the focal point around the view-up vector.
    pub fn azimuth(&mut self, degrees: f32) {
        let o = self.orientation();
        self.orbit(Quat::from_axis_angle(o.up, degrees.to_radians()));
    }

    /// Rotate the camera about the focal point around the view's right
    /// vector. Positive angles raise the camera.
    ///
    /// The view-up vector turns with the camera, so it stays orthogonal to
    /// the view direction even past 90 degrees.
    pub fn elevation(&mut self, degrees: f32) {
        let o = self.orientation();
        self.orbit(Quat::from_axis_angle(o.right(), -degrees.to_radians()));
    }

    fn orbit(&mut self, rotation: Quat) {
        let o = self.orientation();
        let offset = self.position - self.focal_point;
        self.position = self.focal_point + rotation * offset;
        self.view_up = orthogonal_or_any(rotation * o.up, rotation * o.direction);
    }

    /// Center on an axis-aligned box and back off along the current view
    /// direction until its bounding sphere fills the field of view.
    ///
    /// The view direction and up vector are kept.
    pub fn reset_to_bounds(&mut self, min: Vec3, max: Vec3) {
        let center = (min + max) * 0.5;
        let radius = ((max - min).length() * 0.5).max(f32::EPSILON);
        let half_angle = (self.fovy.to_radians() * 0.5).max(f32::EPSILON);
        let distance = radius / half_angle.sin();

        let o = self.orientation();
        self.focal_point = center;
        self.position = center - o.direction * distance;
        self.view_up = o.up;
        log::debug!(
            "camera reset to bounds {min} .. {max}, distance {distance:.3}"
        );
    }
}

impl SceneCamera for Camera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn focal_point(&self) -> Vec3 {
        self.focal_point
    }

    fn set_focal_point(&mut self, focal_point: Vec3) {
        self.focal_point = focal_point;
    }

    fn view_up(&self) -> Vec3 {
        self.view_up
    }

    fn set_view_up(&mut self, up: Vec3) {
        self.view_up = up;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        let o = camera.orientation();
        assert_eq!(o.direction, Vec3::NEG_Z);
        assert_eq!(o.up, Vec3::Y);
        assert_eq!(camera.distance(), 1.0);
    }

    #[test]
    fn view_matrix_puts_focal_point_ahead() {
        let camera = Camera::default().looking_at(
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::ZERO,
            Vec3::Y,
        );
        let eye_space = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!(eye_space.abs_diff_eq(Vec3::new(0.0, 0.0, -4.0), 1e-5));

        let clip = camera.build_matrix().project_point3(Vec3::ZERO);
        assert!(clip.x.abs() < 1e-5 && clip.y.abs() < 1e-5);
        assert!(clip.z > 0.0 && clip.z < 1.0);
    }

    #[test]
    fn elevation_raises_camera_and_keeps_basis() {
        let mut camera = Camera::default().looking_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
        );
        camera.elevation(90.0);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 5.0, 0.0), 1e-5));
        assert!(camera.view_up.abs_diff_eq(Vec3::NEG_Z, 1e-5));
        assert!((camera.distance() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn elevation_eighty_degrees_stays_orthonormal() {
        let mut camera = Camera::default();
        camera.elevation(80.0);
        let o = camera.orientation();
        assert!(o.direction.dot(camera.view_up).abs() < 1e-6);
        assert!((camera.view_up.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn azimuth_swings_around_up() {
        let mut camera = Camera::default().looking_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
        );
        camera.azimuth(90.0);
        assert!(camera.position.abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-5));
        assert!(camera.view_up.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn reset_to_bounds_centers_and_fits() {
        let mut camera = Camera::default();
        let min = Vec3::new(0.0, 0.0, 0.0);
        let max = Vec3::new(10.0, 10.0, 10.0);
        camera.reset_to_bounds(min, max);

        assert_eq!(camera.focal_point, Vec3::splat(5.0));
        let radius = (max - min).length() * 0.5;
        let expected = radius / (camera.fovy.to_radians() * 0.5).sin();
        assert!((camera.distance() - expected).abs() < 1e-3);
        assert_eq!(camera.orientation().direction, Vec3::NEG_Z);
    }
}
