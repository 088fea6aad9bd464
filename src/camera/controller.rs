use glam::Vec2;

use crate::camera::core::{Camera, SceneCamera};
use crate::options::CameraOptions;

/// Fraction of the focal distance one pixel of pan travel covers at
/// `pan_speed = 1.0`.
const PAN_SCALE: f32 = 0.002;

/// Maps mouse-style deltas onto orbit, pan and zoom of the main camera.
///
/// The controller holds only sensitivities; the camera itself is passed in
/// so the same camera can be shared with an orientation synchronizer.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl CameraController {
    /// Create a controller using the sensitivities from `options`.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        }
    }

    /// Orbit around the focal point. Horizontal travel swings around the
    /// view-up vector, vertical travel tilts around the right vector.
    pub fn rotate(&self, camera: &mut Camera, delta: Vec2) {
        camera.azimuth(-delta.x * self.rotate_speed);
        camera.elevation(delta.y * self.rotate_speed);
    }

    /// Translate camera and focal point together in the view plane.
    pub fn pan(&self, camera: &mut Camera, delta: Vec2) {
        let o = camera.orientation();
        let scale = camera.distance() * self.pan_speed * PAN_SCALE;
        let translation = o.right() * (-delta.x * scale) + o.up * (delta.y * scale);

        camera.position += translation;
        camera.focal_point += translation;
    }

    /// Dolly toward (positive `delta`) or away from the focal point.
    pub fn zoom(&self, camera: &mut Camera, delta: f32) {
        let o = camera.orientation();
        // Bounds may be inverted in hand-edited options; `clamp` would panic.
        let distance = (camera.distance() * (1.0 - delta * self.zoom_speed))
            .max(self.min_distance)
            .min(self.max_distance);
        camera.position = camera.focal_point - o.direction * distance;
    }
}
