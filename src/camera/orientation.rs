use glam::Vec3;

use crate::util::rotation::orthogonal_or_any;

/// Orthonormal viewing frame of a camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOrientation {
    /// Unit vector from the camera position toward the focal point.
    pub direction: Vec3,
    /// Unit up vector, orthogonal to `direction`.
    pub up: Vec3,
    /// Camera position in world space.
    pub position: Vec3,
}

impl CameraOrientation {
    /// Derive the frame from raw camera parameters.
    ///
    /// A camera sitting on its focal point looks down `-Z`; an up vector
    /// parallel to the view direction is replaced by an arbitrary orthogonal
    /// one, so the result is always a valid basis.
    #[must_use]
    pub fn from_look_at(position: Vec3, focal_point: Vec3, up: Vec3) -> Self {
        let direction =
            (focal_point - position).try_normalize().unwrap_or(Vec3::NEG_Z);
        Self {
            direction,
            up: orthogonal_or_any(up, direction),
            position,
        }
    }

    /// Unit vector pointing to the right of the view.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.direction.cross(self.up)
    }
}
