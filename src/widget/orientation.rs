use glam::{Mat3, Quat, Vec3};

use crate::camera::orientation::CameraOrientation;
use crate::util::rotation::orthogonal_or_any;

/// Orientation shown by the inset gizmo.
///
/// `direction` is the axis the scene is viewed *from*: the unit vector from
/// the focal point toward the camera. Clicking the gizmo's `+X` face yields
/// `direction = +X`, i.e. a camera sitting on the positive X axis looking
/// back along `-X`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetOrientation {
    /// Unit vector from the focal point toward the viewer.
    pub direction: Vec3,
    /// Unit up vector, orthogonal to `direction`.
    pub up: Vec3,
}

impl Default for WidgetOrientation {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl WidgetOrientation {
    /// Viewed from `+Z` with `+Y` up.
    pub const DEFAULT: Self = Self {
        direction: Vec3::Z,
        up: Vec3::Y,
    };

    /// Orientation from raw vectors, without normalization.
    #[must_use]
    pub const fn new(direction: Vec3, up: Vec3) -> Self {
        Self { direction, up }
    }

    /// Orientation matching a camera's viewing frame.
    #[must_use]
    pub fn from_camera(camera: &CameraOrientation) -> Self {
        Self {
            direction: -camera.direction,
            up: camera.up,
        }
    }

    /// Direction a camera aligned with this orientation looks along.
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        -self.direction
    }

    /// Unit, mutually orthogonal copy of this orientation.
    ///
    /// Returns `None` when `direction` is zero or non-finite. A degenerate
    /// up vector is replaced by an arbitrary orthogonal one.
    #[must_use]
    pub fn normalized(&self) -> Option<Self> {
        let direction = self.direction.try_normalize()?;
        Some(Self {
            direction,
            up: orthogonal_or_any(self.up, direction),
        })
    }

    /// Rotation carrying [`WidgetOrientation::DEFAULT`] onto this
    /// orientation (`+Z` to `direction`, `+Y` to `up`).
    #[must_use]
    pub fn rotation(&self) -> Quat {
        let o = self.normalized().unwrap_or(Self::DEFAULT);
        let right = o.up.cross(o.direction);
        Quat::from_mat3(&Mat3::from_cols(right, o.up, o.direction)).normalize()
    }
}

/// One of the six principal view axes of the gizmo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisDirection {
    /// `+X`.
    PosX,
    /// `-X`.
    NegX,
    /// `+Y`.
    PosY,
    /// `-Y`.
    NegY,
    /// `+Z`.
    PosZ,
    /// `-Z`.
    NegZ,
}

impl AxisDirection {
    /// All six axes, positive before negative, X through Z.
    pub const ALL: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Unit vector of this axis.
    #[must_use]
    pub const fn vector(self) -> Vec3 {
        match self {
            Self::PosX => Vec3::X,
            Self::NegX => Vec3::NEG_X,
            Self::PosY => Vec3::Y,
            Self::NegY => Vec3::NEG_Y,
            Self::PosZ => Vec3::Z,
            Self::NegZ => Vec3::NEG_Z,
        }
    }

    /// Component index (0 = X, 1 = Y, 2 = Z).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::PosX | Self::NegX => 0,
            Self::PosY | Self::NegY => 1,
            Self::PosZ | Self::NegZ => 2,
        }
    }
}

/// What the user did to the gizmo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    /// Free rotation by dragging.
    Drag,
    /// Snap to a principal axis view.
    SelectAxis(AxisDirection),
}

/// Event emitted whenever the user changes the gizmo orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationChange {
    /// New gizmo orientation.
    pub orientation: WidgetOrientation,
    /// Interaction that produced it.
    pub action: WidgetAction,
}
