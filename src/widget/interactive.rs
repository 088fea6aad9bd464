use std::cmp::Ordering;

use glam::{Quat, Vec2, Vec3};

use crate::options::{MarkerOptions, ViewportCorner};
use crate::widget::event::{Emitter, Subscription};
use crate::widget::orientation::{
    AxisDirection, OrientationChange, WidgetAction, WidgetOrientation,
};

/// Boxed listener for gizmo orientation changes.
pub type OrientationHandler = Box<dyn Fn(&OrientationChange)>;

/// What an orientation synchronizer needs from a gizmo.
pub trait OrientationWidget {
    /// Orientation the marker currently displays.
    fn marker_orientation(&self) -> WidgetOrientation;

    /// Display `orientation` without emitting a change event.
    fn set_marker_orientation(&mut self, orientation: WidgetOrientation);

    /// Register for user-driven orientation changes.
    fn on_orientation_change(&self, handler: OrientationHandler) -> Subscription;
}

/// Inset square the marker is drawn into, in window pixels with the origin
/// at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsetViewport {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Edge length.
    pub size: f32,
}

/// A world axis as the marker shows it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerAxis {
    /// Which world axis (always a positive one).
    pub axis: AxisDirection,
    /// Projection into the inset, unit length when the axis lies in the
    /// view plane; `+y` is up.
    pub screen: Vec2,
    /// Distance along the view direction; larger is farther away.
    pub depth: f32,
}

/// Interactive orientation gizmo: a small frame of axes the user can drag
/// freely or click to snap to a principal view.
///
/// Every user interaction updates the gizmo's own orientation first and
/// then notifies subscribers with an [`OrientationChange`].
#[derive(Debug)]
pub struct InteractiveOrientationWidget {
    orientation: WidgetOrientation,
    options: MarkerOptions,
    changes: Emitter<OrientationChange>,
}

impl Default for InteractiveOrientationWidget {
    fn default() -> Self {
        Self::new(MarkerOptions::default())
    }
}

impl InteractiveOrientationWidget {
    /// Create a gizmo in the default orientation.
    #[must_use]
    pub fn new(options: MarkerOptions) -> Self {
        Self {
            orientation: WidgetOrientation::DEFAULT,
            options,
            changes: Emitter::new(),
        }
    }

    /// Current gizmo orientation.
    #[must_use]
    pub fn orientation(&self) -> WidgetOrientation {
        self.orientation
    }

    /// Marker placement and interaction parameters.
    #[must_use]
    pub fn options(&self) -> &MarkerOptions {
        &self.options
    }

    /// Replace the marker options.
    pub fn set_options(&mut self, options: MarkerOptions) {
        self.options = options;
    }

    /// Rotate the gizmo by a drag of `delta` pixels and notify subscribers.
    ///
    /// Horizontal travel swings around the gizmo's up vector, vertical
    /// travel tilts around its right vector, like orbiting a camera.
    pub fn drag(&mut self, delta: Vec2) {
        let speed = self.options.drag_speed;
        let WidgetOrientation { direction, up } = self.orientation;

        let horizontal = Quat::from_axis_angle(up, -delta.x * speed);
        let (direction, up) = (horizontal * direction, horizontal * up);

        let right = up.cross(direction);
        let vertical = Quat::from_axis_angle(right, -delta.y * speed);
        let rotated = WidgetOrientation::new(vertical * direction, vertical * up);

        self.orientation = rotated.normalized().unwrap_or(self.orientation);
        self.notify(WidgetAction::Drag);
    }

    /// Snap to the view from `axis` and notify subscribers.
    ///
    /// The up vector is the principal axis closest to the current up among
    /// the two orthogonal to `axis` (ties pick the later axis, a zero
    /// component the negative direction), or the current up made orthogonal
    /// when `snap_up_to_major_axis` is off.
    pub fn select_axis(&mut self, axis: AxisDirection) {
        let direction = axis.vector();
        let current_up = self.orientation.up;
        let up = if self.options.snap_up_to_major_axis {
            major_axis(current_up, axis)
        } else {
            current_up
        };

        self.orientation = WidgetOrientation::new(direction, up)
            .normalized()
            .unwrap_or(self.orientation);
        self.notify(WidgetAction::SelectAxis(axis));
    }

    fn notify(&self, action: WidgetAction) {
        let change = OrientationChange {
            orientation: self.orientation,
            action,
        };
        let delivered = self.changes.emit(&change);
        log::trace!("{action:?} delivered to {delivered} listener(s)");
    }

    /// Placement of the inset in a `width` x `height` window.
    #[must_use]
    pub fn viewport(&self, width: u32, height: u32) -> InsetViewport {
        let shortest = width.min(height) as f32;
        // Inverted pixel bounds resolve to the maximum instead of panicking.
        let size = (shortest * self.options.viewport_size)
            .max(self.options.min_pixel_size as f32)
            .min(self.options.max_pixel_size as f32)
            .min(shortest);
        let (w, h) = (width as f32, height as f32);
        let (x, y) = match self.options.corner {
            ViewportCorner::BottomLeft => (0.0, h - size),
            ViewportCorner::BottomRight => (w - size, h - size),
            ViewportCorner::TopLeft => (0.0, 0.0),
            ViewportCorner::TopRight => (w - size, 0.0),
        };
        InsetViewport { x, y, size }
    }

    /// World X, Y and Z axes projected into the marker's view, ordered
    /// back to front.
    #[must_use]
    pub fn marker_axes(&self) -> Vec<MarkerAxis> {
        let to_marker = self.orientation.rotation().inverse();
        let world = [AxisDirection::PosX, AxisDirection::PosY, AxisDirection::PosZ];
        let mut axes: Vec<MarkerAxis> = world
            .into_iter()
            .map(|axis| {
                let local = to_marker * axis.vector();
                MarkerAxis {
                    axis,
                    screen: local.truncate(),
                    depth: -local.z,
                }
            })
            .collect();
        axes.sort_by(|a, b| {
            b.depth.partial_cmp(&a.depth).unwrap_or(Ordering::Equal)
        });
        axes
    }
}

impl OrientationWidget for InteractiveOrientationWidget {
    fn marker_orientation(&self) -> WidgetOrientation {
        self.orientation
    }

    fn set_marker_orientation(&mut self, orientation: WidgetOrientation) {
        if let Some(o) = orientation.normalized() {
            self.orientation = o;
        }
    }

    fn on_orientation_change(&self, handler: OrientationHandler) -> Subscription {
        self.changes.subscribe(handler)
    }
}

fn major_axis(up: Vec3, axis: AxisDirection) -> Vec3 {
    let (a, b) = match axis.index() {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };
    let idx = if up[a].abs() > up[b].abs() { a } else { b };
    let mut out = Vec3::ZERO;
    out[idx] = if up[idx] > 0.0 { 1.0 } else { -1.0 };
    out
}
