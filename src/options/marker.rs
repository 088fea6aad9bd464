use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Viewport corner the orientation marker is anchored to.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewportCorner {
    /// Lower-left corner.
    #[default]
    BottomLeft,
    /// Lower-right corner.
    BottomRight,
    /// Upper-left corner.
    TopLeft,
    /// Upper-right corner.
    TopRight,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orientation Marker", inline)]
#[serde(default)]
/// Placement and interaction parameters of the inset orientation marker.
pub struct MarkerOptions {
    /// Inset edge length as a fraction of the smaller viewport dimension.
    #[schemars(title = "Size", range(min = 0.05, max = 0.5), extend("step" = 0.01))]
    pub viewport_size: f32,
    /// Corner the inset is anchored to.
    #[schemars(title = "Corner")]
    pub corner: ViewportCorner,
    /// Lower bound on the inset edge length in pixels.
    #[schemars(skip)]
    pub min_pixel_size: u32,
    /// Upper bound on the inset edge length in pixels.
    #[schemars(skip)]
    pub max_pixel_size: u32,
    /// Radians of gizmo rotation per pixel of drag.
    #[schemars(title = "Drag Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub drag_speed: f32,
    /// When snapping to an axis view, keep the up vector on the principal
    /// axis closest to the current one instead of the raw projection.
    #[schemars(title = "Snap Up To Axis")]
    pub snap_up_to_major_axis: bool,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            viewport_size: 0.2,
            corner: ViewportCorner::BottomLeft,
            min_pixel_size: 50,
            max_pixel_size: 200,
            drag_speed: 0.01,
            snap_up_to_major_axis: true,
        }
    }
}
