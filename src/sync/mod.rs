//! Camera/gizmo orientation synchronization.
//!
//! [`OrientationSynchronizer`] binds one camera to one gizmo: the marker
//! mirrors the camera on initialization, and every gizmo change rotates the
//! camera about its focal point.

/// Pure camera alignment math.
pub mod align;
mod synchronizer;

pub use synchronizer::{OrientationSynchronizer, RenderTrigger};
