//! Camera model for the main viewport.
//!
//! Provides the camera pose and the [`SceneCamera`](self::core::SceneCamera) seam the
//! orientation synchronizer drives, plus setup-time orbit, pan and zoom.

/// Mouse-delta orbit, pan and zoom.
pub mod controller;
/// Camera struct and the `SceneCamera` trait.
pub mod core;
/// Orthonormal viewing frame.
pub mod orientation;
