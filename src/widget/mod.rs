//! Interactive orientation gizmo shown in an inset viewport.
//!
//! The gizmo keeps its own orientation, lets the user drag it or snap it to
//! a principal axis, and broadcasts every change to subscribers.

/// Listener registration and idempotent subscriptions.
pub mod event;
/// The gizmo itself and the `OrientationWidget` trait.
pub mod interactive;
/// Gizmo orientation and change-event types.
pub mod orientation;
