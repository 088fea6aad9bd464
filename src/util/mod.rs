//! Shared math helpers.

/// Minimal rotations and orthonormal-basis repair.
pub mod rotation;
