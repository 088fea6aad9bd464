// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orientation-gizmo camera synchronization for interactive volume viewers.
//!
//! A small inset gizmo shows which way the main camera is looking. Dragging
//! the gizmo, or clicking one of its axes, rotates the main camera about its
//! focal point to match; moving the camera directly updates the gizmo.
//!
//! # Key entry points
//!
//! - [`sync::OrientationSynchronizer`] - binds one camera to one gizmo
//! - [`widget::interactive::InteractiveOrientationWidget`] - the gizmo
//! - [`camera::core::Camera`] - the main viewport camera
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Threading
//!
//! Everything runs on the UI thread. Camera and gizmo are shared as
//! `Rc<RefCell<_>>`; the synchronizer keeps only weak references and never
//! blocks.

pub mod camera;
pub mod error;
pub mod options;
pub mod sync;
pub mod util;
pub mod widget;
