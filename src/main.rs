//! Headless walkthrough of the orientation gizmo driving a volume camera.
//!
//! Usage: `volview [options.toml]`. Set `RUST_LOG=info` to see the camera
//! poses each interaction produces.

use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;

use glam::{Vec2, Vec3};
use volview::camera::controller::CameraController;
use volview::camera::core::{Camera, SceneCamera};
use volview::options::Options;
use volview::sync::OrientationSynchronizer;
use volview::widget::interactive::{
    InteractiveOrientationWidget, OrientationWidget,
};
use volview::widget::orientation::AxisDirection;

/// World bounds of the head CT volume the viewer was built around
/// (64 x 64 x 93 voxels at 3.2 x 3.2 x 1.5 spacing).
const VOLUME_MIN: Vec3 = Vec3::ZERO;
const VOLUME_MAX: Vec3 = Vec3::new(201.6, 201.6, 138.0);

fn load_options() -> Options {
    let Some(path) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&path)) {
        Ok(options) => {
            log::info!("Loaded options from {path}");
            options
        }
        Err(e) => {
            log::error!("Failed to load options from {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn log_camera(label: &str, camera: &Camera) {
    let o = camera.orientation();
    log::info!(
        "{label}: position {:.2}, view {:.3}, up {:.3}, distance {:.2}",
        camera.position,
        o.direction,
        o.up,
        camera.distance(),
    );
}

fn main() {
    env_logger::init();

    let options = load_options();

    let mut camera = Camera::new(&options.camera);
    camera.aspect = 16.0 / 9.0;
    camera.reset_to_bounds(VOLUME_MIN, VOLUME_MAX);
    camera.elevation(80.0);
    let camera = Rc::new(RefCell::new(camera));

    let widget = Rc::new(RefCell::new(InteractiveOrientationWidget::new(
        options.marker.clone(),
    )));
    let inset = widget.borrow().viewport(1280, 720);
    log::info!(
        "orientation marker at ({}, {}), {} px",
        inset.x,
        inset.y,
        inset.size
    );

    let frames = Rc::new(Cell::new(0_u32));
    let render = {
        let frames = Rc::clone(&frames);
        let camera = Rc::clone(&camera);
        Rc::new(move || {
            frames.set(frames.get() + 1);
            log_camera(&format!("frame {}", frames.get()), &camera.borrow());
        })
    };

    let mut sync = OrientationSynchronizer::bind(&camera, &widget, render);
    log_camera("initial", &camera.borrow());
    log::info!("marker {:?}", widget.borrow().marker_orientation());

    // Clicking the gizmo faces snaps the view.
    widget.borrow_mut().select_axis(AxisDirection::PosX);
    widget.borrow_mut().select_axis(AxisDirection::NegZ);

    // Free-dragging the gizmo turns the camera with it.
    for _ in 0..3 {
        widget.borrow_mut().drag(Vec2::new(24.0, -8.0));
    }

    // Orbiting the main camera directly only needs the marker refreshed.
    let controller = CameraController::new(&options.camera);
    controller.rotate(&mut camera.borrow_mut(), Vec2::new(-60.0, 20.0));
    sync.initialize();
    log::info!("marker after orbit {:?}", widget.borrow().marker_orientation());

    sync.dispose();
    widget.borrow_mut().select_axis(AxisDirection::PosY);
    log_camera("after dispose", &camera.borrow());
    log::info!("{} frames requested", frames.get());
}
