use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::camera::core::SceneCamera;
use crate::sync::align::align_camera;
use crate::widget::event::Subscription;
use crate::widget::interactive::OrientationWidget;
use crate::widget::orientation::{OrientationChange, WidgetOrientation};

/// Schedules a redraw of the main viewport.
pub type RenderTrigger = Rc<dyn Fn()>;

/// State shared between the synchronizer and its widget listener.
struct Link<C, W> {
    camera: Weak<RefCell<C>>,
    widget: Weak<RefCell<W>>,
    render: RenderTrigger,
    active: Cell<bool>,
}

impl<C: SceneCamera, W: OrientationWidget> Link<C, W> {
    fn apply(&self, orientation: &WidgetOrientation) {
        if !self.active.get() {
            return;
        }
        let Some(camera) = self.camera.upgrade() else {
            log::debug!("camera dropped, ignoring gizmo orientation change");
            return;
        };
        let aligned = match camera.try_borrow_mut() {
            Ok(mut camera) => {
                align_camera(&mut *camera, orientation).then(|| camera.orientation())
            }
            Err(_) => {
                log::warn!("camera busy, dropping gizmo orientation change");
                None
            }
        };
        let Some(camera) = aligned else {
            return;
        };
        self.mirror(WidgetOrientation::from_camera(&camera));
        (self.render)();
    }

    /// Show `orientation` on the widget marker. Skipped while the widget is
    /// emitting, since it already holds the orientation it is reporting.
    fn mirror(&self, orientation: WidgetOrientation) {
        if let Some(widget) = self.widget.upgrade() {
            if let Ok(mut widget) = widget.try_borrow_mut() {
                widget.set_marker_orientation(orientation);
            }
        }
    }
}

/// Keeps a scene camera aligned with an interactive orientation gizmo.
///
/// The synchronizer holds weak references to both the camera and the
/// widget; it never keeps either alive. Each orientation change from the
/// widget rotates the camera about its focal point and fires the render
/// trigger once. All of this runs on the UI thread; camera and widget are
/// shared through `Rc<RefCell<_>>`.
///
/// ```ignore
/// let sync = OrientationSynchronizer::bind(&camera, &widget, render);
/// widget.borrow_mut().select_axis(AxisDirection::PosX); // camera follows
/// ```
pub struct OrientationSynchronizer<C, W> {
    link: Rc<Link<C, W>>,
    subscription: Option<Subscription>,
}

impl<C, W> OrientationSynchronizer<C, W>
where
    C: SceneCamera + 'static,
    W: OrientationWidget + 'static,
{
    /// Subscribe to `widget` changes on behalf of `camera`, then set the
    /// widget marker from the camera's current orientation.
    #[must_use = "dropping the synchronizer unsubscribes it"]
    pub fn bind(camera: &Rc<RefCell<C>>, widget: &Rc<RefCell<W>>, render: RenderTrigger) -> Self {
        let link = Rc::new(Link {
            camera: Rc::downgrade(camera),
            widget: Rc::downgrade(widget),
            render,
            active: Cell::new(true),
        });

        let listener = Rc::clone(&link);
        let subscription =
            widget.borrow().on_orientation_change(Box::new(move |change: &OrientationChange| {
                listener.apply(&change.orientation);
            }));

        let sync = Self {
            link,
            subscription: Some(subscription),
        };
        sync.initialize();
        log::debug!("orientation synchronizer bound");
        sync
    }

    /// Set the widget marker to the camera's current orientation.
    ///
    /// Call after changing the camera directly (orbit, reset, elevation) so
    /// the marker follows. Idempotent. Does nothing once disposed, or when
    /// the camera or widget is gone or already borrowed.
    pub fn initialize(&self) {
        if !self.is_active() {
            return;
        }
        let Some(camera) = self.link.camera.upgrade() else {
            log::debug!("camera dropped, skipping marker sync");
            return;
        };
        let Ok(camera) = camera.try_borrow() else {
            return;
        };
        self.link.mirror(WidgetOrientation::from_camera(&camera.orientation()));
    }

    /// Apply a gizmo orientation to the camera and request a redraw.
    ///
    /// This is what the widget subscription calls; it is exposed so hosts
    /// can feed orientations from elsewhere. Ignored after
    /// [`dispose`](Self::dispose) or when `orientation` has no usable
    /// direction.
    pub fn on_widget_orientation_changed(&self, orientation: &WidgetOrientation) {
        self.link.apply(orientation);
    }

    /// Stop following the widget. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.link.active.set(false);
        if let Some(mut subscription) = self.subscription.take() {
            subscription.unsubscribe();
            log::debug!("orientation synchronizer disposed");
        }
    }

    /// Whether [`dispose`](Self::dispose) has not been called.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.link.active.get()
    }
}
