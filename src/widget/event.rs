//! Observer registration for widget events.
//!
//! An [`Emitter`] keeps an ordered list of listeners. Registering returns a
//! [`Subscription`]; unsubscribing (explicitly or by dropping it) removes the
//! listener. Everything here is single-threaded (`Rc`/`RefCell`), matching
//! the UI event-dispatch model.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<E> = Rc<dyn Fn(&E)>;

struct Registry<E> {
    next_id: u64,
    listeners: Vec<(u64, Listener<E>)>,
}

impl<E> Registry<E> {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(i, _)| *i == id)
    }

    fn remove(&mut self, id: u64) {
        self.listeners.retain(|(i, _)| *i != id);
    }
}

/// Broadcasts events of type `E` to registered listeners in registration
/// order.
pub struct Emitter<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E> Default for Emitter<E> {
    fn default() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }
}

impl<E> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.registry.borrow().listeners.len())
            .finish()
    }
}

impl<E: 'static> Emitter<E> {
    /// Create an emitter with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`. It stays registered until the returned
    /// subscription is unsubscribed or dropped.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription {
        let listener: Listener<E> = Rc::new(listener);
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, listener));
            id
        };

        let registry: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.borrow_mut().remove(id);
                }
            })),
        }
    }

    /// Deliver `event` to every listener, returning how many were called.
    ///
    /// Listeners may unsubscribe themselves or others while the event is
    /// being delivered; a listener removed mid-dispatch is not called.
    pub fn emit(&self, event: &E) -> usize {
        let snapshot: Vec<(u64, Listener<E>)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(id, l)| (*id, Rc::clone(l)))
            .collect();

        let mut delivered = 0;
        for (id, listener) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            listener(event);
            delivered += 1;
        }
        delivered
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Handle to a registered listener.
///
/// [`unsubscribe`](Self::unsubscribe) takes effect once; further calls are
/// no-ops. Dropping the handle unsubscribes as well.
#[must_use = "dropping the subscription unregisters the listener"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Remove the listener from its emitter. Safe to call repeatedly.
    pub fn unsubscribe(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }

    /// Whether [`unsubscribe`](Self::unsubscribe) has not run yet.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
