//! # Observable State Slices
//!
//! A minimal observer primitive: each state slice is readable
//! synchronously and notifies its subscribers synchronously, on the
//! single execution thread, right after each mutation.
//!
//! Consumers subscribe to the specific slices they render instead of a
//! whole-store change signal, so a cart mutation never wakes a
//! favorites-only subscriber.

use std::cell::{Cell, RefCell};

/// Handle returned by [`Observable::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&T)>;

/// A state slice with synchronous change notification.
///
/// Reading and subscribing go through shared references (the store hands
/// out `&Observable<T>`); mutation is crate-internal, so only the store
/// writes slices.
///
/// ## Invariant
/// Listeners run during `set`/`update` while the listener table is
/// borrowed, so a listener must not subscribe to or unsubscribe from the
/// slice that is notifying it.
pub struct Observable<T> {
    value: T,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener<T>)>>,
}

impl<T> Observable<T> {
    /// Wraps an initial value.
    pub fn new(value: T) -> Self {
        Observable {
            value,
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Reads the current value synchronously.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Registers a listener invoked after every mutation.
    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        SubscriptionId(id)
    }

    /// Removes a listener. Returns whether it was still registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id.0);
        listeners.len() != before
    }

    /// Replaces the value and notifies all listeners.
    pub(crate) fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Mutates the value in place and notifies all listeners.
    pub(crate) fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.notify();
    }

    fn notify(&self) {
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener(&self.value);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
