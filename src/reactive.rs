//! Minimal observable values for the view layer.
//!
//! A [`Signal`] holds a current value and an ordered list of subscribers that
//! are called synchronously whenever the value is written. View code receives
//! a [`ReadSignal`], which can be read and subscribed to but never written.
//!
//! Everything here is single-threaded: signals live on the UI thread and are
//! shared with `Rc`, never sent across threads.
//!
//! # Example
//!
//! ```
//! use docsite::reactive::Signal;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let count = Signal::new(0);
//! let seen = Rc::new(Cell::new(0));
//!
//! let seen_clone = seen.clone();
//! let sub = count.subscribe(move |v| seen_clone.set(*v));
//!
//! count.set(3);
//! assert_eq!(seen.get(), 3);
//!
//! sub.unsubscribe();
//! count.set(4);
//! assert_eq!(seen.get(), 3);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    subscribers: Vec<(u64, Callback<T>)>,
    next_id: u64,
}

impl<T> Inner<T> {
    fn is_subscribed(&self, id: u64) -> bool {
        self.subscribers.iter().any(|(sid, _)| *sid == id)
    }
}

// ============================================================================
// Signal
// ============================================================================

/// A writable observable value.
///
/// Clones share the same underlying value and subscriber list.
pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Signal")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + 'static> Signal<T> {
    /// Create a signal holding `value` with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Write a new value and notify every subscriber, even if the value is
    /// equal to the previous one.
    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        self.notify();
    }

    /// Write a new value only if it differs from the current one.
    ///
    /// Returns `true` if the value changed and subscribers were notified.
    pub fn set_if_changed(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        if self.inner.borrow().value == value {
            return false;
        }
        self.set(value);
        true
    }

    /// Register a subscriber. It is called after every write, in
    /// registration order, until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::new(f)));
            id
        };

        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
            }
        })
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// A read-only handle to this signal.
    pub fn reader(&self) -> ReadSignal<T> {
        ReadSignal {
            signal: self.clone(),
        }
    }

    /// A handle that does not keep the signal alive.
    pub fn downgrade(&self) -> WeakSignal<T> {
        WeakSignal {
            inner: Rc::downgrade(&self.inner),
        }
    }

    fn notify(&self) {
        // Snapshot first so subscribers can read, write or unsubscribe
        // without holding a borrow across the callback.
        let (value, subscribers) = {
            let inner = self.inner.borrow();
            let subscribers: Vec<(u64, Callback<T>)> = inner
                .subscribers
                .iter()
                .map(|(id, cb)| (*id, Rc::clone(cb)))
                .collect();
            (inner.value.clone(), subscribers)
        };

        for (id, callback) in subscribers {
            // Skip subscribers removed by an earlier callback in this round.
            if !self.inner.borrow().is_subscribed(id) {
                continue;
            }
            callback(&value);
        }
    }
}

// ============================================================================
// ReadSignal / WeakSignal
// ============================================================================

/// A read-only view of a [`Signal`].
pub struct ReadSignal<T> {
    signal: Signal<T>,
}

impl<T> Clone for ReadSignal<T> {
    fn clone(&self) -> Self {
        Self {
            signal: self.signal.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadSignal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadSignal").field(&self.signal).finish()
    }
}

impl<T: Clone + 'static> ReadSignal<T> {
    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.signal.get()
    }

    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.signal.with(f)
    }

    /// Register a subscriber, see [`Signal::subscribe`].
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription {
        self.signal.subscribe(f)
    }
}

/// A non-owning handle to a [`Signal`], used by host callbacks so they never
/// keep a torn-down component's state alive.
pub struct WeakSignal<T> {
    inner: Weak<RefCell<Inner<T>>>,
}

impl<T> Clone for WeakSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T> WeakSignal<T> {
    /// Upgrade to a [`Signal`] if it is still alive.
    pub fn upgrade(&self) -> Option<Signal<T>> {
        self.inner.upgrade().map(|inner| Signal { inner })
    }
}

// ============================================================================
// Subscription
// ============================================================================

/// Guard for a registered subscriber. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Remove the subscriber now.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Keep the subscriber registered for as long as the signal lives.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
