//! In-memory viewport host for testing.

use std::cell::Cell;
use std::rc::Rc;

use crate::adapters::listeners::ListenerSet;
use crate::traits::{ListenerId, Trigger, ViewportHost, ViewportListener};

/// Viewport host whose width is set by the test.
///
/// Every call to [`set_width`](MockViewport::set_width) behaves like one
/// browser resize event: listeners run synchronously before it returns.
/// Subscribe and unsubscribe calls are counted so tests can assert that
/// nothing leaks.
///
/// # Example
///
/// ```
/// use docsite::adapters::mock::MockViewport;
/// use docsite::viewport::ViewportClassifier;
///
/// let host = MockViewport::shared(1024);
/// let mut classifier = ViewportClassifier::deferred(host.clone(), Default::default());
///
/// classifier.activate();
/// host.set_width(500);
/// assert_eq!(classifier.is_mobile(), Some(true));
///
/// classifier.deactivate();
/// assert_eq!(host.unsubscribe_calls(), 1);
/// assert_eq!(host.listener_count(), 0);
/// ```
#[derive(Default)]
pub struct MockViewport {
    width: Cell<u32>,
    listeners: ListenerSet,
    subscribe_calls: Cell<usize>,
    unsubscribe_calls: Cell<usize>,
    dispatched: Cell<usize>,
}

impl MockViewport {
    /// Create a host reporting `width` pixels.
    pub fn new(width: u32) -> Self {
        Self {
            width: Cell::new(width),
            ..Self::default()
        }
    }

    /// Create a host already wrapped in `Rc` for sharing with components.
    pub fn shared(width: u32) -> Rc<Self> {
        Rc::new(Self::new(width))
    }

    /// Change the width and dispatch one resize event.
    pub fn set_width(&self, width: u32) {
        self.width.set(width);
        let ran = self.listeners.dispatch(width);
        self.dispatched.set(self.dispatched.get() + ran);
    }

    /// Change the width without dispatching anything, like a host that
    /// coalesced the event away.
    pub fn set_width_silently(&self, width: u32) {
        self.width.set(width);
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Total calls to `subscribe`.
    pub fn subscribe_calls(&self) -> usize {
        self.subscribe_calls.get()
    }

    /// Total calls to `unsubscribe`, successful or not.
    pub fn unsubscribe_calls(&self) -> usize {
        self.unsubscribe_calls.get()
    }

    /// Total listener invocations so far.
    pub fn dispatched(&self) -> usize {
        self.dispatched.get()
    }
}

impl ViewportHost for MockViewport {
    fn width_px(&self) -> u32 {
        self.width.get()
    }

    fn subscribe(&self, trigger: Trigger, listener: ViewportListener) -> ListenerId {
        self.subscribe_calls.set(self.subscribe_calls.get() + 1);
        self.listeners.add(trigger, listener, self.width.get())
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        self.unsubscribe_calls.set(self.unsubscribe_calls.get() + 1);
        self.listeners.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_calls() {
        let host = MockViewport::new(800);
        let id = host.subscribe(Trigger::Resize, Rc::new(|_| {}));
        assert_eq!(host.subscribe_calls(), 1);
        assert_eq!(host.listener_count(), 1);

        assert!(host.unsubscribe(id));
        assert!(!host.unsubscribe(id));
        assert_eq!(host.unsubscribe_calls(), 2);
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn test_set_width_dispatches() {
        let host = MockViewport::new(800);
        let seen = Rc::new(Cell::new(0));
        let s = seen.clone();
        let _id = host.subscribe(Trigger::Resize, Rc::new(move |w| s.set(w)));

        host.set_width(640);
        assert_eq!(seen.get(), 640);
        assert_eq!(host.width_px(), 640);
        assert_eq!(host.dispatched(), 1);
    }

    #[test]
    fn test_set_width_silently_does_not_dispatch() {
        let host = MockViewport::new(800);
        let _id = host.subscribe(Trigger::Resize, Rc::new(|_| panic!("should not run")));
        host.set_width_silently(300);
        assert_eq!(host.width_px(), 300);
    }
}
