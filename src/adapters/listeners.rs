//! Listener bookkeeping shared by the viewport hosts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::traits::{ListenerId, Trigger, ViewportListener};

struct Entry {
    id: ListenerId,
    trigger: Trigger,
    listener: ViewportListener,
    /// Match state as of the last report this listener received.
    last_seen: Cell<Option<bool>>,
}

/// Registered viewport listeners, dispatched in registration order.
#[derive(Default)]
pub struct ListenerSet {
    entries: RefCell<Vec<Entry>>,
    next_id: Cell<u64>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. `width` is the host's width at registration and
    /// seeds the match state boundary listeners compare against.
    pub fn add(&self, trigger: Trigger, listener: ViewportListener, width: u32) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.entries.borrow_mut().push(Entry {
            id,
            trigger,
            listener,
            last_seen: Cell::new(trigger.matches(width)),
        });
        id
    }

    pub fn remove(&self, id: ListenerId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        entries.len() != before
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.borrow().iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver a width report to every listener whose trigger fires.
    ///
    /// Returns how many listeners ran.
    pub fn dispatch(&self, width: u32) -> usize {
        let snapshot: Vec<(ListenerId, ViewportListener)> = self
            .entries
            .borrow()
            .iter()
            .filter(|e| e.trigger.fires(e.last_seen.get(), width))
            .map(|e| {
                e.last_seen.set(e.trigger.matches(width));
                (e.id, Rc::clone(&e.listener))
            })
            .collect();

        let mut ran = 0;
        for (id, listener) in snapshot {
            // A listener earlier in this round may have removed this one.
            if !self.contains(id) {
                continue;
            }
            listener(width);
            ran += 1;
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::Breakpoint;
    use std::cell::RefCell;

    #[test]
    fn test_dispatch_filters_by_trigger() {
        let set = ListenerSet::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l = log.clone();
        set.add(
            Trigger::Resize,
            Rc::new(move |w| l.borrow_mut().push(("resize", w))),
            1024,
        );
        let l = log.clone();
        set.add(
            Trigger::Boundary(Breakpoint::MOBILE),
            Rc::new(move |w| l.borrow_mut().push(("boundary", w))),
            1024,
        );

        assert_eq!(set.dispatch(900), 1);
        assert_eq!(set.dispatch(500), 2);

        assert_eq!(
            *log.borrow(),
            vec![("resize", 900), ("resize", 500), ("boundary", 500)]
        );
    }

    #[test]
    fn test_remove_returns_false_for_unknown_id() {
        let set = ListenerSet::new();
        let id = set.add(Trigger::Resize, Rc::new(|_| {}), 800);
        assert!(set.remove(id));
        assert!(!set.remove(id));
        assert!(set.is_empty());
    }

    #[test]
    fn test_listener_removed_during_dispatch_does_not_run() {
        let set = Rc::new(ListenerSet::new());
        let ran_second = Rc::new(Cell::new(false));
        let second_id = Rc::new(Cell::new(None));

        let set_clone = set.clone();
        let second_clone = second_id.clone();
        set.add(
            Trigger::Resize,
            Rc::new(move |_| {
                if let Some(id) = second_clone.get() {
                    set_clone.remove(id);
                }
            }),
            100,
        );
        let r = ran_second.clone();
        second_id.set(Some(set.add(Trigger::Resize, Rc::new(move |_| r.set(true)), 100)));

        assert_eq!(set.dispatch(200), 1);
        assert!(!ran_second.get());
    }

    #[test]
    fn test_boundary_listener_catches_up_after_missed_report() {
        let set = ListenerSet::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        set.add(
            Trigger::Boundary(Breakpoint::MOBILE),
            Rc::new(move |w| s.borrow_mut().push(w)),
            1024,
        );

        // The report for 500 was coalesced away; 600 is still mobile, unlike
        // the state the listener last saw.
        assert_eq!(set.dispatch(600), 1);
        assert_eq!(set.dispatch(550), 0);
        assert_eq!(set.dispatch(900), 1);
        assert_eq!(*seen.borrow(), vec![600, 900]);
    }
}
