//! Viewport host trait abstraction.
//!
//! The viewport classifier never talks to a terminal or a browser directly.
//! It is handed a [`ViewportHost`] that can report the current width and
//! deliver change notifications, so tests can drive it with a mock.

use std::fmt;
use std::rc::Rc;

use crate::viewport::Breakpoint;

/// Handle identifying a registered listener, returned by
/// [`ViewportHost::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Which host events a listener wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Every width report from the host, whether or not anything crossed.
    Resize,
    /// Only reports that put the width on the other side of the breakpoint
    /// from where this listener last saw it, like a `matchMedia` change
    /// event.
    Boundary(Breakpoint),
}

impl Trigger {
    /// The match state this trigger tracks at `width`. `None` for triggers
    /// that fire on every report.
    pub fn matches(&self, width: u32) -> Option<bool> {
        match self {
            Trigger::Resize => None,
            Trigger::Boundary(bp) => Some(bp.is_mobile(width)),
        }
    }

    /// Whether a report of `width` should be delivered to a listener whose
    /// last seen match state is `last_seen`.
    ///
    /// Hosts may coalesce reports, so the comparison is against what the
    /// listener last saw rather than the previous reported width.
    pub fn fires(&self, last_seen: Option<bool>, width: u32) -> bool {
        match self {
            Trigger::Resize => true,
            Trigger::Boundary(_) => self.matches(width) != last_seen,
        }
    }
}

/// Callback invoked with the new viewport width in pixels.
pub type ViewportListener = Rc<dyn Fn(u32)>;

/// Host capability for reading and observing the viewport width.
///
/// Implementations dispatch synchronously on the UI thread. A listener
/// removed with [`unsubscribe`](ViewportHost::unsubscribe) must never be
/// called again, even if it was removed while a dispatch was in progress.
///
/// # Example
///
/// ```
/// use docsite::adapters::mock::MockViewport;
/// use docsite::traits::{Trigger, ViewportHost};
/// use std::rc::Rc;
///
/// let host = MockViewport::new(1024);
/// let id = host.subscribe(Trigger::Resize, Rc::new(|w| println!("width {w}")));
/// host.set_width(800);
/// assert!(host.unsubscribe(id));
/// ```
pub trait ViewportHost {
    /// Current viewport width in pixels, read synchronously.
    fn width_px(&self) -> u32;

    /// Register a listener for the given trigger.
    fn subscribe(&self, trigger: Trigger, listener: ViewportListener) -> ListenerId;

    /// Remove a listener. Returns `false` if it was not registered.
    fn unsubscribe(&self, id: ListenerId) -> bool;
}

impl<H: ViewportHost + ?Sized> ViewportHost for Rc<H> {
    fn width_px(&self) -> u32 {
        (**self).width_px()
    }

    fn subscribe(&self, trigger: Trigger, listener: ViewportListener) -> ListenerId {
        (**self).subscribe(trigger, listener)
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        (**self).unsubscribe(id)
    }
}
