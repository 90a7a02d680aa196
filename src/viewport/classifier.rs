//! Reactive mobile/desktop classification of the viewport.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::breakpoint::Breakpoint;
use crate::reactive::{ReadSignal, Signal};
use crate::traits::{ListenerId, Trigger, ViewportHost};

/// Classification of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportState {
    /// No measurement has happened yet. This is not the same as desktop.
    #[default]
    Unmeasured,
    /// Classified by the last measurement; `true` means mobile.
    Measured(bool),
}

impl ViewportState {
    /// `None` while unmeasured.
    pub fn as_option(self) -> Option<bool> {
        match self {
            ViewportState::Unmeasured => None,
            ViewportState::Measured(mobile) => Some(mobile),
        }
    }

    pub fn is_measured(self) -> bool {
        matches!(self, ViewportState::Measured(_))
    }
}

impl fmt::Display for ViewportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportState::Unmeasured => f.write_str("unmeasured"),
            ViewportState::Measured(true) => f.write_str("mobile"),
            ViewportState::Measured(false) => f.write_str("desktop"),
        }
    }
}

/// When the first measurement happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitPolicy {
    /// Measure synchronously in the constructor and follow every resize.
    /// The value is never [`ViewportState::Unmeasured`].
    Eager,
    /// Stay unmeasured until [`ViewportClassifier::activate`], then follow
    /// breakpoint crossings only.
    #[default]
    Deferred,
}

impl InitPolicy {
    fn trigger(self, breakpoint: Breakpoint) -> Trigger {
        match self {
            InitPolicy::Eager => Trigger::Resize,
            InitPolicy::Deferred => Trigger::Boundary(breakpoint),
        }
    }
}

impl std::str::FromStr for InitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eager" => Ok(InitPolicy::Eager),
            "deferred" => Ok(InitPolicy::Deferred),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Idle,
    Active(ListenerId),
    Deactivated,
}

/// Tracks whether the viewport is narrower than a breakpoint.
///
/// The classifier owns exactly one host subscription, created by
/// [`activate`](Self::activate) and removed by
/// [`deactivate`](Self::deactivate) or on drop. After teardown the last value
/// stays readable but never changes again.
///
/// # Example
///
/// ```
/// use docsite::adapters::mock::MockViewport;
/// use docsite::viewport::{Breakpoint, ViewportClassifier, ViewportState};
///
/// let host = MockViewport::shared(1024);
/// let mut classifier = ViewportClassifier::eager(host.clone(), Breakpoint::MOBILE);
/// assert_eq!(classifier.state(), ViewportState::Measured(false));
///
/// classifier.activate();
/// host.set_width(500);
/// assert_eq!(classifier.state(), ViewportState::Measured(true));
/// ```
pub struct ViewportClassifier {
    host: Rc<dyn ViewportHost>,
    breakpoint: Breakpoint,
    policy: InitPolicy,
    state: Signal<ViewportState>,
    lifecycle: Lifecycle,
}

impl ViewportClassifier {
    /// Create a classifier with an explicit initialization policy.
    pub fn observe(host: Rc<dyn ViewportHost>, breakpoint: Breakpoint, policy: InitPolicy) -> Self {
        let initial = match policy {
            InitPolicy::Eager => ViewportState::Measured(breakpoint.is_mobile(host.width_px())),
            InitPolicy::Deferred => ViewportState::Unmeasured,
        };
        tracing::debug!(%breakpoint, ?policy, state = %initial, "viewport classifier created");

        Self {
            host,
            breakpoint,
            policy,
            state: Signal::new(initial),
            lifecycle: Lifecycle::Idle,
        }
    }

    /// Measured from construction, updated on every resize.
    pub fn eager(host: Rc<dyn ViewportHost>, breakpoint: Breakpoint) -> Self {
        Self::observe(host, breakpoint, InitPolicy::Eager)
    }

    /// Unmeasured until activation, updated on breakpoint crossings.
    pub fn deferred(host: Rc<dyn ViewportHost>, breakpoint: Breakpoint) -> Self {
        Self::observe(host, breakpoint, InitPolicy::Deferred)
    }

    /// Subscribe to the host and take the first measurement.
    ///
    /// Only the first call has any effect; the owning element activates once.
    pub fn activate(&mut self) {
        match self.lifecycle {
            Lifecycle::Idle => {}
            Lifecycle::Active(_) => {
                tracing::warn!("viewport classifier activated twice, ignoring");
                return;
            }
            Lifecycle::Deactivated => {
                tracing::warn!("viewport classifier activated after teardown, ignoring");
                return;
            }
        }

        let weak = self.state.downgrade();
        let breakpoint = self.breakpoint;
        let id = self.host.subscribe(
            self.policy.trigger(breakpoint),
            Rc::new(move |width| {
                if let Some(state) = weak.upgrade() {
                    let mobile = breakpoint.is_mobile(width);
                    tracing::debug!(width, mobile, "viewport reclassified");
                    state.set(ViewportState::Measured(mobile));
                }
            }),
        );
        self.lifecycle = Lifecycle::Active(id);
        tracing::debug!(%id, "viewport classifier activated");

        // Subscribe first, then measure, so no event between the two is lost.
        let measured = ViewportState::Measured(self.breakpoint.is_mobile(self.host.width_px()));
        match self.policy {
            InitPolicy::Deferred => self.state.set(measured),
            // The eager value may be stale if the width changed between
            // construction and activation.
            InitPolicy::Eager => {
                self.state.set_if_changed(measured);
            }
        }
    }

    /// Remove the host subscription. Safe to call any number of times,
    /// including before [`activate`](Self::activate).
    pub fn deactivate(&mut self) {
        if let Lifecycle::Active(id) = self.lifecycle {
            let removed = self.host.unsubscribe(id);
            tracing::debug!(%id, removed, "viewport classifier deactivated");
            self.lifecycle = Lifecycle::Deactivated;
        }
    }

    /// Current classification.
    pub fn state(&self) -> ViewportState {
        self.state.get()
    }

    /// `Some(true)` for mobile, `Some(false)` for desktop, `None` while
    /// unmeasured.
    pub fn is_mobile(&self) -> Option<bool> {
        self.state().as_option()
    }

    /// Read-only reactive handle for view code.
    pub fn signal(&self) -> ReadSignal<ViewportState> {
        self.state.reader()
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn policy(&self) -> InitPolicy {
        self.policy
    }

    /// Whether a host subscription is currently held.
    pub fn is_active(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Active(_))
    }
}

impl Drop for ViewportClassifier {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl fmt::Debug for ViewportClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportClassifier")
            .field("breakpoint", &self.breakpoint)
            .field("policy", &self.policy)
            .field("state", &self.state())
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}

/// Eager classifier at the default 768px breakpoint.
pub fn use_mobile(host: Rc<dyn ViewportHost>) -> ViewportClassifier {
    ViewportClassifier::eager(host, Breakpoint::MOBILE)
}

/// Deferred classifier at the default 768px breakpoint.
pub fn use_is_mobile(host: Rc<dyn ViewportHost>) -> ViewportClassifier {
    ViewportClassifier::deferred(host, Breakpoint::MOBILE)
}
