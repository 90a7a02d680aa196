//! Responsive viewport state.
//!
//! [`ViewportClassifier`] answers "is the viewport mobile-sized?" as a
//! reactive value, following the host's resize notifications for as long as
//! its owning element is active.
//!
//! Two initialization policies are supported, see [`InitPolicy`]:
//!
//! | Policy | First value | Host trigger |
//! |--------|-------------|--------------|
//! | `Eager` | measured in the constructor | every resize |
//! | `Deferred` | `Unmeasured` until `activate()` | breakpoint crossings |

pub mod breakpoint;
pub mod classifier;

pub use breakpoint::{Breakpoint, BreakpointError, MOBILE_BREAKPOINT_PX};
pub use classifier::{use_is_mobile, use_mobile, InitPolicy, ViewportClassifier, ViewportState};
