//! Mobile breakpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default mobile breakpoint in pixels.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Rejected breakpoint values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakpointError {
    #[error("breakpoint must be a positive pixel width, got {0}")]
    NotPositive(i64),

    #[error("breakpoint {0}px is larger than any supported viewport")]
    TooLarge(i64),
}

/// Width threshold below which a viewport is classified as mobile.
///
/// The boundary is exclusive on the low side: a width equal to the
/// breakpoint is *not* mobile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Breakpoint(u32);

impl Breakpoint {
    /// The 768px breakpoint used across the site.
    pub const MOBILE: Breakpoint = Breakpoint(MOBILE_BREAKPOINT_PX);

    /// Create a breakpoint.
    ///
    /// # Panics
    ///
    /// Panics if `px` is zero. A zero breakpoint would classify every
    /// viewport as desktop, which is always a programming error.
    pub fn new(px: u32) -> Self {
        assert!(px > 0, "breakpoint must be a positive pixel width");
        Self(px)
    }

    /// Fallible constructor for values that come from configuration.
    pub fn try_new(px: i64) -> Result<Self, BreakpointError> {
        if px <= 0 {
            return Err(BreakpointError::NotPositive(px));
        }
        let px = u32::try_from(px).map_err(|_| BreakpointError::TooLarge(px))?;
        Ok(Self(px))
    }

    /// Breakpoint in pixels.
    pub fn px(self) -> u32 {
        self.0
    }

    /// Classify a viewport width.
    pub fn is_mobile(self, width_px: u32) -> bool {
        width_px < self.0
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::MOBILE
    }
}

impl TryFrom<i64> for Breakpoint {
    type Error = BreakpointError;

    fn try_from(px: i64) -> Result<Self, Self::Error> {
        Self::try_new(px)
    }
}

impl From<Breakpoint> for u32 {
    fn from(bp: Breakpoint) -> Self {
        bp.0
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_exclusive_on_low_side() {
        let bp = Breakpoint::MOBILE;
        assert!(bp.is_mobile(0));
        assert!(bp.is_mobile(767));
        assert!(!bp.is_mobile(768));
        assert!(!bp.is_mobile(1024));
    }

    #[test]
    #[should_panic(expected = "positive pixel width")]
    fn test_zero_breakpoint_panics() {
        let _ = Breakpoint::new(0);
    }

    #[test]
    fn test_try_new_rejects_non_positive() {
        assert_eq!(Breakpoint::try_new(0), Err(BreakpointError::NotPositive(0)));
        assert_eq!(Breakpoint::try_new(-5), Err(BreakpointError::NotPositive(-5)));
        assert_eq!(
            Breakpoint::try_new(i64::from(u32::MAX) + 1),
            Err(BreakpointError::TooLarge(i64::from(u32::MAX) + 1))
        );
        assert_eq!(Breakpoint::try_new(640), Ok(Breakpoint::new(640)));
    }

    #[test]
    fn test_deserialize_validates() {
        let bp: Breakpoint = serde_json::from_str("1024").unwrap();
        assert_eq!(bp.px(), 1024);
        assert!(serde_json::from_str::<Breakpoint>("0").is_err());
        assert!(serde_json::from_str::<Breakpoint>("-1").is_err());
    }
}
