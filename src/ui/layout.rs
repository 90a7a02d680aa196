//! Responsive layout decisions.
//!
//! The viewport classifier decides *whether* the site is in its mobile
//! layout; `LayoutContext` turns that decision plus the terminal area into
//! concrete sizes.

use crate::viewport::ViewportState;

/// Minimum sidebar width in columns.
pub const MIN_SIDEBAR_WIDTH: u16 = 18;
/// Maximum sidebar width in columns.
pub const MAX_SIDEBAR_WIDTH: u16 = 28;

/// Overall arrangement of navigation and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Desktop: navigation sidebar beside the page.
    Sidebar,
    /// Mobile: single column, compact navigation bar above the page.
    Stacked,
    /// Viewport not measured yet: render the frame only, no guess.
    Pending,
}

impl From<ViewportState> for LayoutMode {
    fn from(state: ViewportState) -> Self {
        match state {
            ViewportState::Unmeasured => LayoutMode::Pending,
            ViewportState::Measured(true) => LayoutMode::Stacked,
            ViewportState::Measured(false) => LayoutMode::Sidebar,
        }
    }
}

/// Terminal area plus the layout mode.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
    pub mode: LayoutMode,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16, mode: LayoutMode) -> Self {
        Self {
            width,
            height,
            mode,
        }
    }

    /// Sidebar width: 25% of the width, clamped, and never more than half.
    /// Zero outside the sidebar layout.
    pub fn sidebar_width(&self) -> u16 {
        if self.mode != LayoutMode::Sidebar {
            return 0;
        }
        let quarter = ((self.width as u32 * 25) / 100) as u16;
        quarter
            .clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH)
            .min(self.width / 2)
    }

    /// Width left for page content.
    pub fn content_width(&self) -> u16 {
        self.width.saturating_sub(self.sidebar_width())
    }

    /// Header rows; the mobile header drops its border padding.
    pub fn header_height(&self) -> u16 {
        match self.mode {
            LayoutMode::Stacked => 1,
            LayoutMode::Sidebar | LayoutMode::Pending => 3,
        }
    }

    /// Rows for the compact navigation bar in the stacked layout.
    pub fn nav_bar_height(&self) -> u16 {
        if self.mode == LayoutMode::Stacked {
            1
        } else {
            0
        }
    }
}
