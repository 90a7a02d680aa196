//! crossterm-backed host adapters.
//!
//! The terminal stands in for the browser window: its pixel width is the
//! viewport width and `Event::Resize` is the resize notification. Terminals
//! that do not report pixel sizes fall back to `columns × cell_width_px`.

use std::cell::Cell;
use std::io;

use crossterm::terminal;

use crate::adapters::listeners::ListenerSet;
use crate::traits::{ColorSchemeSource, ListenerId, Trigger, ViewportHost, ViewportListener};

/// Assumed cell width when the terminal does not report pixel sizes.
pub const DEFAULT_CELL_WIDTH_PX: u32 = 8;

/// Compute the viewport width from what the terminal reported.
///
/// `pixel_width` is what `window_size()` returned; many terminals return 0
/// there, in which case the column count is scaled by `cell_width_px`.
pub fn viewport_width(columns: u16, pixel_width: u16, cell_width_px: u32) -> u32 {
    if pixel_width > 0 {
        u32::from(pixel_width)
    } else {
        u32::from(columns).saturating_mul(cell_width_px)
    }
}

/// Viewport host backed by the controlling terminal.
///
/// The event loop must forward every `Event::Resize` to
/// [`handle_resize`](TerminalViewport::handle_resize); that call is what
/// dispatches to listeners.
pub struct TerminalViewport {
    cell_width_px: u32,
    width: Cell<u32>,
    listeners: ListenerSet,
}

impl TerminalViewport {
    /// Query the terminal for its current size.
    pub fn detect(cell_width_px: u32) -> io::Result<Self> {
        let (columns, _rows) = terminal::size()?;
        let pixel_width = pixel_width();
        let width = viewport_width(columns, pixel_width, cell_width_px);
        tracing::debug!(columns, pixel_width, width, "detected terminal viewport");
        Ok(Self::with_width(width, cell_width_px))
    }

    /// Build a host with a known width, without touching the terminal.
    pub fn with_width(width: u32, cell_width_px: u32) -> Self {
        Self {
            cell_width_px,
            width: Cell::new(width),
            listeners: ListenerSet::new(),
        }
    }

    /// Handle a terminal resize event and dispatch to listeners.
    pub fn handle_resize(&self, columns: u16, rows: u16) {
        let width = viewport_width(columns, pixel_width(), self.cell_width_px);
        self.apply_width(width, rows);
    }

    fn apply_width(&self, width: u32, rows: u16) {
        let previous = self.width.replace(width);
        let ran = self.listeners.dispatch(width);
        tracing::trace!(previous, width, rows, listeners = ran, "terminal resized");
    }
}

fn pixel_width() -> u16 {
    terminal::window_size().map(|ws| ws.width).unwrap_or(0)
}

impl ViewportHost for TerminalViewport {
    fn width_px(&self) -> u32 {
        self.width.get()
    }

    fn subscribe(&self, trigger: Trigger, listener: ViewportListener) -> ListenerId {
        let id = self.listeners.add(trigger, listener, self.width.get());
        tracing::debug!(%id, ?trigger, "viewport listener added");
        id
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(id);
        tracing::debug!(%id, removed, "viewport listener removed");
        removed
    }
}

/// System color-scheme preference read from `COLORFGBG`.
///
/// Terminals such as rxvt and Konsole export `COLORFGBG="fg;bg"`. Background
/// indices 7 and 9–15 are light colors; everything else, and a missing
/// variable, is treated as dark.
#[derive(Debug, Clone, Copy)]
pub struct EnvColorScheme {
    dark: bool,
}

impl EnvColorScheme {
    /// Read the preference from the environment once.
    pub fn from_env() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }

    /// Interpret a `COLORFGBG` value.
    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let background = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());

        let dark = match background {
            Some(7) | Some(9..=15) => false,
            _ => true,
        };
        Self { dark }
    }
}

impl ColorSchemeSource for EnvColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::{use_is_mobile, ViewportState};
    use std::rc::Rc;

    #[test]
    fn test_viewport_width_prefers_pixels() {
        assert_eq!(viewport_width(80, 1280, 8), 1280);
    }

    #[test]
    fn test_viewport_width_falls_back_to_columns() {
        assert_eq!(viewport_width(80, 0, 8), 640);
        assert_eq!(viewport_width(96, 0, 8), 768);
        assert_eq!(viewport_width(120, 0, 10), 1200);
    }

    #[test]
    fn test_apply_width_dispatches_to_listeners() {
        let host = TerminalViewport::with_width(1024, DEFAULT_CELL_WIDTH_PX);
        let seen = Rc::new(Cell::new(0));
        let s = seen.clone();
        let id = host.subscribe(Trigger::Resize, Rc::new(move |w| s.set(w)));

        host.apply_width(500, 24);
        assert_eq!(seen.get(), 500);
        assert_eq!(host.width_px(), 500);

        assert!(host.unsubscribe(id));
        host.apply_width(900, 24);
        assert_eq!(seen.get(), 500);
    }

    #[test]
    fn test_deferred_classifier_follows_terminal_resizes() {
        let host = Rc::new(TerminalViewport::with_width(1024, DEFAULT_CELL_WIDTH_PX));
        let mut classifier = use_is_mobile(host.clone());
        assert_eq!(classifier.state(), ViewportState::Unmeasured);

        classifier.activate();
        assert_eq!(classifier.is_mobile(), Some(false));

        host.apply_width(500, 24);
        assert_eq!(classifier.is_mobile(), Some(true));

        host.apply_width(1200, 24);
        assert_eq!(classifier.is_mobile(), Some(false));

        classifier.deactivate();
        host.apply_width(500, 24);
        assert_eq!(classifier.is_mobile(), Some(false));
    }

    #[test]
    fn test_colorfgbg_parsing() {
        assert!(EnvColorScheme::from_colorfgbg(None).prefers_dark());
        assert!(EnvColorScheme::from_colorfgbg(Some("15;0")).prefers_dark());
        assert!(EnvColorScheme::from_colorfgbg(Some("7;8")).prefers_dark());
        assert!(!EnvColorScheme::from_colorfgbg(Some("0;15")).prefers_dark());
        assert!(!EnvColorScheme::from_colorfgbg(Some("0;default;7")).prefers_dark());
        assert!(EnvColorScheme::from_colorfgbg(Some("garbage")).prefers_dark());
    }
}
