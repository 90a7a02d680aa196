//! Application shell: router, dark mode and viewport state in one place.
//!
//! Mirrors a mounted single-page app. [`App::mount`] activates the
//! responsive state, [`App::unmount`] tears it down; everything else is
//! navigation and preference plumbing driven by key presses.

mod handlers;

use std::rc::Rc;

use crate::color_scheme::DarkMode;
use crate::config::SiteConfig;
use crate::error::DocsiteResult;
use crate::router::{Page, RouteTable, Router, RouterError};
use crate::traits::{ColorSchemeSource, ViewportHost};
use crate::ui::LayoutMode;
use crate::viewport::{ViewportClassifier, ViewportState};

/// The documentation shell.
pub struct App {
    config: SiteConfig,
    router: Router,
    dark_mode: DarkMode,
    viewport: ViewportClassifier,
    /// Highlighted navigation entry; not necessarily the open page
    selected: usize,
    mounted: bool,
    running: bool,
}

impl App {
    /// Build the shell from configuration and host capabilities.
    pub fn new(
        config: SiteConfig,
        host: Rc<dyn ViewportHost>,
        color_scheme: Rc<dyn ColorSchemeSource>,
    ) -> DocsiteResult<Self> {
        config.validate()?;

        let router = Router::new(RouteTable::docs(), &config.start_path)?;
        let selected = router
            .table()
            .index_of(router.current_page())
            .unwrap_or(0);
        let dark_mode = DarkMode::new(color_scheme, config.color_scheme);
        let viewport = ViewportClassifier::observe(host, config.breakpoint_px, config.viewport_init);

        Ok(Self {
            config,
            router,
            dark_mode,
            viewport,
            selected,
            mounted: false,
            running: true,
        })
    }

    /// Activate lifecycle-bound state. Idempotent.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.viewport.activate();
        self.mounted = true;
        tracing::info!(
            page = %self.current_page(),
            viewport = %self.viewport.state(),
            breakpoint = %self.config.breakpoint_px,
            "app mounted"
        );
    }

    /// Tear down lifecycle-bound state. Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.viewport.deactivate();
        self.mounted = false;
        tracing::info!("app unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the event loop to exit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn current_page(&self) -> Page {
        self.router.current_page()
    }

    pub fn dark_mode(&self) -> &DarkMode {
        &self.dark_mode
    }

    pub fn viewport(&self) -> &ViewportClassifier {
        &self.viewport
    }

    pub fn viewport_state(&self) -> ViewportState {
        self.viewport.state()
    }

    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::from(self.viewport_state())
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Move the highlight down, wrapping at the end.
    pub fn select_next(&mut self) {
        let len = self.router.table().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move the highlight up, wrapping at the start.
    pub fn select_previous(&mut self) {
        let len = self.router.table().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Navigate to the highlighted page.
    pub fn open_selected(&mut self) -> Result<Page, RouterError> {
        let routes = self.router.table().routes();
        let route = routes
            .get(self.selected)
            .ok_or_else(|| RouterError::NotFound(format!("#{}", self.selected)))?;
        self.router.push(route.path)
    }

    /// Navigate by path.
    pub fn navigate(&mut self, path: &str) -> Result<Page, RouterError> {
        let page = self.router.push(path)?;
        self.sync_selection();
        Ok(page)
    }

    pub fn back(&mut self) -> Option<Page> {
        let page = self.router.back();
        self.sync_selection();
        page
    }

    pub fn forward(&mut self) -> Option<Page> {
        let page = self.router.forward();
        self.sync_selection();
        page
    }

    /// Flip dark mode, returning the new value.
    pub fn toggle_dark(&mut self) -> bool {
        self.dark_mode.toggle()
    }

    /// The terminal regained focus; the system color scheme may have changed
    /// while it was away.
    pub fn handle_focus_gained(&mut self) {
        self.dark_mode.refresh_system_preference();
    }

    fn sync_selection(&mut self) {
        if let Some(index) = self.router.table().index_of(self.current_page()) {
            self.selected = index;
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}
