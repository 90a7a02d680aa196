//! Documentation route table and history-style navigation.

use std::fmt;

use thiserror::Error;

use crate::reactive::{ReadSignal, Signal};

/// Routing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("no page at `{0}`")]
    NotFound(String),
}

/// Every page of the documentation site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    GettingStarted,
    Installation,
    BasicMap,
    Markers,
    Popups,
    Routes,
    Controls,
    Clusters,
    AdvancedUsage,
    ApiReference,
}

impl Page {
    /// Title shown in navigation and page headers.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::GettingStarted => "Getting Started",
            Page::Installation => "Installation",
            Page::BasicMap => "Basic Map",
            Page::Markers => "Markers",
            Page::Popups => "Popups",
            Page::Routes => "Routes",
            Page::Controls => "Controls",
            Page::Clusters => "Clusters",
            Page::AdvancedUsage => "Advanced Usage",
            Page::ApiReference => "API Reference",
        }
    }

    /// One-line summary shown on the page body.
    pub fn summary(self) -> &'static str {
        match self {
            Page::Home => "Interactive maps as components.",
            Page::GettingStarted => "Render your first map in a few lines.",
            Page::Installation => "Add the package and its stylesheet.",
            Page::BasicMap => "Center, zoom and tile layers.",
            Page::Markers => "Place and customize markers.",
            Page::Popups => "Attach popups to markers and coordinates.",
            Page::Routes => "Draw polylines and routes between points.",
            Page::Controls => "Zoom, scale and fullscreen controls.",
            Page::Clusters => "Group dense markers into clusters.",
            Page::AdvancedUsage => "Events, custom layers and map instances.",
            Page::ApiReference => "Every component, prop and event.",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A path bound to a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
}

const DOC_ROUTES: &[Route] = &[
    Route { path: "/", page: Page::Home },
    Route { path: "/docs/getting-started", page: Page::GettingStarted },
    Route { path: "/docs/installation", page: Page::Installation },
    Route { path: "/docs/basic-map", page: Page::BasicMap },
    Route { path: "/docs/markers", page: Page::Markers },
    Route { path: "/docs/popups", page: Page::Popups },
    Route { path: "/docs/routes", page: Page::Routes },
    Route { path: "/docs/controls", page: Page::Controls },
    Route { path: "/docs/clusters", page: Page::Clusters },
    Route { path: "/docs/advanced-usage", page: Page::AdvancedUsage },
    Route { path: "/docs/api-reference", page: Page::ApiReference },
];

/// Normalize a requested path for matching.
///
/// Drops any query string or fragment, trailing slashes and letter case.
/// An empty result becomes `/`.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    let mut normalized = trimmed.to_ascii_lowercase();
    if !normalized.starts_with('/') {
        normalized.insert(0, '/');
    }
    normalized
}

/// Static mapping of paths to pages.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [Route],
}

impl RouteTable {
    /// The documentation site's routes, in navigation order.
    pub fn docs() -> Self {
        Self { routes: DOC_ROUTES }
    }

    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Find the route for a requested path.
    pub fn resolve(&self, path: &str) -> Option<&'static Route> {
        let normalized = normalize_path(path);
        self.routes.iter().find(|r| r.path == normalized)
    }

    /// Path of a page.
    pub fn path_of(&self, page: Page) -> Option<&'static str> {
        self.routes.iter().find(|r| r.page == page).map(|r| r.path)
    }

    /// Position of a page in navigation order.
    pub fn index_of(&self, page: Page) -> Option<usize> {
        self.routes.iter().position(|r| r.page == page)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::docs()
    }
}

/// Most history entries a [`Router`] keeps; the oldest are dropped first.
pub const HISTORY_LIMIT: usize = 100;

/// Navigation over a [`RouteTable`] with back/forward history.
///
/// # Example
///
/// ```
/// use docsite::router::{Page, RouteTable, Router};
///
/// let mut router = Router::new(RouteTable::docs(), "/").unwrap();
/// router.push("/docs/markers").unwrap();
/// assert_eq!(router.current_page(), Page::Markers);
///
/// router.back();
/// assert_eq!(router.current_page(), Page::Home);
/// ```
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
    history: Vec<&'static Route>,
    cursor: usize,
    current: Signal<Page>,
}

impl Router {
    /// Create a router starting at `start`.
    pub fn new(table: RouteTable, start: &str) -> Result<Self, RouterError> {
        let route = table
            .resolve(start)
            .ok_or_else(|| RouterError::NotFound(start.to_string()))?;
        Ok(Self {
            table,
            history: vec![route],
            cursor: 0,
            current: Signal::new(route.page),
        })
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Canonical path of the current entry.
    pub fn current_path(&self) -> &'static str {
        self.history[self.cursor].path
    }

    pub fn current_page(&self) -> Page {
        self.history[self.cursor].page
    }

    /// Reactive current page.
    pub fn page_signal(&self) -> ReadSignal<Page> {
        self.current.reader()
    }

    /// Navigate to `path`, discarding any forward history.
    ///
    /// Pushing the current path leaves history untouched.
    pub fn push(&mut self, path: &str) -> Result<Page, RouterError> {
        let route = self
            .table
            .resolve(path)
            .ok_or_else(|| {
                tracing::debug!(path, "route not found");
                RouterError::NotFound(path.to_string())
            })?;

        if route.path == self.current_path() {
            return Ok(route.page);
        }

        self.history.truncate(self.cursor + 1);
        self.history.push(route);
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
        self.cursor = self.history.len() - 1;
        tracing::info!(path = route.path, page = %route.page, "navigated");
        self.current.set(route.page);
        Ok(route.page)
    }

    /// Navigate to a page by value.
    pub fn push_page(&mut self, page: Page) -> Result<Page, RouterError> {
        let path = self
            .table
            .path_of(page)
            .ok_or_else(|| RouterError::NotFound(page.title().to_string()))?;
        self.push(path)
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Step back in history. Returns the new page, or `None` at the start.
    pub fn back(&mut self) -> Option<Page> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.settle())
    }

    /// Step forward in history. Returns the new page, or `None` at the end.
    pub fn forward(&mut self) -> Option<Page> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.settle())
    }

    fn settle(&mut self) -> Page {
        let page = self.current_page();
        tracing::debug!(path = self.current_path(), "history moved");
        self.current.set(page);
        page
    }
}
