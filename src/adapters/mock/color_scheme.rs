//! Settable color-scheme preference for testing.

use std::cell::Cell;

use crate::traits::ColorSchemeSource;

/// A [`ColorSchemeSource`] whose answer is set by the test.
#[derive(Debug, Default)]
pub struct MockColorScheme {
    dark: Cell<bool>,
}

impl MockColorScheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            dark: Cell::new(prefers_dark),
        }
    }

    /// Simulate the user switching their OS theme.
    pub fn set_prefers_dark(&self, dark: bool) {
        self.dark.set(dark);
    }
}

impl ColorSchemeSource for MockColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }
}
