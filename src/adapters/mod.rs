//! Concrete implementations of the host traits.
//!
//! # Adapters
//!
//! - [`TerminalViewport`] - Viewport host backed by crossterm
//! - [`EnvColorScheme`] - Color-scheme preference from `COLORFGBG`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockViewport`] - Settable width, counted subscriptions
//! - [`mock::MockColorScheme`] - Settable dark/light preference

pub mod listeners;
pub mod mock;
pub mod terminal;

pub use mock::{MockColorScheme, MockViewport};
pub use terminal::{EnvColorScheme, TerminalViewport, DEFAULT_CELL_WIDTH_PX};
