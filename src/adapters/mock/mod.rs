//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockViewport`] - Viewport host with a settable width and call counters
//! - [`MockColorScheme`] - Settable system dark/light preference

pub mod color_scheme;
pub mod viewport;

pub use color_scheme::MockColorScheme;
pub use viewport::MockViewport;
