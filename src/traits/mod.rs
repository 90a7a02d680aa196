//! Trait abstractions for the host environment.
//!
//! Components receive these capabilities by injection so they can be driven
//! by mocks in tests and by crossterm in the binary.
//!
//! # Traits
//!
//! - [`ViewportHost`] - Viewport width reads and change notifications
//! - [`ColorSchemeSource`] - System dark/light preference

pub mod color_scheme;
pub mod viewport;

pub use color_scheme::ColorSchemeSource;
pub use viewport::{ListenerId, Trigger, ViewportHost, ViewportListener};
