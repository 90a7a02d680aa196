//! docsite - terminal front-end for the map component documentation
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod color_scheme;
pub mod config;
pub mod error;
pub mod reactive;
pub mod router;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod viewport;
