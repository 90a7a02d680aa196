//! Crate-level error type.
//!
//! Each concern has its own error enum; [`DocsiteError`] unifies them for
//! callers that just want to bubble up with `?`.

use thiserror::Error;

pub use crate::config::ConfigError;
pub use crate::router::RouterError;
pub use crate::viewport::BreakpointError;

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum DocsiteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Router(#[from] RouterError),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl DocsiteError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DocsiteError::Config(_) => "E_CONFIG",
            DocsiteError::Router(_) => "E_ROUTE",
            DocsiteError::Terminal(_) => "E_TERM",
        }
    }
}

impl From<BreakpointError> for DocsiteError {
    fn from(err: BreakpointError) -> Self {
        DocsiteError::Config(err.into())
    }
}

/// Result alias used across the crate.
pub type DocsiteResult<T> = Result<T, DocsiteError>;
