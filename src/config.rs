//! Site configuration.
//!
//! Values are layered, lowest precedence first: built-in defaults, the JSON
//! config file, then `DOCSITE_*` environment variables.
//!
//! # Example
//!
//! ```
//! use docsite::config::SiteConfig;
//! use docsite::viewport::InitPolicy;
//!
//! let config = SiteConfig::default()
//!     .with_breakpoint_px(1024)
//!     .with_viewport_init(InitPolicy::Eager);
//! assert!(config.validate().is_ok());
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::DEFAULT_CELL_WIDTH_PX;
use crate::color_scheme::ColorSchemePreference;
use crate::router::RouteTable;
use crate::viewport::{Breakpoint, BreakpointError, InitPolicy};

/// Environment variable overriding the breakpoint.
pub const ENV_BREAKPOINT: &str = "DOCSITE_BREAKPOINT";
/// Environment variable overriding the viewport init policy.
pub const ENV_VIEWPORT_INIT: &str = "DOCSITE_VIEWPORT_INIT";
/// Environment variable overriding the color scheme.
pub const ENV_COLOR_SCHEME: &str = "DOCSITE_COLOR_SCHEME";
/// Environment variable overriding the start path.
pub const ENV_START_PATH: &str = "DOCSITE_START_PATH";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value `{value}` for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error(transparent)]
    Breakpoint(#[from] BreakpointError),

    #[error("unknown color scheme `{0}` (expected auto, light or dark)")]
    UnknownColorScheme(String),

    #[error("unknown viewport init policy `{0}` (expected eager or deferred)")]
    UnknownInitPolicy(String),

    #[error("cell width must be positive")]
    ZeroCellWidth,

    #[error("start path `{0}` does not match any page")]
    UnknownStartPath(String),
}

/// Configuration for the documentation shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Mobile breakpoint (default: 768)
    pub breakpoint_px: Breakpoint,
    /// When the viewport is first measured (default: deferred)
    pub viewport_init: InitPolicy,
    /// Color scheme choice (default: auto)
    pub color_scheme: ColorSchemePreference,
    /// Pixel width of one terminal cell when the terminal reports none (default: 8)
    pub cell_width_px: u32,
    /// Page opened on start (default: "/")
    pub start_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: Breakpoint::MOBILE,
            viewport_init: InitPolicy::default(),
            color_scheme: ColorSchemePreference::default(),
            cell_width_px: DEFAULT_CELL_WIDTH_PX,
            start_path: "/".to_string(),
        }
    }
}

impl SiteConfig {
    /// Set the breakpoint.
    ///
    /// # Panics
    ///
    /// Panics if `px` is zero, like [`Breakpoint::new`].
    pub fn with_breakpoint_px(mut self, px: u32) -> Self {
        self.breakpoint_px = Breakpoint::new(px);
        self
    }

    pub fn with_viewport_init(mut self, policy: InitPolicy) -> Self {
        self.viewport_init = policy;
        self
    }

    pub fn with_color_scheme(mut self, preference: ColorSchemePreference) -> Self {
        self.color_scheme = preference;
        self
    }

    pub fn with_cell_width_px(mut self, px: u32) -> Self {
        self.cell_width_px = px;
        self
    }

    pub fn with_start_path(mut self, path: impl Into<String>) -> Self {
        self.start_path = path.into();
        self
    }

    /// Default config file location, `<config dir>/docsite/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docsite").join("config.json"))
    }

    /// Load from the default file (if it exists) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        let config = base.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit file, then the environment.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::from_file(path)?.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Apply `DOCSITE_*` overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_BREAKPOINT) {
            let px: i64 = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_BREAKPOINT,
                value: value.clone(),
            })?;
            self.breakpoint_px = Breakpoint::try_new(px)?;
        }
        if let Some(value) = lookup(ENV_VIEWPORT_INIT) {
            self.viewport_init = value
                .parse()
                .map_err(ConfigError::UnknownInitPolicy)?;
        }
        if let Some(value) = lookup(ENV_COLOR_SCHEME) {
            self.color_scheme = value.parse()?;
        }
        if let Some(value) = lookup(ENV_START_PATH) {
            self.start_path = value;
        }
        Ok(self)
    }

    /// Check values that cannot be expressed in types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_width_px == 0 {
            return Err(ConfigError::ZeroCellWidth);
        }
        if RouteTable::docs().resolve(&self.start_path).is_none() {
            return Err(ConfigError::UnknownStartPath(self.start_path.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::MOBILE_BREAKPOINT_PX;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.breakpoint_px.px(), MOBILE_BREAKPOINT_PX);
        assert_eq!(config.viewport_init, InitPolicy::Deferred);
        assert_eq!(config.color_scheme, ColorSchemePreference::Auto);
        assert_eq!(config.cell_width_px, 8);
        assert_eq!(config.start_path, "/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::default()
            .apply_overrides(env(&[
                (ENV_BREAKPOINT, "1024"),
                (ENV_VIEWPORT_INIT, "eager"),
                (ENV_COLOR_SCHEME, "light"),
                (ENV_START_PATH, "/docs/markers"),
            ]))
            .unwrap();

        assert_eq!(config.breakpoint_px.px(), 1024);
        assert_eq!(config.viewport_init, InitPolicy::Eager);
        assert_eq!(config.color_scheme, ColorSchemePreference::Light);
        assert_eq!(config.start_path, "/docs/markers");
    }

    #[test]
    fn test_override_rejects_bad_breakpoint() {
        let err = SiteConfig::default()
            .apply_overrides(env(&[(ENV_BREAKPOINT, "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Breakpoint(BreakpointError::NotPositive(0))));

        let err = SiteConfig::default()
            .apply_overrides(env(&[(ENV_BREAKPOINT, "wide")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_BREAKPOINT, .. }));
    }

    #[test]
    fn test_override_rejects_unknown_policy() {
        let err = SiteConfig::default()
            .apply_overrides(env(&[(ENV_VIEWPORT_INIT, "lazy")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownInitPolicy(v) if v == "lazy"));
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            SiteConfig::default().with_cell_width_px(0).validate(),
            Err(ConfigError::ZeroCellWidth)
        ));
        assert!(matches!(
            SiteConfig::default().with_start_path("/missing").validate(),
            Err(ConfigError::UnknownStartPath(_))
        ));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SiteConfig = serde_json::from_str(r#"{"viewport_init": "eager"}"#).unwrap();
        assert_eq!(config.viewport_init, InitPolicy::Eager);
        assert_eq!(config.breakpoint_px, Breakpoint::MOBILE);
    }

    #[test]
    fn test_json_rejects_unknown_fields() {
        assert!(serde_json::from_str::<SiteConfig>(r#"{"breakpoint": 500}"#).is_err());
    }
}
