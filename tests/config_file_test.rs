// Integration tests for loading configuration from files and the environment.

use std::fs;

use docsite::color_scheme::ColorSchemePreference;
use docsite::config::{ConfigError, SiteConfig, ENV_BREAKPOINT, ENV_VIEWPORT_INIT};
use docsite::viewport::InitPolicy;
use serial_test::serial;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_from_file_full() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "breakpoint_px": 640,
            "viewport_init": "eager",
            "color_scheme": "dark",
            "cell_width_px": 10,
            "start_path": "/docs/installation"
        }"#,
    );

    let config = SiteConfig::from_file(&path).unwrap();
    assert_eq!(config.breakpoint_px.px(), 640);
    assert_eq!(config.viewport_init, InitPolicy::Eager);
    assert_eq!(config.color_scheme, ColorSchemePreference::Dark);
    assert_eq!(config.cell_width_px, 10);
    assert_eq!(config.start_path, "/docs/installation");
}

#[test]
fn test_from_file_rejects_zero_breakpoint() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"breakpoint_px": 0}"#);
    assert!(matches!(SiteConfig::from_file(&path), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_from_file_missing() {
    let dir = TempDir::new().unwrap();
    let err = SiteConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"breakpoint_px": 640, "viewport_init": "eager"}"#);

    std::env::set_var(ENV_BREAKPOINT, "900");
    std::env::set_var(ENV_VIEWPORT_INIT, "deferred");
    let result = SiteConfig::load_from(&path);
    std::env::remove_var(ENV_BREAKPOINT);
    std::env::remove_var(ENV_VIEWPORT_INIT);

    let config = result.unwrap();
    assert_eq!(config.breakpoint_px.px(), 900);
    assert_eq!(config.viewport_init, InitPolicy::Deferred);
}

#[test]
#[serial]
fn test_load_from_validates() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"start_path": "/docs/heatmaps"}"#);
    assert!(matches!(
        SiteConfig::load_from(&path),
        Err(ConfigError::UnknownStartPath(_))
    ));
}
