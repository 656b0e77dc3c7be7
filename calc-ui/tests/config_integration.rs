//! Integration tests that load settings files from disk.
//!
//! The unit tests in config.rs parse inline strings; these cover the
//! read-from-disk path and its error reporting.

use std::path::{Path, PathBuf};

use calc_core::ErrorEntryPolicy;
use calc_ui::config::{AppConfig, ConfigError};
use pretty_assertions::assert_eq;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_full_fixture() {
    let config = AppConfig::load(&fixture_path("calculator.toml"))
        .expect("fixture file should load without error");

    assert_eq!(config.window.width, 480.0);
    assert_eq!(config.window.height, 600.0);
    assert_eq!(config.window.title, "Desk Calculator");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, Some(PathBuf::from("calculator.log")));
    assert!(!config.logging.stdout);
    assert_eq!(config.calculator.error_entry, ErrorEntryPolicy::Restart);
}

#[test]
fn test_load_or_default_without_path() {
    let config = AppConfig::load_or_default(None).unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_load_negative_width_is_rejected() {
    let result = AppConfig::load(&fixture_path("bad_window.toml"));

    assert!(matches!(
        result,
        Err(ConfigError::InvalidWindowSize {
            dimension: "width",
            ..
        })
    ));
}

#[test]
fn test_load_malformed_file_reports_parse_error() {
    let result = AppConfig::load(&fixture_path("malformed.toml"));

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_load_nonexistent_file_returns_err() {
    let bad_path = Path::new("/this/path/does/not/exist.toml");
    let result = AppConfig::load(bad_path);

    match result {
        Err(err @ ConfigError::Read { .. }) => {
            assert!(err.to_string().contains("/this/path/does/not/exist.toml"));
        }
        other => panic!("expected read error, got {other:?}"),
    }
}
