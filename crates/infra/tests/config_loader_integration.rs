//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

mod support;

use std::path::PathBuf;
use std::time::Duration;

use evolution_domain::EvolutionError;
use evolution_infra::config;
use support::write_config;

#[test]
fn test_load_config_from_json_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_config(
        dir.path(),
        "evolution.json",
        r#"{
            "base_url": "https://gateway.test",
            "api_key": "json-key",
            "timeout_ms": 15000,
            "debug": true,
            "max_retries": 1,
            "retry_delay_ms": 500
        }"#,
    );

    let config = config::load_from_file(Some(path)).expect("Failed to load config from JSON file");

    assert_eq!(config.base_url, "https://gateway.test");
    assert_eq!(config.api_key.as_deref(), Some("json-key"));
    assert_eq!(config.timeout(), Duration::from_secs(15));
    assert!(config.debug);
    assert_eq!(config.max_retries, 1);
    assert_eq!(config.retry_delay(), Duration::from_millis(500));
}

#[test]
fn test_load_config_from_toml_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_config(dir.path(), "evolution.toml", "base_url = \"https://gateway.test/\"\n");

    let config = config::load_from_file(Some(path)).expect("Failed to load config from TOML file");

    assert_eq!(config.base_url, "https://gateway.test/");
    assert_eq!(config.api_key, None);
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert!(!config.debug);
    assert_eq!(config.max_retries, 3);
    assert_eq!(config.retry_delay(), Duration::from_secs(1));

    let validated = config.validate().expect("config should validate");
    assert_eq!(validated.base_url, "https://gateway.test");
}

#[test]
fn test_missing_base_url_in_file_is_rejected() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_config(dir.path(), "evolution.json", r#"{ "api_key": "k1" }"#);

    let result = config::load_from_file(Some(path));

    assert!(matches!(result, Err(EvolutionError::Config(_))));
}

#[test]
fn test_load_config_file_not_found() {
    let result = config::load_from_file(Some(PathBuf::from("/nonexistent/evolution.toml")));

    match result {
        Err(EvolutionError::Config(msg)) => assert!(msg.contains("not found")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_invalid_toml_reports_format() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_config(dir.path(), "evolution.toml", "base_url = ");

    match config::load_from_file(Some(path)) {
        Err(EvolutionError::Config(msg)) => assert!(msg.contains("TOML")),
        other => panic!("expected config error, got {other:?}"),
    }
}
