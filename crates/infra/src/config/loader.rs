//! Configuration loader
//!
//! Loads the client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file from the working directory, if one exists
//! 2. Attempts to load from environment variables
//! 3. If `EVOLUTION_API_URL` is missing, falls back to a config file
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `EVOLUTION_API_URL`: Gateway base address (required)
//! - `EVOLUTION_API_KEY`: Static API key sent as the `apikey` header
//! - `EVOLUTION_API_TIMEOUT_MS`: Per-attempt timeout in milliseconds
//! - `EVOLUTION_API_DEBUG`: Wire logging (true/false)
//! - `EVOLUTION_API_MAX_RETRIES`: Retries after the first attempt
//! - `EVOLUTION_API_RETRY_DELAY_MS`: Fixed pause between attempts
//! - `EVOLUTION_API_INSTANCE`: Default instance for every module
//!
//! ## File Locations
//! The loader probes `./evolution.toml` then `./evolution.json`.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use evolution_domain::constants::{
    ENV_API_KEY, ENV_BASE_URL, ENV_DEBUG, ENV_INSTANCE, ENV_MAX_RETRIES, ENV_RETRY_DELAY_MS,
    ENV_TIMEOUT_MS,
};
use evolution_domain::{ClientConfig, EvolutionError, Result};

const CONFIG_FILE_NAMES: [&str; 2] = ["evolution.toml", "evolution.json"];

/// Load configuration with automatic fallback strategy
///
/// Reads `.env` first so its values are visible to the environment lookup,
/// then falls back to a config file when the base address is not set.
///
/// # Errors
/// Returns `EvolutionError::Config` if:
/// - Configuration cannot be loaded from either source
/// - A value is malformed
pub fn load() -> Result<ClientConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "ignoring unreadable .env file"),
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(EvolutionError::Config(reason)) if std::env::var(ENV_BASE_URL).is_err() => {
            tracing::debug!(%reason, "Base URL not in environment, trying file");
            load_from_file(None)
        }
        Err(err) => Err(err),
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `EvolutionError::Config` if the base address is missing or a
/// numeric or boolean variable cannot be parsed.
pub fn load_from_env() -> Result<ClientConfig> {
    let mut config = ClientConfig::new(env_var(ENV_BASE_URL)?);

    if let Some(key) = env_opt(ENV_API_KEY) {
        config = config.with_api_key(key);
    }
    if let Some(timeout_ms) = env_parse::<u64>(ENV_TIMEOUT_MS)? {
        config.timeout_ms = timeout_ms;
    }
    if let Some(debug) = env_bool(ENV_DEBUG)? {
        config.debug = debug;
    }
    if let Some(max_retries) = env_parse::<u32>(ENV_MAX_RETRIES)? {
        config.max_retries = max_retries;
    }
    if let Some(delay_ms) = env_parse::<u64>(ENV_RETRY_DELAY_MS)? {
        config.retry_delay_ms = delay_ms;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is detected by
/// extension (`.json` or `.toml`); fields other than `base_url` fall back to
/// their defaults.
///
/// # Errors
/// Returns `EvolutionError::Config` if the file is missing, unreadable, or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(EvolutionError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            EvolutionError::Config(format!(
                "{ENV_BASE_URL} is not set and no {} or {} was found",
                CONFIG_FILE_NAMES[0], CONFIG_FILE_NAMES[1]
            ))
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| EvolutionError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| EvolutionError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| EvolutionError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(EvolutionError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file in the working directory, if any.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    probe_in(&cwd)
}

fn probe_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)).find(|path| path.exists())
}

/// `EVOLUTION_API_INSTANCE`, when set and non-empty.
pub fn default_instance_from_env() -> Option<String> {
    env_opt(ENV_INSTANCE)
}

fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        EvolutionError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Set and non-empty after trimming.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| EvolutionError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no` (case-insensitive).
fn env_bool(key: &str) -> Result<Option<bool>> {
    env_opt(key)
        .map(|raw| match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            other => Err(EvolutionError::Config(format!("Invalid boolean for {key}: {other}"))),
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ALL_VARS: [&str; 7] = [
        ENV_BASE_URL,
        ENV_API_KEY,
        ENV_TIMEOUT_MS,
        ENV_DEBUG,
        ENV_MAX_RETRIES,
        ENV_RETRY_DELAY_MS,
        ENV_INSTANCE,
    ];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        for (raw, expected) in
            [("1", true), ("true", true), ("YES", true), ("0", false), ("False", false), ("no", false)]
        {
            std::env::set_var("EVOLUTION_TEST_BOOL", raw);
            assert_eq!(env_bool("EVOLUTION_TEST_BOOL").unwrap(), Some(expected), "{raw}");
        }

        std::env::set_var("EVOLUTION_TEST_BOOL", "maybe");
        assert!(matches!(env_bool("EVOLUTION_TEST_BOOL"), Err(EvolutionError::Config(_))));

        std::env::remove_var("EVOLUTION_TEST_BOOL");
        assert_eq!(env_bool("EVOLUTION_TEST_BOOL").unwrap(), None);
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        std::env::set_var(ENV_BASE_URL, "https://gateway.test/");
        std::env::set_var(ENV_API_KEY, "k1");
        std::env::set_var(ENV_TIMEOUT_MS, "5000");
        std::env::set_var(ENV_DEBUG, "true");
        std::env::set_var(ENV_MAX_RETRIES, "5");
        std::env::set_var(ENV_RETRY_DELAY_MS, "250");

        let config = load_from_env().unwrap();
        assert_eq!(config.base_url, "https://gateway.test/");
        assert_eq!(config.api_key.as_deref(), Some("k1"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.debug);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.retry_delay(), Duration::from_millis(250));

        clear_env();
    }

    #[test]
    fn test_load_from_env_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        std::env::set_var(ENV_BASE_URL, "https://gateway.test");

        let config = load_from_env().unwrap();
        assert_eq!(config, ClientConfig::new("https://gateway.test"));

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_url() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let result = load_from_env();
        assert!(matches!(result, Err(EvolutionError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        std::env::set_var(ENV_BASE_URL, "https://gateway.test");
        std::env::set_var(ENV_MAX_RETRIES, "three");

        match load_from_env() {
            Err(EvolutionError::Config(msg)) => assert!(msg.contains(ENV_MAX_RETRIES)),
            other => panic!("expected config error, got {other:?}"),
        }

        clear_env();
    }

    #[test]
    fn test_default_instance_ignores_blank_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        assert_eq!(default_instance_from_env(), None);
        std::env::set_var(ENV_INSTANCE, "  ");
        assert_eq!(default_instance_from_env(), None);
        std::env::set_var(ENV_INSTANCE, "sales");
        assert_eq!(default_instance_from_env().as_deref(), Some("sales"));

        clear_env();
    }

    #[test]
    fn test_parse_config_json() {
        let json_content = r#"{ "base_url": "https://gateway.test", "api_key": "k1" }"#;

        let config = parse_config(json_content, Path::new("evolution.json")).unwrap();
        assert_eq!(config.base_url, "https://gateway.test");
        assert_eq!(config.api_key.as_deref(), Some("k1"));
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_content = r#"
base_url = "https://gateway.test"
timeout_ms = 10000
max_retries = 0
"#;

        let config = parse_config(toml_content, Path::new("evolution.toml")).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.retry_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("base_url: x", Path::new("evolution.yaml"));
        assert!(matches!(result, Err(EvolutionError::Config(_))));
    }

    #[test]
    fn test_probe_prefers_toml() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(probe_in(dir.path()), None);

        std::fs::write(dir.path().join("evolution.json"), "{}").unwrap();
        assert_eq!(probe_in(dir.path()), Some(dir.path().join("evolution.json")));

        std::fs::write(dir.path().join("evolution.toml"), "").unwrap();
        assert_eq!(probe_in(dir.path()), Some(dir.path().join("evolution.toml")));
    }
}
