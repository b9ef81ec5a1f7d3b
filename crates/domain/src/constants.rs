//! Client-wide constants
//!
//! Defaults applied when a caller leaves a configuration knob unset, plus the
//! header names the gateway expects.

/// Per-attempt request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Retries after the initial attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Fixed pause between attempts.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1_000;

/// Header carrying the static credential.
pub const API_KEY_HEADER: &str = "apikey";
pub const JSON_CONTENT_TYPE: &str = "application/json";

// Environment variables read by the configuration loader
pub const ENV_BASE_URL: &str = "EVOLUTION_API_URL";
pub const ENV_API_KEY: &str = "EVOLUTION_API_KEY";
pub const ENV_TIMEOUT_MS: &str = "EVOLUTION_API_TIMEOUT_MS";
pub const ENV_DEBUG: &str = "EVOLUTION_API_DEBUG";
pub const ENV_MAX_RETRIES: &str = "EVOLUTION_API_MAX_RETRIES";
pub const ENV_RETRY_DELAY_MS: &str = "EVOLUTION_API_RETRY_DELAY_MS";
pub const ENV_INSTANCE: &str = "EVOLUTION_API_INSTANCE";
