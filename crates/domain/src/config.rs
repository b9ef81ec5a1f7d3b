//! Client configuration
//!
//! A [`ClientConfig`] is created once per client and never mutated after the
//! transport is built. Unset knobs fall back to the defaults in
//! [`crate::constants`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_MS, DEFAULT_TIMEOUT_MS};
use crate::errors::{EvolutionError, Result};

/// Connection settings for the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base address of the gateway (e.g. `https://evo.example.com`)
    pub base_url: String,
    /// Static credential sent in the `apikey` header
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Log request/response payloads
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

const fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

const fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY_MS
}

impl ClientConfig {
    /// Configuration with every optional knob at its default.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            debug: false,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = duration_to_ms(timeout);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay_ms = duration_to_ms(delay);
        self
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub const fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Total attempts a single call may make (initial try + retries).
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Check the configuration and normalize the base address.
    ///
    /// # Errors
    /// Returns [`EvolutionError::Config`] when the base address is empty.
    /// A single trailing `/` is stripped so request paths can always start
    /// with `/`.
    pub fn validate(mut self) -> Result<Self> {
        if self.base_url.trim().is_empty() {
            return Err(EvolutionError::Config(
                "base_url is required to initialize the client".to_string(),
            ));
        }

        if let Some(stripped) = self.base_url.strip_suffix('/') {
            self.base_url = stripped.to_string();
        }

        Ok(self)
    }
}

fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
