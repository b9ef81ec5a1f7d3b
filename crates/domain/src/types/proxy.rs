//! Proxy configuration payload

use serde::{Deserialize, Serialize};

/// Outbound proxy used by an instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub enabled: bool,
    pub host: String,
    pub port: String,
    /// `http`, `https`, `socks4` or `socks5`
    pub protocol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
