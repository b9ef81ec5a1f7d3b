//! Error types used throughout the SDK

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Main error type for the SDK
#[derive(Error, Debug)]
pub enum EvolutionError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A call needed an instance name and neither the call nor the module
    /// supplied one. Raised before any request is sent.
    #[error("Instance not set: call set_instance() or pass an instance name")]
    InstanceNotSet,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EvolutionError {
    /// The normalized API error, if this is one.
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status of the failed call, when the gateway answered.
    pub fn status_code(&self) -> Option<u16> {
        self.as_api().and_then(|err| err.status_code)
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, EvolutionError>;

/// Normalized error produced by the transport for every failed call.
///
/// Network failures, timeouts, and remote 4xx/5xx answers all land in this
/// one shape; `status_code` and `response` are only present when the gateway
/// actually replied.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status_code: Option<u16>,
    pub response: Option<Value>,
    pub endpoint: Option<String>,
}

impl ApiError {
    /// Error without a remote response (network failure, timeout).
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), status_code: None, response: None, endpoint: None }
    }

    /// Error built from a non-success answer of the gateway.
    ///
    /// The message is taken from the response body when it carries one,
    /// otherwise it is the status line (e.g. `HTTP 404 Not Found`).
    pub fn from_response(status: u16, body: Option<Value>, endpoint: impl Into<String>) -> Self {
        let message = body
            .as_ref()
            .and_then(extract_message)
            .unwrap_or_else(|| status_line(status));

        Self { message, status_code: Some(status), response: body, endpoint: Some(endpoint.into()) }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code, Some(400..=499))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code, Some(500..=599))
    }
}

/// Pull a human-readable message out of a gateway error body.
///
/// The gateway answers with `{"message": "..."}`, `{"message": ["..", ".."]}`
/// or `{"status": 400, "error": "...", "response": {"message": [...]}}`
/// depending on the endpoint.
fn extract_message(body: &Value) -> Option<String> {
    if let Some(message) = body.get("message").and_then(message_text) {
        return Some(message);
    }

    if let Some(message) =
        body.get("response").and_then(|response| response.get("message")).and_then(message_text)
    {
        return Some(message);
    }

    // Plain-text bodies (proxy error pages) stay in `response` only.
    body.get("error").and_then(Value::as_str).map(str::to_string)
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

fn status_line(status: u16) -> String {
    let reason = match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "unknown status",
    };
    format!("HTTP {status} {reason}")
}
