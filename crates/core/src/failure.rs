//! Transport failure classification and normalization
//!
//! Adapters translate their native errors into [`TransportFailure`]. From
//! there, [`classify`] decides whether the failure is worth another attempt
//! and [`normalize`] turns whatever is left into the single [`ApiError`] shape
//! callers see.

use std::fmt;

use evolution_domain::ApiError;
use serde_json::Value;

/// A failed attempt, independent of the HTTP library that produced it
#[derive(Debug, Clone, PartialEq)]
pub enum TransportFailure {
    /// No response was received (connection refused, reset, DNS)
    Network(String),
    /// The per-attempt timeout fired
    Timeout(String),
    /// The gateway answered with a non-success status
    Status { status: u16, body: Option<Value> },
    /// The request could not be built or the response could not be read
    Other(String),
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(message) => write!(f, "network failure: {message}"),
            Self::Timeout(message) => write!(f, "timeout: {message}"),
            Self::Status { status, .. } => write!(f, "gateway answered HTTP {status}"),
            Self::Other(message) => f.write_str(message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Timeout,
    /// 5xx
    Server,
    /// Any other non-success status
    Client,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: FailureKind,
    pub retryable: bool,
}

/// Decide the kind of a failure and whether it may be retried.
///
/// Only network failures, timeouts and 5xx answers are transient. Client
/// errors and local failures propagate on the first attempt.
pub fn classify(failure: &TransportFailure) -> Classification {
    let kind = match failure {
        TransportFailure::Network(_) => FailureKind::Network,
        TransportFailure::Timeout(_) => FailureKind::Timeout,
        TransportFailure::Status { status, .. } if *status >= 500 => FailureKind::Server,
        TransportFailure::Status { .. } => FailureKind::Client,
        TransportFailure::Other(_) => FailureKind::Other,
    };

    let retryable = matches!(kind, FailureKind::Network | FailureKind::Timeout | FailureKind::Server);

    Classification { kind, retryable }
}

/// Convert a final failure into the caller-visible error shape.
pub fn normalize(failure: TransportFailure, endpoint: &str) -> ApiError {
    match failure {
        TransportFailure::Status { status, body } => ApiError::from_response(status, body, endpoint),
        TransportFailure::Network(message)
        | TransportFailure::Timeout(message)
        | TransportFailure::Other(message) => ApiError::new(message).with_endpoint(endpoint),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn status(code: u16) -> TransportFailure {
        TransportFailure::Status { status: code, body: None }
    }

    #[test]
    fn transient_failures_are_retryable() {
        let network = classify(&TransportFailure::Network("connection refused".into()));
        assert_eq!(network, Classification { kind: FailureKind::Network, retryable: true });

        let timeout = classify(&TransportFailure::Timeout("30s elapsed".into()));
        assert_eq!(timeout, Classification { kind: FailureKind::Timeout, retryable: true });

        for code in [500, 502, 503, 504] {
            let server = classify(&status(code));
            assert_eq!(server, Classification { kind: FailureKind::Server, retryable: true });
        }
    }

    #[test]
    fn client_and_local_failures_are_not_retryable() {
        for code in [400, 401, 403, 404, 422, 429] {
            let client = classify(&status(code));
            assert_eq!(client, Classification { kind: FailureKind::Client, retryable: false });
        }

        let other = classify(&TransportFailure::Other("invalid JSON".into()));
        assert_eq!(other, Classification { kind: FailureKind::Other, retryable: false });
    }

    #[test]
    fn normalize_status_failure_round_trip() {
        let failure =
            TransportFailure::Status { status: 404, body: Some(json!({ "message": "X" })) };

        let error = normalize(failure, "/p");

        assert_eq!(error.status_code, Some(404));
        assert_eq!(error.message, "X");
        assert_eq!(error.endpoint.as_deref(), Some("/p"));
        assert_eq!(error.response, Some(json!({ "message": "X" })));
    }

    #[test]
    fn normalize_network_failure_has_no_status() {
        let error = normalize(TransportFailure::Network("connection refused".into()), "/p");

        assert_eq!(error.message, "connection refused");
        assert_eq!(error.status_code, None);
        assert_eq!(error.response, None);
        assert_eq!(error.endpoint.as_deref(), Some("/p"));
    }
}
