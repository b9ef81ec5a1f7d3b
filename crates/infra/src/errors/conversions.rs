//! Conversions from external infrastructure errors into SDK errors.
//!
//! Two directions matter here. Errors raised while a request is in flight
//! become a [`TransportFailure`] so the retry loop can classify them. Errors
//! raised while the transport is being built are configuration problems and
//! become [`EvolutionError::Config`] through [`InfraError`].

use evolution_core::TransportFailure;
use evolution_domain::EvolutionError;
use reqwest::header::InvalidHeaderValue;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the SDK error.
#[derive(Debug)]
pub struct InfraError(pub EvolutionError);

impl From<InfraError> for EvolutionError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<EvolutionError> for InfraError {
    fn from(value: EvolutionError) -> Self {
        Self(value)
    }
}

/// Map a per-attempt error onto the transport-neutral failure kinds.
pub trait IntoTransportFailure {
    fn into_transport_failure(self) -> TransportFailure;

    /// Failure while reading a response body after the status line arrived.
    ///
    /// The response is incomplete, so it counts as nothing received.
    fn into_body_read_failure(self) -> TransportFailure;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TransportFailure */
/* -------------------------------------------------------------------------- */

impl IntoTransportFailure for HttpError {
    fn into_transport_failure(self) -> TransportFailure {
        if self.is_timeout() {
            return TransportFailure::Timeout(self.to_string());
        }

        if let Some(status) = self.status() {
            return TransportFailure::Status { status: status.as_u16(), body: None };
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return TransportFailure::Network(self.to_string());
        }

        // Sending failed without a response (reset, closed connection).
        if self.is_request() {
            return TransportFailure::Network(self.to_string());
        }

        TransportFailure::Other(self.to_string())
    }

    fn into_body_read_failure(self) -> TransportFailure {
        if self.is_timeout() {
            return TransportFailure::Timeout(self.to_string());
        }
        TransportFailure::Network(format!("response body interrupted: {self}"))
    }
}

/* -------------------------------------------------------------------------- */
/* Construction-time errors → EvolutionError::Config */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(EvolutionError::Config(format!("failed to build HTTP client: {value}")))
    }
}

impl From<InvalidHeaderValue> for InfraError {
    fn from(value: InvalidHeaderValue) -> Self {
        Self(EvolutionError::Config(format!("api key is not a valid header value: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::time::Duration;

    use evolution_core::{classify, FailureKind};
    use reqwest::header::HeaderValue;
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn connection_refused_maps_to_network_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let failure = error.into_transport_failure();
        assert!(matches!(failure, TransportFailure::Network(_)), "got {failure:?}");
        assert_eq!(classify(&failure).kind, FailureKind::Network);
    }

    #[tokio::test]
    async fn elapsed_timeout_maps_to_timeout_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().timeout(Duration::from_millis(50)).build().unwrap();
        let error = client.get(server.uri()).send().await.unwrap_err();

        let failure = error.into_transport_failure();
        assert!(matches!(failure, TransportFailure::Timeout(_)), "got {failure:?}");
        assert!(classify(&failure).retryable);
    }

    #[tokio::test]
    async fn status_error_keeps_the_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        assert_eq!(
            error.into_transport_failure(),
            TransportFailure::Status { status: 401, body: None }
        );
    }

    #[test]
    fn invalid_header_value_is_a_config_error() {
        let error = HeaderValue::from_str("bad\nkey").unwrap_err();

        let mapped: EvolutionError = InfraError::from(error).into();
        match mapped {
            EvolutionError::Config(msg) => assert!(msg.contains("api key")),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
