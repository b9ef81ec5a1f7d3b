use std::time::Duration;

use async_trait::async_trait;
use evolution_core::retry::{run_with_retry, RetryError, RetryPolicy};
use evolution_core::{normalize, Transport, TransportFailure};
use evolution_domain::constants::{
    API_KEY_HEADER, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_MS, DEFAULT_TIMEOUT_MS,
    JSON_CONTENT_TYPE,
};
use evolution_domain::{ApiRequest, ClientConfig, EvolutionError, HttpMethod, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::errors::{InfraError, IntoTransportFailure};

const USER_AGENT: &str = concat!("evolution-api-rs/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed [`Transport`] with fixed-delay retries.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    client: ReqwestClient,
    base_url: String,
    policy: RetryPolicy,
    debug: bool,
}

impl HttpTransport {
    /// Start building a transport for `base_url`.
    pub fn builder(base_url: impl Into<String>) -> HttpTransportBuilder {
        HttpTransportBuilder::new(base_url)
    }

    /// Build from an already validated configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Self::builder(&config.base_url)
            .timeout(config.timeout())
            .retry_policy(RetryPolicy::from_config(config))
            .debug(config.debug);

        if let Some(key) = &config.api_key {
            builder = builder.api_key(key);
        }

        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn retry_policy(&self) -> RetryPolicy {
        self.policy
    }

    async fn attempt(
        &self,
        request: &ApiRequest,
        attempt: u32,
    ) -> std::result::Result<Value, TransportFailure> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(attempt, method = %request.method, path = %request.path, "sending request");

        if self.debug {
            info!(
                method = %request.method,
                url = %url,
                query = ?request.query,
                payload = ?request.body,
                "evolution api request"
            );
        }

        let mut builder = self.client.request(to_reqwest_method(request.method), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(IntoTransportFailure::into_transport_failure)?;
        let status = response.status();
        let text = response.text().await.map_err(IntoTransportFailure::into_body_read_failure)?;
        let body = parse_body(&text);

        debug!(attempt, path = %request.path, status = status.as_u16(), "received response");
        if self.debug {
            info!(status = status.as_u16(), payload = ?body, "evolution api response");
        }

        if !status.is_success() {
            return Err(TransportFailure::Status { status: status.as_u16(), body });
        }

        Ok(body.unwrap_or(Value::Null))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute_with_cancel(
        &self,
        request: ApiRequest,
        cancel: &CancellationToken,
    ) -> Result<Value> {
        let request_ref = &request;
        let outcome = run_with_retry(&self.policy, cancel, move |attempt| {
            self.attempt(request_ref, attempt)
        })
        .await;

        match outcome {
            Ok(body) => Ok(body),
            Err(RetryError::Cancelled) => {
                debug!(method = %request.method, path = %request.path, "request cancelled");
                Err(EvolutionError::Cancelled)
            }
            Err(RetryError::Failed { failure, attempts }) => {
                debug!(
                    method = %request.method,
                    path = %request.path,
                    attempts,
                    error = %failure,
                    "request failed"
                );
                Err(normalize(failure, &request.path).into())
            }
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("policy", &self.policy)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    policy: RetryPolicy,
    debug: bool,
    user_agent: Option<String>,
    no_proxy: bool,
}

impl HttpTransportBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            policy: RetryPolicy::new(
                DEFAULT_MAX_RETRIES,
                Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            ),
            debug: false,
            user_agent: None,
            no_proxy: false,
        }
    }

    /// Sent as the `apikey` header on every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Log request and response payloads at `info`.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Ignore proxy settings from the environment.
    pub fn no_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    pub fn build(self) -> Result<HttpTransport> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        if let Some(key) = &self.api_key {
            let mut value = HeaderValue::from_str(key).map_err(InfraError::from)?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let mut builder = ReqwestClient::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .user_agent(self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()));

        if self.no_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(InfraError::from)?;

        Ok(HttpTransport { client, base_url: self.base_url, policy: self.policy, debug: self.debug })
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Empty bodies yield `None`; bodies that are not JSON are kept as a string.
fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}
