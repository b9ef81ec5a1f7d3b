#![allow(dead_code)]

use std::time::Duration;

use evolution_api::{ClientConfig, EvolutionApi};
use wiremock::MockServer;

/// Retry pause short enough to keep retrying tests fast.
pub const FAST_RETRY: Duration = Duration::from_millis(10);

/// Mock gateway plus a client pointed at it.
pub struct TestContext {
    pub server: MockServer,
    pub api: EvolutionApi,
}

/// Start a mock gateway and build a client against it.
pub async fn setup_test_context(api_key: Option<&str>) -> TestContext {
    let server = MockServer::start().await;
    let api = EvolutionApi::new(client_config(&server.uri(), api_key))
        .expect("failed to build client against mock server");

    TestContext { server, api }
}

pub fn client_config(base_url: &str, api_key: Option<&str>) -> ClientConfig {
    let config = ClientConfig::new(base_url).with_max_retries(2).with_retry_delay(FAST_RETRY);
    match api_key {
        Some(key) => config.with_api_key(key),
        None => config,
    }
}
