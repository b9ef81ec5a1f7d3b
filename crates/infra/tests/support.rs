//! Shared helpers for `evolution-infra` integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use evolution_core::{RetryPolicy, Transport};
use evolution_infra::HttpTransport;

/// Write `contents` to `dir/name` and return the full path.
pub fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("config file should be written");
    path
}

/// Transport pointed at a mock server with short retry pauses.
pub fn mock_transport(uri: &str, max_retries: u32, api_key: Option<&str>) -> Arc<dyn Transport> {
    let mut builder = HttpTransport::builder(uri)
        .retry_policy(RetryPolicy::new(max_retries, Duration::from_millis(5)))
        .no_proxy();
    if let Some(key) = api_key {
        builder = builder.api_key(key);
    }
    Arc::new(builder.build().expect("http transport should build"))
}
