//! Transport port
//!
//! Every domain module performs its network I/O through [`Transport`]. The
//! HTTP adapter lives in the infra crate; tests substitute an in-memory
//! recorder.

use async_trait::async_trait;
use evolution_domain::{ApiRequest, Result};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Executes request descriptors against the gateway
///
/// Implementors provide [`Transport::execute_with_cancel`]; the verb helpers
/// only build descriptors and delegate.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Run `request` with retries, stopping early if `cancel` fires.
    ///
    /// Returns the parsed JSON body (`Value::Null` for empty bodies) or a
    /// normalized error.
    async fn execute_with_cancel(
        &self,
        request: ApiRequest,
        cancel: &CancellationToken,
    ) -> Result<Value>;

    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        self.execute_with_cancel(request, &CancellationToken::new()).await
    }

    /// GET with `query` appended to the URL.
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let request = ApiRequest::get(path).with_query_pairs(query.iter().copied());
        self.execute(request).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value> {
        self.execute(ApiRequest::post(path).with_optional_body(body)).await
    }

    async fn put(&self, path: &str, body: Option<Value>) -> Result<Value> {
        self.execute(ApiRequest::put(path).with_optional_body(body)).await
    }

    async fn patch(&self, path: &str, body: Option<Value>) -> Result<Value> {
        self.execute(ApiRequest::patch(path).with_optional_body(body)).await
    }

    async fn delete(&self, path: &str, body: Option<Value>) -> Result<Value> {
        self.execute(ApiRequest::delete(path).with_optional_body(body)).await
    }
}
