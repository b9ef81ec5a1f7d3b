use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use evolution_domain::{ApiRequest, EvolutionError, Result as DomainResult};
use evolution_core::Transport;
use parking_lot::Mutex;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// In-memory `Transport` that records every request.
///
/// Responses are served from a queue; once it is empty every call answers
/// with `{}`.
#[derive(Default, Clone)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    responses: Arc<Mutex<VecDeque<DomainResult<Value>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body.
    pub fn respond_with(self, body: Value) -> Self {
        self.responses.lock().push_back(Ok(body));
        self
    }

    /// Queue a failure.
    pub fn fail_with(self, error: EvolutionError) -> Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request; panics when nothing was sent.
    pub fn last(&self) -> ApiRequest {
        self.requests.lock().last().cloned().expect("no request was recorded")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute_with_cancel(
        &self,
        request: ApiRequest,
        cancel: &CancellationToken,
    ) -> DomainResult<Value> {
        if cancel.is_cancelled() {
            return Err(EvolutionError::Cancelled);
        }
        self.requests.lock().push(request);
        self.responses.lock().pop_front().unwrap_or_else(|| Ok(Value::Object(Default::default())))
    }
}
