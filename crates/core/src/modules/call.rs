use std::sync::Arc;

use serde_json::{json, Value};

use evolution_domain::{CallType, FakeCallOptions, Result};

use super::impl_scoped_module;
use crate::scope::{instance_path, InstanceScope};
use crate::transport::Transport;

/// Call simulation
pub struct CallModule {
    transport: Arc<dyn Transport>,
    scope: InstanceScope,
}

impl_scoped_module!(CallModule);

impl CallModule {
    /// Ring `number` without opening a real call.
    pub async fn fake_call(
        &self,
        number: &str,
        call_type: CallType,
        options: FakeCallOptions,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let mut body = json!({ "number": number, "type": call_type });
        if let Some(delay) = options.delay {
            body["delay"] = json!(delay);
        }
        self.transport.post(&instance_path("/call/fakeCall", &instance), Some(body)).await
    }
}
