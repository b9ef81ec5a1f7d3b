use std::sync::Arc;

use serde_json::{json, Value};

use evolution_domain::{LabelAction, Result};

use super::impl_scoped_module;
use crate::scope::{instance_path, InstanceScope};
use crate::transport::Transport;

/// Chat labels (WhatsApp Business)
pub struct LabelModule {
    transport: Arc<dyn Transport>,
    scope: InstanceScope,
}

impl_scoped_module!(LabelModule);

impl LabelModule {
    pub async fn find_labels(&self, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        self.transport.get(&instance_path("/label/findLabels", &instance), &[]).await
    }

    /// Attach or detach a label on a chat.
    pub async fn handle_labels(
        &self,
        chat_id: &str,
        label_id: &str,
        action: LabelAction,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let body = json!({ "chatId": chat_id, "labelId": label_id, "action": action });
        self.transport.post(&instance_path("/label/handleLabels", &instance), Some(body)).await
    }
}
