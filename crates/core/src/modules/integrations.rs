//! Webhook, chatbot and storage integrations

use std::sync::Arc;

use serde_json::{json, Value};

use evolution_domain::{ChatbotOptions, Result, WebhookEvent, WebhookOptions};

use super::{impl_scoped_module, to_body};
use crate::scope::{instance_path, InstanceScope};
use crate::transport::Transport;

pub struct IntegrationsModule {
    transport: Arc<dyn Transport>,
    scope: InstanceScope,
}

impl_scoped_module!(IntegrationsModule);

impl IntegrationsModule {
    /// Point the instance's event webhook at `url`.
    ///
    /// `enabled` defaults to `true` and `base64` to `false`.
    pub async fn set_webhook(
        &self,
        url: &str,
        events: &[WebhookEvent],
        options: &WebhookOptions,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;

        let mut webhook = json!({
            "url": url,
            "enabled": options.enabled.unwrap_or(true),
            "base64": options.base64.unwrap_or(false),
            "events": events,
        });
        if let Some(headers) = &options.headers {
            webhook["headers"] = json!(headers);
        }

        let body = json!({ "url": url, "webhook": webhook });
        self.transport.post(&instance_path("/webhook/set", &instance), Some(body)).await
    }

    pub async fn set_chatbot(
        &self,
        enabled: bool,
        options: &ChatbotOptions,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;

        let mut body = to_body(options)?;
        if let Value::Object(fields) = &mut body {
            fields.insert("enabled".to_string(), Value::Bool(enabled));
        }
        self.transport.post(&instance_path("/chatbot/set", &instance), Some(body)).await
    }

    /// `config` is provider-specific and passed through untouched.
    pub async fn set_storage(
        &self,
        provider: &str,
        config: Value,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let body = json!({ "provider": provider, "config": config });
        self.transport.post(&instance_path("/storage/set", &instance), Some(body)).await
    }
}
