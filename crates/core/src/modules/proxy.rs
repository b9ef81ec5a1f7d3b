use std::sync::Arc;

use serde_json::Value;

use evolution_domain::{ProxyConfig, Result};

use super::{from_body, impl_scoped_module, to_body};
use crate::scope::{instance_path, InstanceScope};
use crate::transport::Transport;

/// Outbound proxy configuration
pub struct ProxyModule {
    transport: Arc<dyn Transport>,
    scope: InstanceScope,
}

impl_scoped_module!(ProxyModule);

impl ProxyModule {
    pub async fn set(&self, config: &ProxyConfig, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        self.transport.post(&instance_path("/proxy/set", &instance), Some(to_body(config)?)).await
    }

    /// `None` when the instance has no proxy configured.
    pub async fn find(&self, instance: Option<&str>) -> Result<Option<ProxyConfig>> {
        let instance = self.scope.resolve(instance)?;
        let body = self.transport.get(&instance_path("/proxy/find", &instance), &[]).await?;
        if body.is_null() {
            return Ok(None);
        }
        from_body(body).map(Some)
    }
}
