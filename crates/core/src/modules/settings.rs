use std::sync::Arc;

use serde_json::Value;

use evolution_domain::{Result, Settings};

use super::{from_body, impl_scoped_module, to_body};
use crate::scope::{instance_path, InstanceScope};
use crate::transport::Transport;

/// Instance behaviour settings
pub struct SettingsModule {
    transport: Arc<dyn Transport>,
    scope: InstanceScope,
}

impl_scoped_module!(SettingsModule);

impl SettingsModule {
    pub async fn set(&self, settings: &Settings, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        self.transport.post(&instance_path("/settings/set", &instance), Some(to_body(settings)?)).await
    }

    pub async fn find(&self, instance: Option<&str>) -> Result<Settings> {
        let instance = self.scope.resolve(instance)?;
        let body = self.transport.get(&instance_path("/settings/find", &instance), &[]).await?;
        from_body(body)
    }
}
