//! Instance lifecycle: create, connect, inspect, tear down

use std::sync::Arc;

use serde_json::Value;
use tracing::instrument;

use evolution_domain::{CreateInstanceOptions, Result, SetPresenceOptions};

use super::{impl_scoped_module, to_body};
use crate::scope::{instance_path, InstanceScope};
use crate::transport::Transport;

pub struct InstanceModule {
    transport: Arc<dyn Transport>,
    scope: InstanceScope,
}

impl_scoped_module!(InstanceModule);

impl InstanceModule {
    /// Create a new instance. Not scoped: the name travels in the body.
    #[instrument(skip(self, options), fields(instance = %options.instance_name))]
    pub async fn create(&self, options: &CreateInstanceOptions) -> Result<Value> {
        self.transport.post("/instance/create", Some(to_body(options)?)).await
    }

    /// Every instance the API key can see.
    pub async fn fetch_instances(&self) -> Result<Value> {
        self.transport.get("/instance/fetchInstances", &[]).await
    }

    /// Start pairing; the gateway answers with a QR code or pairing code.
    pub async fn connect(&self, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        self.transport.get(&instance_path("/instance/connect", &instance), &[]).await
    }

    #[instrument(skip(self))]
    pub async fn restart(&self, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        self.transport.post(&instance_path("/instance/restart", &instance), None).await
    }

    pub async fn set_presence(
        &self,
        options: &SetPresenceOptions,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/instance/setPresence", &instance);
        self.transport.post(&path, Some(to_body(options)?)).await
    }

    pub async fn connection_state(&self, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        self.transport.get(&instance_path("/instance/connectionState", &instance), &[]).await
    }

    #[instrument(skip(self))]
    pub async fn logout(&self, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        self.transport.delete(&instance_path("/instance/logout", &instance), None).await
    }

    /// Remove the instance from the gateway.
    #[instrument(skip(self))]
    pub async fn delete(&self, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        self.transport.delete(&instance_path("/instance/delete", &instance), None).await
    }
}
