use std::sync::Arc;

use serde_json::{json, Value};

use evolution_domain::{PrivacySettings, Result};

use super::{impl_scoped_module, to_body};
use crate::scope::{instance_path, InstanceScope};
use crate::transport::Transport;

/// Profile and privacy of the connected account
pub struct ProfileModule {
    transport: Arc<dyn Transport>,
    scope: InstanceScope,
}

impl_scoped_module!(ProfileModule);

impl ProfileModule {
    pub async fn fetch_business_profile(&self, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/profile/fetchBusinessProfile", &instance);
        self.transport.post(&path, Some(json!({}))).await
    }

    pub async fn fetch_profile(&self, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        self.transport.post(&instance_path("/profile/fetchProfile", &instance), Some(json!({}))).await
    }

    pub async fn update_profile_name(&self, name: &str, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/profile/updateProfileName", &instance);
        self.transport.post(&path, Some(json!({ "name": name }))).await
    }

    pub async fn update_profile_status(&self, status: &str, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/profile/updateProfileStatus", &instance);
        self.transport.post(&path, Some(json!({ "status": status }))).await
    }

    /// `picture` is a URL or base64 image.
    pub async fn update_profile_picture(
        &self,
        picture: &str,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/profile/updateProfilePicture", &instance);
        self.transport.post(&path, Some(json!({ "picture": picture }))).await
    }

    pub async fn remove_profile_picture(&self, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        self.transport.delete(&instance_path("/profile/removeProfilePicture", &instance), None).await
    }

    pub async fn fetch_privacy_settings(&self, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        self.transport.get(&instance_path("/profile/fetchPrivacySettings", &instance), &[]).await
    }

    /// Only the fields set in `privacy` are sent.
    pub async fn update_privacy_settings(
        &self,
        privacy: &PrivacySettings,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/profile/updatePrivacySettings", &instance);
        self.transport.post(&path, Some(to_body(privacy)?)).await
    }
}
