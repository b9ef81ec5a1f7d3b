//! Group management
//!
//! Listing is the only operation with client-side logic: the gateway has
//! answered both with a bare array and with `{ "groups": [...] }`, and it
//! has no archived filter, so [`GroupModule::fetch_all`] normalizes the shape
//! and filters locally.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use evolution_domain::{
    ApiRequest, GroupFilterOptions, GroupInfo, GroupList, ParticipantAction, Result,
};

use super::{from_body, impl_scoped_module};
use crate::scope::{instance_path, InstanceScope};
use crate::transport::Transport;

pub struct GroupModule {
    transport: Arc<dyn Transport>,
    scope: InstanceScope,
}

impl_scoped_module!(GroupModule);

#[derive(Deserialize)]
#[serde(untagged)]
enum GroupListing {
    Bare(Vec<GroupInfo>),
    Wrapped { groups: Vec<GroupInfo> },
}

impl GroupModule {
    pub async fn create_group(
        &self,
        name: &str,
        participants: &[String],
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let body = json!({ "name": name, "participants": participants });
        self.transport.post(&instance_path("/group/create", &instance), Some(body)).await
    }

    /// `image` is a URL or base64 image.
    pub async fn update_picture(
        &self,
        group_id: &str,
        image: &str,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let body = json!({ "groupId": group_id, "image": image });
        self.transport.post(&instance_path("/group/pic", &instance), Some(body)).await
    }

    pub async fn update_subject(
        &self,
        group_id: &str,
        subject: &str,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let body = json!({ "groupId": group_id, "subject": subject });
        self.transport.post(&instance_path("/group/subject", &instance), Some(body)).await
    }

    pub async fn update_description(
        &self,
        group_id: &str,
        description: &str,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let body = json!({ "groupId": group_id, "description": description });
        self.transport.post(&instance_path("/group/description", &instance), Some(body)).await
    }

    pub async fn fetch_invite_code(&self, group_id: &str, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/group/inviteCode", &instance);
        self.transport.get(&path, &[("id", group_id)]).await
    }

    pub async fn revoke_invite_code(&self, group_id: &str, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/group/revokeInviteCode", &instance);
        self.transport.post(&path, Some(json!({ "groupId": group_id }))).await
    }

    /// List groups, optionally keeping only archived or unarchived ones.
    pub async fn fetch_all(
        &self,
        filter: GroupFilterOptions,
        instance: Option<&str>,
    ) -> Result<GroupList> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/group/fetchAllGroups", &instance);
        let participants = if filter.participants() { "true" } else { "false" };

        let body = self.transport.get(&path, &[("getParticipants", participants)]).await?;
        let mut groups = match from_body::<GroupListing>(body)? {
            GroupListing::Bare(groups) | GroupListing::Wrapped { groups } => groups,
        };

        if let Some(archived) = filter.archived {
            let total = groups.len();
            groups.retain(|group| group.is_archived() == archived);
            debug!(total, kept = groups.len(), archived, "filtered group listing");
        }

        Ok(GroupList { groups })
    }

    pub async fn fetch_archived_groups(&self, instance: Option<&str>) -> Result<GroupList> {
        let filter = GroupFilterOptions { archived: Some(true), ..GroupFilterOptions::default() };
        self.fetch_all(filter, instance).await
    }

    pub async fn fetch_unarchived_groups(&self, instance: Option<&str>) -> Result<GroupList> {
        let filter = GroupFilterOptions { archived: Some(false), ..GroupFilterOptions::default() };
        self.fetch_all(filter, instance).await
    }

    /// Archive or unarchive a group chat.
    pub async fn archive_group(
        &self,
        group_id: &str,
        archive: bool,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let body = json!({ "chatId": group_id, "archive": archive });
        self.transport.post(&instance_path("/chat/archive", &instance), Some(body)).await
    }

    pub async fn update_participant(
        &self,
        group_id: &str,
        action: ParticipantAction,
        participants: &[String],
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let body = json!({ "groupId": group_id, "action": action, "participants": participants });
        self.transport.post(&instance_path("/group/updateParticipant", &instance), Some(body)).await
    }

    pub async fn leave(&self, group_id: &str, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let request =
            ApiRequest::delete(instance_path("/group/leave", &instance)).with_query("id", group_id);
        self.transport.execute(request).await
    }
}
