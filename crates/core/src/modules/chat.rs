//! Chat housekeeping: number lookups, read state, archiving, media

use std::sync::Arc;

use serde_json::{json, Value};

use evolution_domain::Result;

use super::impl_scoped_module;
use crate::scope::{instance_path, InstanceScope};
use crate::transport::Transport;

pub struct ChatModule {
    transport: Arc<dyn Transport>,
    scope: InstanceScope,
}

impl_scoped_module!(ChatModule);

impl ChatModule {
    /// Whether `number` has a WhatsApp account.
    pub async fn check_number(&self, number: &str, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/chat/whatsappNumbers", &instance);
        self.transport.post(&path, Some(json!({ "numbers": [number] }))).await
    }

    pub async fn read_messages(&self, chat_id: &str, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/chat/readMessages", &instance);
        self.transport.post(&path, Some(json!({ "readMessages": [chat_id] }))).await
    }

    pub async fn archive_chat(
        &self,
        chat_id: &str,
        archive: bool,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/chat/archive", &instance);
        self.transport.post(&path, Some(json!({ "chatId": chat_id, "archive": archive }))).await
    }

    pub async fn mark_chat_unread(&self, chat_id: &str, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/chat/markUnread", &instance);
        self.transport.post(&path, Some(json!({ "chatId": chat_id }))).await
    }

    /// Delete a message for everyone, or only for this account when
    /// `only_me` is set.
    pub async fn delete_message(
        &self,
        chat_id: &str,
        message_id: &str,
        only_me: bool,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let body = json!({ "chatId": chat_id, "messageId": message_id, "onlyMe": only_me });
        self.transport.delete(&instance_path("/chat/message", &instance), Some(body)).await
    }

    pub async fn fetch_profile_picture(&self, number: &str, instance: Option<&str>) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/chat/profilePicture", &instance);
        self.transport.post(&path, Some(json!({ "number": number }))).await
    }

    pub async fn get_base64_from_media_message(
        &self,
        message_id: &str,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path("/chat/getBase64FromMediaMessage", &instance);
        self.transport.post(&path, Some(json!({ "messageId": message_id }))).await
    }
}
