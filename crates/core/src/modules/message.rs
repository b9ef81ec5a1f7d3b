//! Outbound messages
//!
//! Every send operation posts its typed options unchanged to
//! `/message/<operation>/{instance}`.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use evolution_domain::{
    Result, SendButtonOptions, SendContactOptions, SendListOptions, SendLocationOptions,
    SendMediaOptions, SendNarratedAudioOptions, SendPollOptions, SendPtvOptions,
    SendReactionOptions, SendStatusOptions, SendStickerOptions, SendTextOptions,
};

use super::{impl_scoped_module, to_body};
use crate::scope::{instance_path, InstanceScope};
use crate::transport::Transport;

pub struct MessageModule {
    transport: Arc<dyn Transport>,
    scope: InstanceScope,
}

impl_scoped_module!(MessageModule);

impl MessageModule {
    async fn send<T: Serialize + Sync>(
        &self,
        operation: &str,
        options: &T,
        instance: Option<&str>,
    ) -> Result<Value> {
        let instance = self.scope.resolve(instance)?;
        let path = instance_path(&format!("/message/{operation}"), &instance);
        self.transport.post(&path, Some(to_body(options)?)).await
    }

    pub async fn send_text(&self, options: &SendTextOptions, instance: Option<&str>) -> Result<Value> {
        self.send("sendText", options, instance).await
    }

    pub async fn send_media(
        &self,
        options: &SendMediaOptions,
        instance: Option<&str>,
    ) -> Result<Value> {
        self.send("sendMedia", options, instance).await
    }

    /// Round video note.
    pub async fn send_ptv(&self, options: &SendPtvOptions, instance: Option<&str>) -> Result<Value> {
        self.send("sendPtv", options, instance).await
    }

    /// Voice note that shows up as recorded in the chat.
    pub async fn send_narrated_audio(
        &self,
        options: &SendNarratedAudioOptions,
        instance: Option<&str>,
    ) -> Result<Value> {
        self.send("sendWhatsAppAudio", options, instance).await
    }

    pub async fn send_status(
        &self,
        options: &SendStatusOptions,
        instance: Option<&str>,
    ) -> Result<Value> {
        self.send("sendStatus", options, instance).await
    }

    pub async fn send_sticker(
        &self,
        options: &SendStickerOptions,
        instance: Option<&str>,
    ) -> Result<Value> {
        self.send("sendSticker", options, instance).await
    }

    pub async fn send_location(
        &self,
        options: &SendLocationOptions,
        instance: Option<&str>,
    ) -> Result<Value> {
        self.send("sendLocation", options, instance).await
    }

    pub async fn send_contact(
        &self,
        options: &SendContactOptions,
        instance: Option<&str>,
    ) -> Result<Value> {
        self.send("sendContact", options, instance).await
    }

    pub async fn send_reaction(
        &self,
        options: &SendReactionOptions,
        instance: Option<&str>,
    ) -> Result<Value> {
        self.send("sendReaction", options, instance).await
    }

    pub async fn send_poll(&self, options: &SendPollOptions, instance: Option<&str>) -> Result<Value> {
        self.send("sendPoll", options, instance).await
    }

    pub async fn send_list(&self, options: &SendListOptions, instance: Option<&str>) -> Result<Value> {
        self.send("sendList", options, instance).await
    }

    pub async fn send_button(
        &self,
        options: &SendButtonOptions,
        instance: Option<&str>,
    ) -> Result<Value> {
        self.send("sendButton", options, instance).await
    }
}
