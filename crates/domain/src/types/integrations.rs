//! Webhook, chatbot and storage integration payloads

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

/// Optional knobs for `set_webhook`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookOptions {
    /// Defaults to `true`
    pub enabled: Option<bool>,
    /// Send media as base64 inside the event (defaults to `false`)
    pub base64: Option<bool>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatbotReplyType {
    Text,
    Buttons,
    List,
}

impl_wire_enum_conversions!(ChatbotReplyType {
    Text => "text",
    Buttons => "buttons",
    List => "list",
});

/// Which incoming messages start the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatbotTrigger {
    All,
    Media,
    Message,
}

impl_wire_enum_conversions!(ChatbotTrigger {
    All => "all",
    Media => "media",
    Message => "message",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatbotChoice {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub value: String,
}

/// Flow chatbot settings, flattened next to `enabled` in the request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatbotOptions {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub reply_type: Option<ChatbotReplyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ChatbotChoice>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<ChatbotTrigger>,
}
