//! Instance lifecycle payloads

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

/// Engine backing a new instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Integration {
    #[serde(rename = "WHATSAPP-BAILEYS")]
    WhatsappBaileys,
    #[serde(rename = "WHATSAPP-BUSINESS")]
    WhatsappBusiness,
    #[serde(rename = "EVOLUTION")]
    Evolution,
}

/// Events the gateway can push to webhooks and queues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookEvent {
    ApplicationStartup,
    QrcodeUpdated,
    MessagesSet,
    MessagesUpsert,
    MessagesUpdate,
    MessagesDelete,
    SendMessage,
    ContactsSet,
    ContactsUpsert,
    ContactsUpdate,
    PresenceUpdate,
    ChatsSet,
    ChatsUpsert,
    ChatsUpdate,
    ChatsDelete,
    GroupsUpsert,
    GroupUpdate,
    GroupParticipantsUpdate,
    ConnectionUpdate,
    LabelsEdit,
    LabelsAssociation,
    Call,
    TypebotStart,
    TypebotChangeStatus,
}

/// Webhook registered at instance creation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceWebhook {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<WebhookEvent>>,
}

/// RabbitMQ / SQS event forwarding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQueueConfig {
    pub enabled: bool,
    pub events: Vec<WebhookEvent>,
}

/// Chatwoot inbox bootstrap settings, flattened into the create payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatwootOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatwoot_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatwoot_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatwoot_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatwoot_sign_msg: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatwoot_reopen_conversation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatwoot_conversation_pending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatwoot_import_contacts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatwoot_name_inbox: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatwoot_merge_brazil_contacts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatwoot_import_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatwoot_days_limit_import_messages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatwoot_organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatwoot_logo: Option<String>,
}

/// Payload for `POST /instance/create`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstanceOptions {
    pub instance_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qrcode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<Integration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_call: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg_call: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups_ignore: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_online: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_full_history: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<InstanceWebhook>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rabbitmq: Option<EventQueueConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sqs: Option<EventQueueConfig>,

    #[serde(flatten)]
    pub chatwoot: ChatwootOptions,
}

impl CreateInstanceOptions {
    pub fn new(instance_name: impl Into<String>) -> Self {
        Self { instance_name: instance_name.into(), ..Self::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Available,
    Unavailable,
}

impl_wire_enum_conversions!(Presence {
    Available => "available",
    Unavailable => "unavailable",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPresenceOptions {
    pub presence: Presence,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_options_serialize_minimal_payload() {
        let options = CreateInstanceOptions {
            qrcode: Some(true),
            integration: Some(Integration::WhatsappBaileys),
            ..CreateInstanceOptions::new("sales")
        };

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "instanceName": "sales",
                "qrcode": true,
                "integration": "WHATSAPP-BAILEYS"
            })
        );
    }

    #[test]
    fn chatwoot_fields_are_flattened() {
        let options = CreateInstanceOptions {
            chatwoot: ChatwootOptions {
                chatwoot_account_id: Some("7".into()),
                chatwoot_days_limit_import_messages: Some(3),
                ..ChatwootOptions::default()
            },
            ..CreateInstanceOptions::new("support")
        };

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["chatwootAccountId"], json!("7"));
        assert_eq!(value["chatwootDaysLimitImportMessages"], json!(3));
    }

    #[test]
    fn webhook_events_use_screaming_snake_case() {
        let events = vec![WebhookEvent::MessagesUpsert, WebhookEvent::GroupParticipantsUpdate];
        assert_eq!(
            serde_json::to_value(events).unwrap(),
            json!(["MESSAGES_UPSERT", "GROUP_PARTICIPANTS_UPDATE"])
        );
    }
}
