//! Message sending payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::impl_wire_enum_conversions;

/// Options shared by most send operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageOptions {
    /// Presence delay before sending, in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted: Option<MessageQuote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions_every_one: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentioned: Option<Vec<String>>,
}

/// Message being replied to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageQuote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<MessageKey>,
    /// Raw message content, e.g. `{"conversation": "..."}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

/// Identifies a message inside a chat
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageKey {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_jid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_me: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTextOptions {
    pub number: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_preview: Option<bool>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

impl SendTextOptions {
    pub fn new(number: impl Into<String>, text: impl Into<String>) -> Self {
        Self { number: number.into(), text: text.into(), ..Self::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Document,
}

impl_wire_enum_conversions!(MediaType {
    Image => "image",
    Video => "video",
    Document => "document",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMediaOptions {
    pub number: String,
    #[serde(rename = "mediatype")]
    pub media_type: MediaType,
    #[serde(rename = "mimetype")]
    pub mime_type: String,
    /// URL or base64 content
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

/// Video note ("played once" round video)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendPtvOptions {
    pub number: String,
    /// URL or base64 content
    pub video: String,
    #[serde(flatten)]
    pub options: MessageOptions,
}

/// Audio delivered as a recorded voice message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendNarratedAudioOptions {
    pub number: String,
    /// URL or base64 content
    pub audio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<bool>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
    Text,
    Image,
    Video,
    Audio,
}

impl_wire_enum_conversions!(StatusType {
    Text => "text",
    Image => "image",
    Video => "video",
    Audio => "audio",
});

/// Status/story post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendStatusOptions {
    #[serde(rename = "type")]
    pub status_type: StatusType,
    /// Text, or URL of the media
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Font index, 1 to 5
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<u8>,
    pub all_contacts: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_jid_list: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendStickerOptions {
    pub number: String,
    /// URL or base64 content
    pub sticker: String,
    #[serde(flatten)]
    pub options: MessageOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendLocationOptions {
    pub number: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(flatten)]
    pub options: MessageOptions,
}

/// vCard entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub full_name: String,
    pub wuid: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendContactOptions {
    pub number: String,
    pub contact: Vec<ContactInfo>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReactionOptions {
    pub key: MessageKey,
    /// Emoji; an empty string removes the reaction
    pub reaction: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendPollOptions {
    pub number: String,
    pub name: String,
    pub selectable_count: u32,
    pub values: Vec<String>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRow {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub row_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSection {
    pub title: String,
    pub rows: Vec<ListRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendListOptions {
    pub number: String,
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub sections: Vec<ListSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub button_id: String,
    pub button_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendButtonOptions {
    pub number: String,
    pub title: String,
    pub buttons: Vec<Button>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_options_omit_unset_fields() {
        let options = SendTextOptions::new("5511999999999", "hi");
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "number": "5511999999999", "text": "hi" })
        );
    }

    #[test]
    fn shared_options_are_flattened_in_camel_case() {
        let options = SendTextOptions {
            link_preview: Some(false),
            options: MessageOptions {
                delay: Some(1200),
                mentions_every_one: Some(true),
                quoted: Some(MessageQuote {
                    key: Some(MessageKey { id: "ABC".into(), ..MessageKey::default() }),
                    message: Some(json!({ "conversation": "earlier" })),
                }),
                ..MessageOptions::default()
            },
            ..SendTextOptions::new("5511", "reply")
        };

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "number": "5511",
                "text": "reply",
                "linkPreview": false,
                "delay": 1200,
                "mentionsEveryOne": true,
                "quoted": {
                    "key": { "id": "ABC" },
                    "message": { "conversation": "earlier" }
                }
            })
        );
    }

    #[test]
    fn media_options_use_gateway_field_names() {
        let options = SendMediaOptions {
            number: "5511".into(),
            media_type: MediaType::Document,
            mime_type: "application/pdf".into(),
            media: "https://files.test/report.pdf".into(),
            caption: None,
            file_name: Some("report.pdf".into()),
            options: MessageOptions::default(),
        };

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["mediatype"], json!("document"));
        assert_eq!(value["mimetype"], json!("application/pdf"));
        assert_eq!(value["fileName"], json!("report.pdf"));
        assert!(value.get("caption").is_none());
    }

    #[test]
    fn status_type_is_sent_as_type() {
        let options = SendStatusOptions {
            status_type: StatusType::Text,
            content: "hello".into(),
            caption: None,
            background_color: Some("#008000".into()),
            font: Some(1),
            all_contacts: true,
            status_jid_list: None,
        };

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "type": "text",
                "content": "hello",
                "backgroundColor": "#008000",
                "font": 1,
                "allContacts": true
            })
        );
    }
}
