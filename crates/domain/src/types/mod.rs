//! Typed payloads for the gateway modules
//!
//! Option structs serialize to the camelCase JSON the gateway expects and
//! omit unset optional fields. Response payloads are mostly passed through as
//! `serde_json::Value`; only the shapes the SDK itself inspects are typed.

pub mod call;
pub mod group;
pub mod instance;
pub mod integrations;
pub mod label;
pub mod message;
pub mod profile;
pub mod proxy;
pub mod settings;

pub use call::{CallType, FakeCallOptions};
pub use group::{GroupFilterOptions, GroupInfo, GroupList, GroupParticipant, ParticipantAction};
pub use instance::{
    ChatwootOptions, CreateInstanceOptions, EventQueueConfig, Integration, InstanceWebhook,
    Presence, SetPresenceOptions, WebhookEvent,
};
pub use integrations::{
    ChatbotChoice, ChatbotOptions, ChatbotReplyType, ChatbotTrigger, WebhookOptions,
};
pub use label::LabelAction;
pub use message::{
    Button, ContactInfo, ListRow, ListSection, MediaType, MessageKey, MessageOptions,
    MessageQuote, SendButtonOptions, SendContactOptions, SendListOptions, SendLocationOptions,
    SendMediaOptions, SendNarratedAudioOptions, SendPollOptions, SendPtvOptions,
    SendReactionOptions, SendStatusOptions, SendStickerOptions, SendTextOptions, StatusType,
};
pub use profile::{
    GroupsAddPrivacy, OnlinePrivacy, PrivacyLevel, PrivacySettings, ReadReceiptsPrivacy,
};
pub use proxy::ProxyConfig;
pub use settings::Settings;
