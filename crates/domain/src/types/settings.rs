//! Instance behaviour settings

use serde::{Deserialize, Serialize};

/// Behaviour toggles of an instance (`/settings/set`, `/settings/find`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_call: Option<bool>,
    /// Auto-reply sent when a call is rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg_call: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups_ignore: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_online: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_messages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_full_history: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_status: Option<bool>,
}
