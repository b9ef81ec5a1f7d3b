//! Profile and privacy payloads

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

/// Audience for last-seen, profile photo and status visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivacyLevel {
    All,
    Contacts,
    None,
}

impl_wire_enum_conversions!(PrivacyLevel {
    All => "all",
    Contacts => "contacts",
    None => "none",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnlinePrivacy {
    All,
    MatchLastSeen,
}

impl_wire_enum_conversions!(OnlinePrivacy {
    All => "all",
    MatchLastSeen => "match_last_seen",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadReceiptsPrivacy {
    All,
    None,
}

impl_wire_enum_conversions!(ReadReceiptsPrivacy {
    All => "all",
    None => "none",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupsAddPrivacy {
    All,
    Contacts,
    ContactBlacklist,
    None,
}

impl_wire_enum_conversions!(GroupsAddPrivacy {
    All => "all",
    Contacts => "contacts",
    ContactBlacklist => "contact_blacklist",
    None => "none",
});

/// Privacy settings; unset fields are left unchanged by the gateway
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<PrivacyLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online: Option<OnlinePrivacy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<PrivacyLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PrivacyLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_receipts: Option<ReadReceiptsPrivacy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups_add: Option<GroupsAddPrivacy>,
}
