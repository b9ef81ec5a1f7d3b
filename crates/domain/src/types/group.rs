//! Group payloads

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::impl_wire_enum_conversions;

/// Group metadata as returned by `fetchAllGroups`
///
/// Only the fields the gateway documents are typed; anything else it sends
/// is kept in `extra` so nothing is lost when the list is filtered and
/// handed back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfo {
    pub id: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc_owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announce: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<GroupParticipant>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GroupInfo {
    /// Groups without an `archived` flag count as not archived.
    pub fn is_archived(&self) -> bool {
        self.archived.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupParticipant {
    pub id: String,
    /// `"admin"`, `"superadmin"` or absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_super_admin: Option<bool>,
}

/// Result of a group listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupList {
    pub groups: Vec<GroupInfo>,
}

/// Filters for listing groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupFilterOptions {
    /// Include participant lists (gateway default: true)
    pub get_participants: Option<bool>,
    /// `Some(true)`: only archived, `Some(false)`: only unarchived,
    /// `None`: all groups
    pub archived: Option<bool>,
}

impl GroupFilterOptions {
    pub fn participants(&self) -> bool {
        self.get_participants.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantAction {
    Add,
    Remove,
    Promote,
    Demote,
}

impl_wire_enum_conversions!(ParticipantAction {
    Add => "add",
    Remove => "remove",
    Promote => "promote",
    Demote => "demote",
});
