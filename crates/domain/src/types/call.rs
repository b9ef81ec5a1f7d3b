//! Call payloads

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    #[default]
    Audio,
    Video,
}

impl_wire_enum_conversions!(CallType {
    Audio => "audio",
    Video => "video",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FakeCallOptions {
    /// Milliseconds before the call is placed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
}
