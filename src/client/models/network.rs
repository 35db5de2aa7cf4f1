//! Network models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::org::string_or_number;

/// Network resource as returned by the Dashboard API.
///
/// Fields this tool does not interpret are kept in `extra` so a created
/// network can be printed in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Network ID
    pub id: String,

    /// Owning organization ID
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub organization_id: Option<String>,

    /// Network name
    pub name: String,

    /// Space-separated product types (v0 API) or "combined"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Product types in the network (v1 API)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_types: Vec<String>,

    /// Tags, either a space-joined string or an array depending on API version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,

    /// Network time zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Network {
    /// Number of product types this network spans.
    ///
    /// Prefers `productTypes`; falls back to the v0 `type` string, where
    /// "combined" always means more than one.
    pub fn product_type_count(&self) -> usize {
        if !self.product_types.is_empty() {
            return self.product_types.len();
        }
        match self.kind.as_deref() {
            Some("combined") => 2,
            Some(kind) => kind.split_whitespace().count(),
            None => 0,
        }
    }

    /// Product types as a display string
    pub fn product_types_display(&self) -> String {
        if self.product_types.is_empty() {
            self.kind.clone().unwrap_or_default()
        } else {
            self.product_types.join(", ")
        }
    }
}

/// Request body for creating a network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNetwork {
    /// Network name
    pub name: String,

    /// Space-separated product types, e.g. "appliance switch"
    #[serde(rename = "type")]
    pub kind: String,

    /// Space-separated tags, empty for none
    pub tags: String,

    /// Time zone from the tz database
    pub time_zone: String,
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    string_or_number(deserializer).map(Some)
}
