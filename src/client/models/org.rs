//! Organization models

use serde::{Deserialize, Deserializer, Serialize};

/// Organization resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Organization name (not unique across organizations)
    pub name: String,

    /// Dashboard URL for the organization
    #[serde(default)]
    pub url: String,
}

/// Accept IDs the API sends either as strings or as bare numbers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
