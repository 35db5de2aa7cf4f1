//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Wrapper for list output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The records
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON list output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Number of records in `data`
    pub count: usize,

    /// Time the output was produced (RFC 3339)
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<Vec<T>> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            data,
            meta: Metadata {
                count,
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format a list as pretty-printed JSON with a metadata block
pub fn format_json<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(items.iter().collect::<Vec<_>>());
    serde_json::to_string_pretty(&output)
}

/// Format a single record as pretty-printed JSON, unwrapped
pub fn format_record<T: Serialize + ?Sized>(record: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}
