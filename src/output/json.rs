//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Envelope for JSON output
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the output was produced
    pub generated_at: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                generated_at: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(data);
    serde_json::to_string_pretty(&output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct Item {
        id: i64,
        name: String,
    }

    #[test]
    fn envelope_carries_data_and_meta() {
        let items = vec![Item {
            id: 5,
            name: "A B".to_string(),
        }];

        let out = format_json(&items).unwrap();
        assert!(out.contains("\"data\""));
        assert!(out.contains("\"meta\""));
        assert!(out.contains("\"id\": 5"));
        assert!(out.contains("\"generated_at\""));
        assert!(out.contains("\"version\""));
    }

    #[test]
    fn empty_collection_still_serializes() {
        let items: Vec<Item> = vec![];
        let out = format_json(&items).unwrap();
        assert!(out.contains("\"data\": []"));
    }
}
