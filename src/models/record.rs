use serde::{Deserialize, Serialize};

/// One module-version publication event from the index feed.
///
/// Feed field names are capitalized (`Path`, `Version`, `Timestamp`).
/// Missing fields decode as empty strings and unknown fields are ignored,
/// matching the feed's loose schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    #[serde(rename = "Path", default)]
    pub path: String,
    #[serde(rename = "Version", default)]
    pub version: String,
    /// Publication instant as reported by the feed, carried verbatim.
    /// The census never interprets it as a time value.
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,
}
