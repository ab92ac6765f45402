use crate::models::IndexRecord;

/// Decode one line of the index feed into an [`IndexRecord`].
///
/// Failure covers malformed JSON and empty lines alike; the caller decides
/// whether to skip or abort (the stream reader warns and skips).
pub fn parse_record(line: &str) -> Result<IndexRecord, serde_json::Error> {
    serde_json::from_str(line)
}
