//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

/// Builder for synthetic index snapshot files
pub struct IndexFileBuilder {
    lines: Vec<String>,
}

impl IndexFileBuilder {
    /// Create a builder for an empty snapshot
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a well-formed record line
    pub fn with_record(mut self, path: &str, version: &str) -> Self {
        self.lines.push(format!(
            r#"{{"Path":"{}","Version":"{}","Timestamp":"2024-01-01T00:00:00Z"}}"#,
            path, version
        ));
        self
    }

    /// Append a raw line verbatim (for malformed or empty input)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Snapshot content as it would arrive on the wire
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Write the snapshot to disk; returns the temp dir (keep it alive) and file path
    pub fn build(self) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("index.ndjson");
        let mut file = fs::File::create(&path).expect("Failed to create index snapshot");
        file.write_all(self.content().as_bytes()).expect("Failed to write index snapshot");
        (dir, path)
    }
}
