use std::io::BufRead;

use anyhow::{Context, Result};

use crate::models::IndexRecord;
use crate::parsers::record::parse_record;

/// Read the whole index stream, collecting every line that decodes.
///
/// Malformed and empty lines are reported to stderr and skipped, so one bad
/// record never aborts the run. A failure of the underlying reader is fatal
/// and discards everything buffered so far: a truncated stream would
/// otherwise masquerade as a complete census.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<IndexRecord>> {
    let mut records = Vec::new();
    let mut skipped_count = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read line from index stream")?;

        match parse_record(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                eprintln!("Warning: Failed to parse line {} of index stream: {}", line_num + 1, e);
                skipped_count += 1;
            }
        }
    }

    if skipped_count > 0 {
        eprintln!("Read index stream: {} records ({} skipped)", records.len(), skipped_count);
    }

    Ok(records)
}
