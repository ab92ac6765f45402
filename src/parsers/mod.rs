//! NDJSON parsing for the module index feed.
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Individual line failures**: Malformed or empty lines are logged to stderr and
//!   skipped, allowing the read to continue. A single bad record never aborts a run,
//!   and skipped lines are excluded from every downstream count.
//!
//! - **Stream faults are fatal**: An I/O error from the underlying reader (dropped
//!   connection, truncated body) aborts the read and propagates via `anyhow::Result`
//!   with context. A partial census built from a broken stream would be silently
//!   wrong, so nothing buffered before the fault is returned.
//!
//! - **User feedback**: When lines were skipped, a summary count is printed to stderr
//!   so users can see parse quality at a glance.

pub mod record;
pub mod stream;

pub use record::parse_record;
pub use stream::read_records;
