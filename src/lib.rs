//! Forge Census - Per-forge statistics over a module index feed
//!
//! This library polls a line-delimited JSON index of module publication
//! events and reports how many modules and module-versions each hosting
//! forge (the first segment of a module path, e.g. `github.com`) carries.
//! It supports:
//!
//! - Streaming the feed line by line with per-record fault tolerance
//! - Two-stage aggregation: by exact module path, then by forge
//! - A sorted tabular report with a trailing totals row
//!
//! # Example
//!
//! ```no_run
//! use std::io::BufReader;
//!
//! use forge_census::{aggregate_by_forge, aggregate_by_path, read_records};
//!
//! let snapshot = std::fs::File::open("index.ndjson")?;
//! let records = read_records(BufReader::new(snapshot))?;
//! let forges = aggregate_by_forge(&aggregate_by_path(&records));
//! println!("{} forges seen", forges.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod aggregator;
pub mod cli;
pub mod client;
pub mod models;
pub mod parsers;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use aggregator::{aggregate_by_forge, aggregate_by_path, forge_of};
pub use models::{Aggregate, IndexRecord, ReportRow};
pub use parsers::{parse_record, read_records};
pub use report::{render_table, sort_rows};
