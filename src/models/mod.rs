//! Data models for the forge census.
//!
//! - [`IndexRecord`] - One publication event decoded from the index feed
//! - [`Aggregate`] - Module/version counter pair for a grouping key
//! - [`ReportRow`] - One sorted line of the rendered report
//!
//! These models use serde for JSON deserialization; the feed's capitalized
//! field names are mapped via `#[serde(rename)]` on [`IndexRecord`].

pub mod aggregate;
pub mod record;

pub use aggregate::{Aggregate, ReportRow};
pub use record::IndexRecord;
