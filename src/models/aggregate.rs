use serde::{Deserialize, Serialize};

/// Counter pair attached to a grouping key (exact module path or forge).
///
/// At the path level `module_count` is always 1 and `version_count` is the
/// number of records seen for that path. At the forge level both fields are
/// sums over every path belonging to the forge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    pub module_count: u64,
    pub version_count: u64,
}

/// One data line of the rendered census report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub forge: String,
    pub module_count: u64,
    pub version_count: u64,
}
