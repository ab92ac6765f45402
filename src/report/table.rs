use std::collections::HashMap;

use crate::models::{Aggregate, ReportRow};

const TOTAL_LABEL: &str = "TOTAL";

/// Order forge aggregates for display: version count descending, forge name
/// ascending between equals so the output is deterministic.
pub fn sort_rows(forges: &HashMap<String, Aggregate>) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = forges
        .iter()
        .map(|(forge, stats)| ReportRow {
            forge: forge.clone(),
            module_count: stats.module_count,
            version_count: stats.version_count,
        })
        .collect();

    rows.sort_by(|a, b| b.version_count.cmp(&a.version_count).then_with(|| a.forge.cmp(&b.forge)));

    rows
}

/// Render the census table: header, one line per forge, trailing totals row.
///
/// Pure projection; the totals are recomputed from the rows handed in.
pub fn render_table(rows: &[ReportRow]) -> String {
    let forge_width = rows
        .iter()
        .map(|row| row.forge.len())
        .chain(["Forge".len(), TOTAL_LABEL.len()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:<forge_width$}  {:>8}  {:>8}\n", "Forge", "Modules", "Versions"));

    let mut total_modules: u64 = 0;
    let mut total_versions: u64 = 0;
    for row in rows {
        total_modules += row.module_count;
        total_versions += row.version_count;
        out.push_str(&format!(
            "{:<forge_width$}  {:>8}  {:>8}\n",
            row.forge, row.module_count, row.version_count
        ));
    }

    out.push_str(&format!(
        "{:<forge_width$}  {:>8}  {:>8}\n",
        TOTAL_LABEL, total_modules, total_versions
    ));

    out
}
