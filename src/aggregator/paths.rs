use std::collections::HashMap;

use crate::models::{Aggregate, IndexRecord};

/// Group records by exact module path.
///
/// The first sighting of a path inserts module_count = 1, version_count = 1;
/// every further record with the same path bumps version_count only. Records
/// with an empty path group under the empty-string key like any other.
pub fn aggregate_by_path(records: &[IndexRecord]) -> HashMap<String, Aggregate> {
    let mut paths: HashMap<String, Aggregate> = HashMap::new();

    for record in records {
        let entry = paths
            .entry(record.path.clone())
            .or_insert(Aggregate { module_count: 1, version_count: 0 });
        entry.version_count += 1;
    }

    paths
}
