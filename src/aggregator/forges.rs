use std::collections::HashMap;

use crate::models::Aggregate;

/// First `/`-delimited segment of a module path: the hosting forge.
///
/// A path without `/` is its own forge; the empty path yields the empty
/// forge, which is a valid (if degenerate) grouping key.
pub fn forge_of(path: &str) -> &str {
    match path.find('/') {
        Some(idx) => &path[..idx],
        None => path,
    }
}

/// Re-group a path-level census by forge, summing counts.
///
/// Counts for a forge contributed by more than one path are added into the
/// running totals, never overwritten.
pub fn aggregate_by_forge(paths: &HashMap<String, Aggregate>) -> HashMap<String, Aggregate> {
    let mut forges: HashMap<String, Aggregate> = HashMap::new();

    for (path, stats) in paths {
        let entry = forges.entry(forge_of(path).to_string()).or_default();
        entry.module_count += stats.module_count;
        entry.version_count += stats.version_count;
    }

    forges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forge_of_multi_segment_path() {
        assert_eq!(forge_of("a/b/c"), "a");
        assert_eq!(forge_of("github.com/user/repo"), "github.com");
    }

    #[test]
    fn test_forge_of_single_segment_path() {
        assert_eq!(forge_of("singleseg"), "singleseg");
    }

    #[test]
    fn test_forge_of_empty_path() {
        assert_eq!(forge_of(""), "");
    }

    #[test]
    fn test_counts_accumulate_across_paths() {
        let mut paths = HashMap::new();
        paths.insert("github.com/a/x".to_string(), Aggregate { module_count: 1, version_count: 2 });
        paths.insert("github.com/b/y".to_string(), Aggregate { module_count: 1, version_count: 1 });
        paths.insert("gitlab.com/c/z".to_string(), Aggregate { module_count: 1, version_count: 4 });

        let forges = aggregate_by_forge(&paths);
        assert_eq!(forges.len(), 2);
        assert_eq!(forges["github.com"], Aggregate { module_count: 2, version_count: 3 });
        assert_eq!(forges["gitlab.com"], Aggregate { module_count: 1, version_count: 4 });
    }

    #[test]
    fn test_empty_forge_key_survives_regrouping() {
        let mut paths = HashMap::new();
        paths.insert(String::new(), Aggregate { module_count: 1, version_count: 1 });

        let forges = aggregate_by_forge(&paths);
        assert_eq!(forges[""], Aggregate { module_count: 1, version_count: 1 });
    }
}
