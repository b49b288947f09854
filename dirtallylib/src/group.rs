//! Depth grouping: collapse deep paths onto a shared prefix and sum counts.
//!
//! Grouping never touches the disk again — it re-aggregates the counts the
//! scan already produced.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use crate::entry::{sort_descending, CountEntry};

/// Truncate a path to its first `depth` named components.
///
/// Root and prefix components are preserved in front, so `/data/a/x` at
/// depth 2 becomes `/data/a` and `data/a/x` becomes `data/a`. Depth counts
/// path segments, never characters; a path with fewer than `depth` named
/// components comes back unchanged.
pub fn truncate_path(path: &Path, depth: usize) -> PathBuf {
    let mut truncated = PathBuf::new();
    let mut named = 0;

    for component in path.components() {
        if let Component::Normal(_) = component {
            if named == depth {
                break;
            }
            named += 1;
        }
        truncated.push(component);
    }

    truncated
}

/// Group entries by depth-truncated path, summing counts per group.
///
/// A `depth` of 0 disables grouping and returns the entries unchanged.
/// Otherwise the result is re-sorted descending by (summed count,
/// truncated path).
pub fn group_by_depth(entries: Vec<CountEntry>, depth: usize) -> Vec<CountEntry> {
    if depth == 0 {
        return entries;
    }

    let mut groups: BTreeMap<PathBuf, u64> = BTreeMap::new();
    for entry in entries {
        *groups
            .entry(truncate_path(&entry.path, depth))
            .or_insert(0) += entry.count;
    }

    let mut grouped: Vec<CountEntry> = groups
        .into_iter()
        .map(|(path, count)| CountEntry::new(count, path))
        .collect();
    sort_descending(&mut grouped);

    grouped
}
