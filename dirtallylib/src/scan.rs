//! Census scanning: one synchronous walk, one tally per directory.
//!
//! The scan visits every directory reachable from the root and counts the
//! entries directly inside it — subdirectories are visited separately and
//! tallied independently, so a count is never a recursive total.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::entry::{sort_descending, CountEntry};
use crate::error::TallyError;
use crate::options::ScanOptions;
use crate::Result;

/// Walk `root` and tally direct file counts per directory.
///
/// Every visited directory gets a tally, including empty ones, so a
/// negative cutoff reports all of them. A directory appears in the result
/// only if its count strictly exceeds `options.cutoff` and it passes the
/// configured filter. Unreadable subdirectories are skipped and the walk
/// continues; the result is a best-effort inventory, not an audit.
///
/// The returned entries are sorted descending by (count, path).
///
/// # Example
///
/// ```rust,ignore
/// use dirtallylib::{scan, ScanOptions};
///
/// // Directories under /var/log holding more than 500 files
/// let entries = scan("/var/log", &ScanOptions::new().cutoff(500))?;
/// for entry in entries {
///     println!("{}\t{}", entry.count, entry.path.display());
/// }
/// ```
pub fn scan(root: impl AsRef<Path>, options: &ScanOptions) -> Result<Vec<CountEntry>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(TallyError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(TallyError::NotADirectory(root.to_path_buf()));
    }

    let mut counts: HashMap<PathBuf, u64> = HashMap::new();

    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .into_iter();

    for entry in walker.filter_entry(|e| {
        // Always keep the root; prune excluded subtrees whole.
        e.depth() == 0 || !(e.file_type().is_dir() && options.filter.is_excluded(e.path()))
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!("skipping unreadable entry: {err}");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            counts.entry(entry.into_path()).or_insert(0);
        } else if let Some(parent) = entry.path().parent() {
            // Symlinks and other non-directory entries count as files.
            *counts.entry(parent.to_path_buf()).or_insert(0) += 1;
        }
    }

    let mut results: Vec<CountEntry> = counts
        .into_iter()
        .filter(|(path, count)| *count as i64 > options.cutoff && options.filter.is_reported(path))
        .map(|(path, count)| CountEntry::new(count, path))
        .collect();

    sort_descending(&mut results);

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterConfig;
    use std::fs;
    use tempfile::tempdir;

    fn touch_files(dir: &Path, n: usize) {
        fs::create_dir_all(dir).unwrap();
        for i in 0..n {
            fs::write(dir.join(format!("file{i:03}")), "").unwrap();
        }
    }

    #[test]
    fn test_scan_counts_are_direct_not_recursive() {
        let temp = tempdir().unwrap();
        touch_files(&temp.path().join("parent"), 2);
        touch_files(&temp.path().join("parent/child"), 3);

        let entries = scan(temp.path(), &ScanOptions::new().cutoff(0)).unwrap();

        let parent = entries
            .iter()
            .find(|e| e.path == temp.path().join("parent"))
            .unwrap();
        let child = entries
            .iter()
            .find(|e| e.path == temp.path().join("parent/child"))
            .unwrap();
        assert_eq!(parent.count, 2);
        assert_eq!(child.count, 3);
    }

    #[test]
    fn test_scan_cutoff_is_strict() {
        let temp = tempdir().unwrap();
        touch_files(&temp.path().join("data/a"), 150);
        touch_files(&temp.path().join("data/b"), 50);

        let entries = scan(temp.path(), &ScanOptions::new().cutoff(100)).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], CountEntry::new(150, temp.path().join("data/a")));

        // A directory holding exactly the cutoff does not qualify
        let entries = scan(temp.path(), &ScanOptions::new().cutoff(150)).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_scan_sorted_descending() {
        let temp = tempdir().unwrap();
        touch_files(&temp.path().join("data/a"), 150);
        touch_files(&temp.path().join("data/b"), 50);

        let entries = scan(temp.path(), &ScanOptions::new().cutoff(40)).unwrap();

        assert_eq!(
            entries,
            vec![
                CountEntry::new(150, temp.path().join("data/a")),
                CountEntry::new(50, temp.path().join("data/b")),
            ]
        );
    }

    #[test]
    fn test_scan_negative_cutoff_includes_empty_dirs() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("empty")).unwrap();
        touch_files(&temp.path().join("full"), 1);

        let entries = scan(temp.path(), &ScanOptions::new().cutoff(-1)).unwrap();

        // Root, "empty", and "full" all qualify
        assert_eq!(entries.len(), 3);
        assert!(entries
            .iter()
            .any(|e| e.path == temp.path().join("empty") && e.count == 0));
    }

    #[test]
    fn test_scan_zero_cutoff_excludes_empty_dirs() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("empty")).unwrap();
        touch_files(&temp.path().join("full"), 1);

        let entries = scan(temp.path(), &ScanOptions::new().cutoff(0)).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, temp.path().join("full"));
    }

    #[test]
    fn test_scan_exclude_prunes_subtree() {
        let temp = tempdir().unwrap();
        touch_files(&temp.path().join("keep"), 5);
        touch_files(&temp.path().join("skip"), 5);
        touch_files(&temp.path().join("skip/nested"), 5);

        let filter = FilterConfig::new().exclude("**/skip").unwrap();
        let options = ScanOptions::new().cutoff(0).filter(filter);
        let entries = scan(temp.path(), &options).unwrap();

        assert!(entries.iter().any(|e| e.path == temp.path().join("keep")));
        assert!(!entries.iter().any(|e| e.path == temp.path().join("skip")));
        // Descendants of a pruned directory never show up either
        assert!(!entries
            .iter()
            .any(|e| e.path == temp.path().join("skip/nested")));
    }

    #[test]
    fn test_scan_include_restricts_reporting_without_pruning() {
        let temp = tempdir().unwrap();
        touch_files(&temp.path().join("outer"), 3);
        touch_files(&temp.path().join("outer/wanted"), 3);

        let filter = FilterConfig::new().include("**/wanted").unwrap();
        let options = ScanOptions::new().cutoff(0).filter(filter);
        let entries = scan(temp.path(), &options).unwrap();

        // "outer" doesn't match the include set but its child still does
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, temp.path().join("outer/wanted"));
    }

    #[test]
    fn test_scan_missing_root() {
        let result = scan("/nonexistent/census/root", &ScanOptions::new());

        assert!(matches!(result, Err(TallyError::RootNotFound(_))));
    }

    #[test]
    fn test_scan_root_is_a_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "not a directory").unwrap();

        let result = scan(&file, &ScanOptions::new());

        assert!(matches!(result, Err(TallyError::NotADirectory(_))));
    }
}
