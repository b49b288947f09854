//! # dirtallylib
//!
//! A directory file-count census library: walk a tree, tally the files
//! directly inside each directory, and report the directories holding the
//! most.
//!
//! ## Overview
//!
//! Operators hunting for runaway directories (log spools, cache folders,
//! build output) rarely care about byte sizes — inode pressure and quota
//! limits come from *file counts*. This library does one single-threaded
//! pass over a tree and answers "which directories hold more than N files?"
//!
//! - **Direct counts**: each directory's tally covers only its immediate
//!   children; subdirectories are tallied independently, never rolled up.
//! - **Cutoff**: only directories whose count strictly exceeds a threshold
//!   are reported.
//! - **Depth grouping**: results can be re-aggregated onto a shared path
//!   prefix (e.g. depth 3 collapses `/home/user/cache/a/b` into
//!   `/home/user/cache`), summing counts per group.
//! - **Rendering**: top-N results as TSV, CSV, or JSON records.
//!
//! Unreadable directories are skipped and the walk carries on; a scan is a
//! best-effort inventory of whatever was readable at the time.
//!
//! ## Example
//!
//! ```rust
//! use dirtallylib::{group_by_depth, render, scan, Header, OutputFormat, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Set up a small tree: three files in one subdirectory
//! let dir = tempdir().unwrap();
//! let busy = dir.path().join("busy");
//! fs::create_dir(&busy).unwrap();
//! for name in ["a.log", "b.log", "c.log"] {
//!     fs::write(busy.join(name), "").unwrap();
//! }
//!
//! // Directories holding more than 2 files
//! let entries = scan(dir.path(), &ScanOptions::new().cutoff(2)).unwrap();
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].count, 3);
//!
//! // Grouping disabled: entries pass through unchanged
//! let entries = group_by_depth(entries, 0);
//!
//! // Render as tab-separated text
//! let header = Header::default();
//! let out = render(&entries, 100, OutputFormat::Tsv, Some(&header)).unwrap();
//! assert!(out.starts_with("File Count\tDirectory\n3\t"));
//! ```

pub mod entry;
pub mod error;
pub mod filter;
pub mod group;
pub mod options;
pub mod report;
pub mod scan;

pub use entry::{sort_descending, CountEntry};
pub use error::TallyError;
pub use filter::FilterConfig;
pub use group::{group_by_depth, truncate_path};
pub use options::{OutputFormat, ScanOptions};
pub use report::{render, Header};
pub use scan::scan;

/// Result type for dirtallylib operations
pub type Result<T> = std::result::Result<T, TallyError>;
