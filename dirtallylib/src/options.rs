//! Input options for census scans and output formatting.
//!
//! This module contains the configuration types that control what the
//! scanner visits and how results are rendered. Options are built once by
//! the caller (typically the CLI entry point) and passed explicitly into
//! the library calls — there is no global configuration state.

use crate::error::TallyError;
use crate::filter::FilterConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Options for a census scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// A directory qualifies only if its direct file count strictly
    /// exceeds this value. Signed so that `-1` admits empty directories.
    pub cutoff: i64,
    /// Directory filter configuration
    pub filter: FilterConfig,
    /// Follow directory symlinks during the walk
    pub follow_links: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            cutoff: 100,
            filter: FilterConfig::new(),
            follow_links: false,
        }
    }
}

impl ScanOptions {
    /// Create new default options (cutoff 100, no filters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum direct file count for a directory to qualify.
    pub fn cutoff(mut self, cutoff: i64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Set the directory filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Follow directory symlinks during the walk.
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Tab-separated values
    #[default]
    Tsv,
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON records
    Json,
}

impl OutputFormat {
    /// Delimiter for the delimited formats (`None` for JSON).
    pub fn delimiter(&self) -> Option<char> {
        match self {
            OutputFormat::Tsv => Some('\t'),
            OutputFormat::Csv => Some(','),
            OutputFormat::Json => None,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(TallyError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Tsv => "tsv",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}
