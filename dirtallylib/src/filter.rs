//! Directory filtering with glob pattern support.
//!
//! Exclude patterns prune a directory and its whole subtree from the walk;
//! include patterns restrict which directories appear in the results
//! without pruning, so children of a non-matching directory still get the
//! chance to match.

use std::path::Path;

use glob::Pattern;

use crate::error::TallyError;
use crate::Result;

/// Configuration for directory filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to include (if empty, include all directories)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude (prunes subtrees)
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config (includes every directory).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| TallyError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.include.push(pat);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| TallyError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Add multiple include patterns.
    pub fn include_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.include(pattern)?;
        }
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Check if a directory should be pruned from the walk entirely.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude.iter().any(|p| p.matches(&path_str))
    }

    /// Check if a directory may appear in the results.
    ///
    /// A directory is reportable if it doesn't match any exclude pattern
    /// and matches at least one include pattern (or include is empty).
    pub fn is_reported(&self, path: &Path) -> bool {
        if self.is_excluded(path) {
            return false;
        }

        if self.include.is_empty() {
            return true;
        }

        let path_str = path.to_string_lossy();
        self.include.iter().any(|p| p.matches(&path_str))
    }
}
