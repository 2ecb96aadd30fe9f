//! Configuration types for tree walkers

use std::collections::BTreeSet;

/// Directory names skipped unless the caller opts out.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &["node_modules", ".git"];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Directory names excluded from traversal and output (exact name match).
    pub ignore_dirs: BTreeSet<String>,
    /// Sort files and subdirectories by name before emitting them.
    /// When false, entries come out in whatever order the filesystem yields.
    pub sort: bool,
}

impl WalkerConfig {
    /// Config with an explicit ignore set and no defaults.
    pub fn with_ignore_dirs<I, S>(dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignore_dirs: dirs.into_iter().map(Into::into).collect(),
            sort: true,
        }
    }

    /// Add a directory name to the ignore set.
    pub fn with_ignore(mut self, name: impl Into<String>) -> Self {
        self.ignore_dirs.insert(name.into());
        self
    }

    /// Drop the built-in `node_modules`/`.git` entries.
    pub fn without_default_ignores(mut self) -> Self {
        for name in DEFAULT_IGNORE_DIRS {
            self.ignore_dirs.remove(*name);
        }
        self
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Check whether a directory name is in the ignore set.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_dirs.contains(name)
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self::with_ignore_dirs(DEFAULT_IGNORE_DIRS.iter().copied())
    }
}
