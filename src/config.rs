//! Configuration for a scan run.
//!
//! tfmodscan reads no configuration files; a [`Config`] is assembled from
//! command-line arguments in `main.rs` and handed to the [`Scanner`](crate::Scanner).

/// Scanning options.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Directory names (not paths) to prune from traversal.
    pub exclude_dirs: Vec<String>,
}

impl ScanOptions {
    /// Check whether a directory with this name should be pruned.
    #[must_use]
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == dir_name)
    }
}

/// Output options.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Style table headers when writing to a terminal.
    pub colored: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { colored: true }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Scanning options
    pub scan: ScanOptions,

    /// Output options
    pub output: OutputOptions,
}

impl Config {
    /// Builder-style setter for the exclusion set.
    #[must_use]
    pub fn with_exclude_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scan.exclude_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }
}

/// Split a comma-separated list of directory names.
///
/// Entries are trimmed and empty entries dropped, so `" .git, ,vendor "`
/// yields `[".git", "vendor"]`.
#[must_use]
pub fn parse_exclude_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
        .collect()
}
