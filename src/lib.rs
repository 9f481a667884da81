//! # tfmodscan
//!
//! Lists the GitHub-hosted Terraform modules a configuration tree depends on,
//! and the ref each one is pinned to.
//!
//! The pipeline is linear and single-threaded:
//!
//! 1. walk the tree, pruning excluded directory names
//! 2. extract `module` blocks from every `.tf` file
//! 3. render the collected records as a table
//!
//! ## Example
//!
//! ```rust,no_run
//! use tfmodscan::{Config, Scanner};
//! use tfmodscan::reporter::Reporter;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default().with_exclude_dirs([".git", "vendor"]);
//!     let scanner = Scanner::new(config.clone());
//!
//!     let modules = scanner.scan_path("./terraform")?;
//!     println!("{}", Reporter::new(&config).report(&modules));
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all, rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod reporter;
pub mod types;

// Re-export commonly used types at crate root
pub use config::Config;
pub use error::{Result, ScanError};
pub use types::ModuleRecord;

use std::path::Path;

/// Entry point for using tfmodscan as a library.
pub struct Scanner {
    config: Config,
}

impl Scanner {
    /// Create a new scanner with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scan a directory tree for GitHub-hosted module references.
    ///
    /// Records come back in walk order, then in order of appearance within
    /// each file.
    ///
    /// # Errors
    ///
    /// Returns an error if the path doesn't exist or any entry or file
    /// beneath it cannot be read.
    pub fn scan_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<ModuleRecord>> {
        let path = path.as_ref();
        tracing::info!(
            path = %path.display(),
            excluded = ?self.config.scan.exclude_dirs,
            "Scanning path"
        );

        parser::ModuleParser::new(&self.config).parse_directory(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_missing_path() {
        let scanner = Scanner::new(Config::default());
        assert!(scanner.scan_path("/no/such/tfmodscan/root").is_err());
    }
}
