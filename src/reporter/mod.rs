//! Report generation.
//!
//! There is a single output format: an aligned text table written to stdout.
//! When nothing was found a plain message is returned instead and no table is
//! built.
//!
//! # Example
//!
//! ```rust
//! use tfmodscan::reporter::{Reporter, NO_MODULES_MESSAGE};
//! use tfmodscan::Config;
//!
//! let reporter = Reporter::new(&Config::default());
//! assert_eq!(reporter.report(&[]), NO_MODULES_MESSAGE);
//! ```

mod table;

use crate::config::Config;
use crate::types::ModuleRecord;

pub use table::{TableReporter, HEADERS};

/// Message printed when the scan found no qualifying modules.
pub const NO_MODULES_MESSAGE: &str = "No Terraform modules found.";

/// Report generator choosing between the table and the empty message.
pub struct Reporter {
    table: TableReporter,
}

impl Reporter {
    /// Create a new reporter with the given configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            table: TableReporter::new(config),
        }
    }

    /// Render the report for a scan.
    #[must_use]
    pub fn report(&self, modules: &[ModuleRecord]) -> String {
        if modules.is_empty() {
            return NO_MODULES_MESSAGE.to_string();
        }
        self.table.render(modules)
    }
}
