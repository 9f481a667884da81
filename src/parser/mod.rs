//! Terraform file discovery and module extraction.
//!
//! Extraction is pattern based rather than a full HCL parse:
//!
//! - `module "<name>" { ... }` blocks, body captured up to the first `}`
//! - the `source = "..."` attribute inside each body
//! - only sources hosted on `github.com` are kept
//!
//! # Example
//!
//! ```rust,no_run
//! use tfmodscan::parser::ModuleParser;
//! use tfmodscan::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let parser = ModuleParser::new(&config);
//!
//!     let modules = parser.parse_directory("./terraform".as_ref())?;
//!     println!("Found {} modules", modules.len());
//!     Ok(())
//! }
//! ```

mod extract;
mod source;

pub use extract::ModuleParser;
pub use source::{is_github_source, module_name_from_repository, parse_github_source, GITHUB_HOST};

use crate::types::ModuleRecord;

/// File suffix identifying Terraform configuration files.
pub const TERRAFORM_EXTENSION: &str = ".tf";

/// Trait for extracting module records from file contents.
///
/// This trait allows for different extraction implementations
/// (e.g., a grammar-based parser later on, or mocks in tests).
pub trait Parser {
    /// Extract every qualifying module declaration from one file's text.
    ///
    /// # Errors
    ///
    /// Returns an error if the implementation cannot process the content.
    fn parse_content(
        &self,
        content: &str,
        file_path: &std::path::Path,
    ) -> crate::Result<Vec<ModuleRecord>>;
}
