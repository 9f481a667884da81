//! Directory walking and module block extraction.

use crate::config::{Config, ScanOptions};
use crate::error::{Result, ScanError};
use crate::parser::source::{is_github_source, module_name_from_repository, parse_github_source};
use crate::parser::{Parser, TERRAFORM_EXTENSION};
use crate::types::ModuleRecord;

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::{DirEntry, WalkDir};

static MODULE_BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Body stops at the first closing brace, nested blocks are cut short.
    // Capture groups: 1=block label, 2=body
    Regex::new(r#"module\s+"([^"]+)"\s*\{([^}]+)\}"#).expect("Invalid regex")
});

static SOURCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"source\s*=\s*"([^"]+)""#).expect("Invalid regex"));

/// Scanner for GitHub-hosted module references in Terraform files.
///
/// The parser walks directories, reads `.tf` files, and extracts
/// module declarations.
pub struct ModuleParser {
    options: ScanOptions,
}

impl ModuleParser {
    /// Create a new parser with the given configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            options: config.scan.clone(),
        }
    }

    /// Parse all Terraform files below a directory.
    ///
    /// Entries are visited in file-name order so repeated runs over the same
    /// tree produce the same sequence. Excluded directories are pruned along
    /// with everything beneath them.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory doesn't exist, or on the first
    /// entry or file that cannot be read. No partial results are returned.
    pub fn parse_directory(&self, path: &Path) -> Result<Vec<ModuleRecord>> {
        if !path.exists() {
            return Err(crate::err!(DirectoryNotFound {
                path: path.to_path_buf(),
            }));
        }

        let mut modules = Vec::new();
        let mut files = 0usize;

        for entry in WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.should_skip(e))
        {
            let entry = entry.map_err(|e| {
                crate::err!(Walk {
                    path: e.path().unwrap_or(path).to_path_buf(),
                    source: e,
                })
            })?;

            if entry.file_type().is_dir() || !is_terraform_file(&entry) {
                continue;
            }

            tracing::debug!(file = %entry.path().display(), "Parsing file");
            modules.extend(self.parse_file(entry.path())?);
            files += 1;
        }

        tracing::info!(files, modules = modules.len(), "Parsing complete");

        Ok(modules)
    }

    /// Parse a single Terraform file.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<ModuleRecord>> {
        let bytes = std::fs::read(path).map_err(|e| ScanError::io(path, e, file!(), line!()))?;
        let content = String::from_utf8_lossy(&bytes);

        self.parse_content(&content, path)
    }

    /// Check if an entry is an excluded directory.
    fn should_skip(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return false;
        }

        let skip = entry
            .file_name()
            .to_str()
            .is_some_and(|name| self.options.is_excluded(name));

        if skip {
            tracing::debug!(
                path = %entry.path().display(),
                reason = "excluded directory",
                "Skipping path"
            );
        }

        skip
    }
}

/// Check if an entry's file name carries the Terraform suffix.
fn is_terraform_file(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_string_lossy()
        .ends_with(TERRAFORM_EXTENSION)
}

impl Parser for ModuleParser {
    fn parse_content(&self, content: &str, file_path: &Path) -> Result<Vec<ModuleRecord>> {
        let mut records = Vec::new();

        for caps in MODULE_BLOCK_PATTERN.captures_iter(content) {
            let resource_name = &caps[1];
            let body = &caps[2];

            let Some(source) = SOURCE_PATTERN.captures(body).map(|c| c[1].to_string()) else {
                tracing::debug!(
                    module = %resource_name,
                    file = %file_path.display(),
                    "Module block missing source attribute"
                );
                continue;
            };

            if !is_github_source(&source) {
                tracing::debug!(
                    module = %resource_name,
                    source = %source,
                    "Skipping non-GitHub source"
                );
                continue;
            }

            let (repository, version) = parse_github_source(&source);
            let record = ModuleRecord {
                resource_name: resource_name.to_string(),
                module_name: module_name_from_repository(&repository),
                repository,
                version,
            };
            tracing::debug!(
                file = %file_path.display(),
                module = %record,
                pinned = record.is_pinned(),
                "Found module"
            );
            records.push(record);
        }

        Ok(records)
    }
}
