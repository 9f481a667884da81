//! Core types shared across the scanner, parser and reporter.

use std::fmt;

/// A single module usage discovered in a Terraform file.
///
/// Records have no identity beyond their field values. Two identical
/// declarations in different files produce two equal records, and both are
/// kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRecord {
    /// Label of the `module` block (e.g. `vpc` in `module "vpc" { ... }`).
    pub resource_name: String,

    /// Display name derived from the repository location.
    pub module_name: String,

    /// Repository location with the `git::` prefix, query and `.git` removed.
    pub repository: String,

    /// Value of the `ref` query parameter, empty when unpinned.
    pub version: String,
}

impl ModuleRecord {
    /// Whether the source pinned a ref.
    #[must_use]
    pub fn is_pinned(&self) -> bool {
        !self.version.is_empty()
    }
}

impl fmt::Display for ModuleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pinned() {
            write!(f, "{} ({}@{})", self.resource_name, self.repository, self.version)
        } else {
            write!(f, "{} ({})", self.resource_name, self.repository)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(version: &str) -> ModuleRecord {
        ModuleRecord {
            resource_name: "vpc".to_string(),
            module_name: "org/vpc".to_string(),
            repository: "github.com/org/vpc".to_string(),
            version: version.to_string(),
        }
    }

    #[test]
    fn test_display_pinned() {
        assert_eq!(record("v1.0.0").to_string(), "vpc (github.com/org/vpc@v1.0.0)");
    }

    #[test]
    fn test_display_unpinned() {
        let r = record("");
        assert!(!r.is_pinned());
        assert_eq!(r.to_string(), "vpc (github.com/org/vpc)");
    }
}
