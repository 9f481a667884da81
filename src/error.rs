//! Error types for tfmodscan.
//!
//! Every error carries the source location where it was raised, filled in by
//! the [`err!`](crate::err) macro. Scanning is all-or-nothing: the first I/O
//! failure aborts the run and is propagated with `?`.
//!
//! # Example
//!
//! ```rust
//! use tfmodscan::error::{ScanError, Result};
//!
//! fn read(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path).map_err(|e| ScanError::io(path, e, file!(), line!()))
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Macro to create errors with automatic source location tracking.
///
/// Usage:
/// ```ignore
/// return Err(err!(DirectoryNotFound { path: root.to_path_buf() }));
/// ```
#[macro_export]
macro_rules! err {
    ($variant:ident { $($field:ident: $value:expr),* $(,)? }) => {
        $crate::error::ScanError::$variant {
            $($field: $value,)*
            src_path: file!(),
            src_line: line!(),
        }
    };
}

/// A specialized Result type for tfmodscan operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// The main error type for tfmodscan.
#[derive(Error, Debug)]
pub enum ScanError {
    /// I/O error with path context.
    #[error("I/O error at '{path}' ({src_path}:{src_line}): {source}")]
    Io {
        /// The path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// Directory traversal error (unreadable entry, broken permissions, loops).
    #[error("Failed to walk '{path}' ({src_path}:{src_line}): {source}")]
    Walk {
        /// The path being visited, or the scan root when unknown
        path: PathBuf,
        /// The underlying walkdir error
        #[source]
        source: walkdir::Error,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// The scan root does not exist.
    #[error("Directory not found: {path} ({src_path}:{src_line})")]
    DirectoryNotFound {
        /// The missing directory path
        path: PathBuf,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },
}

impl ScanError {
    /// Creates an `Io` error.
    #[must_use]
    pub fn io(
        path: impl Into<PathBuf>,
        source: std::io::Error,
        src_path: &'static str,
        src_line: u32,
    ) -> Self {
        Self::Io {
            path: path.into(),
            source,
            src_path,
            src_line,
        }
    }

    /// Returns the process exit code for the error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::PermissionDenied => 13,
            Self::Walk { source, .. }
                if source
                    .io_error()
                    .is_some_and(|e| e.kind() == std::io::ErrorKind::PermissionDenied) =>
            {
                13
            }
            Self::DirectoryNotFound { .. } => 15,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_err_macro_records_location() {
        let e = crate::err!(DirectoryNotFound {
            path: PathBuf::from("missing"),
        });
        match e {
            ScanError::DirectoryNotFound { path, src_path, .. } => {
                assert_eq!(path, PathBuf::from("missing"));
                assert!(src_path.ends_with("error.rs"));
            }
            _ => panic!("Expected DirectoryNotFound"),
        }
    }

    #[test]
    fn test_exit_codes() {
        let denied = ScanError::io(
            "main.tf",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            file!(),
            line!(),
        );
        assert_eq!(denied.exit_code(), 13);

        let other = ScanError::io(
            "main.tf",
            std::io::Error::from(std::io::ErrorKind::InvalidData),
            file!(),
            line!(),
        );
        assert_eq!(other.exit_code(), 1);
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let e = ScanError::io(
            "infra/main.tf",
            std::io::Error::from(std::io::ErrorKind::NotFound),
            file!(),
            line!(),
        );
        assert!(e.to_string().contains("infra/main.tf"));
    }
}
