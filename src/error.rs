//! Error types for tree walking, file I/O and rule compilation.
//!
//! Rule violations are never errors; they are collected as
//! [`ViolationRecord`](crate::validate::ViolationRecord) values. Everything in
//! this module is fatal for the run that hits it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for hygiene operations
pub type HygieneResult<T> = Result<T, HygieneError>;

#[derive(Debug, Error)]
pub enum HygieneError {
    /// Directory traversal failed (unreadable directory, permission denied, missing root)
    #[error("failed to walk {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Existence probe for a path failed for a reason other than "not found"
    #[error("failed to inspect {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Console report could not be written
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),

    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("source directory {0} does not exist or is not a directory")]
    MissingSourceDir(PathBuf),
}

impl HygieneError {
    pub(crate) fn walk(root: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        HygieneError::Walk {
            root: root.into(),
            source,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HygieneError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HygieneError::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let err = HygieneError::read(
            "Source/Main.cpp",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("Source/Main.cpp"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn missing_source_dir_message() {
        let err = HygieneError::MissingSourceDir(PathBuf::from("/nowhere"));
        assert_eq!(
            err.to_string(),
            "source directory /nowhere does not exist or is not a directory"
        );
    }
}
