//! Application error types using thiserror
//!
//! Error hierarchy:
//! - DiffError: issues with the supplied version diff
//! - TreeError: issues reading the installed package tree

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version diff input errors
    #[error(transparent)]
    Diff(#[from] DiffError),

    /// Installed package tree errors
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Errors related to the supplied version diff
#[derive(Error, Debug)]
pub enum DiffError {
    /// Diff file could not be read
    #[error("failed to read diff from {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Diff could not be read from stdin
    #[error("failed to read diff from stdin: {source}")]
    StdinError {
        #[source]
        source: std::io::Error,
    },

    /// Diff was not a JSON array of [name, current, wanted, latest] tuples
    #[error("failed to parse diff: {message}")]
    ParseError { message: String },
}

/// Errors related to reading the installed package tree
#[derive(Error, Debug)]
pub enum TreeError {
    /// Root package.json not found
    #[error("package.json not found in {path}")]
    RootNotFound { path: PathBuf },

    /// Failed to read a manifest file
    #[error("failed to read manifest {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a manifest file
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

impl TreeError {
    /// Creates a new RootNotFound error
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        TreeError::RootNotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        TreeError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_error_root_not_found() {
        let err = TreeError::root_not_found("/project");
        let msg = format!("{}", err);
        assert!(msg.contains("package.json not found"));
        assert!(msg.contains("/project"));
    }

    #[test]
    fn test_tree_error_json_parse() {
        let err = TreeError::json_parse_error("/project/package.json", "unexpected token");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse JSON"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_diff_error_parse() {
        let err = DiffError::ParseError {
            message: "expected 4 elements".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse diff"));
        assert!(msg.contains("expected 4 elements"));
    }

    #[test]
    fn test_app_error_from_tree_error() {
        let app_err: AppError = TreeError::root_not_found("/missing").into();
        assert!(format!("{}", app_err).contains("package.json not found"));
    }

    #[test]
    fn test_app_error_from_diff_error() {
        let app_err: AppError = DiffError::ParseError {
            message: "bad".to_string(),
        }
        .into();
        assert!(format!("{}", app_err).contains("failed to parse diff"));
    }
}
