use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for confdoc.
///
/// Covers loading the type model and tool configuration, and the
/// failures that stop a whole run. Problems scoped to a single
/// generation pass are reported as diagnostics instead.
#[derive(Error, Debug)]
pub enum ConfdocError {
    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Type model (or tool configuration) could not be parsed
    #[error("failed to parse '{location}': {details}")]
    ModelParse {
        /// Location being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// A property type string is not a valid type reference
    #[error("invalid type reference '{text}': {details}")]
    InvalidTypeRef {
        /// The offending text
        text: String,
        /// What went wrong
        details: String,
    },

    /// Two model types share the same fully qualified name
    #[error("type '{0}' is declared more than once")]
    DuplicateType(String),

    /// A requested type does not exist in the model
    #[error("unknown type '{0}'")]
    UnknownType(String),
}

/// A specialized `Result` type for confdoc operations.
pub type Result<T> = result::Result<T, ConfdocError>;

impl ConfdocError {
    /// Creates a parse error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        ConfdocError::ModelParse {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error with file path context.
    pub fn io(error: impl fmt::Display, path: &Path) -> Self {
        ConfdocError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
