// inirs/src/error.rs

//! Error types for INI parsing, lookup, and file handling.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for inirs operations.
pub type Result<T> = std::result::Result<T, IniError>;

/// Errors that can occur when parsing, querying, or writing INI documents.
#[derive(Error, Debug)]
pub enum IniError {
    /// A section or variable name does not match the name grammar
    /// (one or more ASCII alphanumeric characters).
    #[error("invalid section or variable name: {name:?}")]
    InvalidName { name: String },

    /// Malformed input text. Parsing aborts at the first offending line;
    /// entries from earlier lines remain applied.
    #[error("parse error at line {line}: {message}")]
    Parse { message: String, line: usize },

    /// A lookup without a default for a pair that is not stored.
    #[error("variable {variable:?} not found in section {section:?}")]
    VariableNotFound { section: String, variable: String },

    /// A stored value that does not convert to the requested type.
    #[error("value {value:?} of {section}.{variable} is not a valid {expected}")]
    TypeConversion {
        section: String,
        variable: String,
        value: String,
        expected: &'static str,
    },

    /// Refusing to overwrite an existing file (when force=false).
    #[error("file already exists: {0}")]
    FileAlreadyExists(PathBuf),

    /// I/O error when reading or writing files.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error.
    #[cfg(feature = "yaml")]
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl IniError {
    /// Create a parse error with a position.
    pub fn parse_error<S: Into<String>>(message: S, line: usize) -> Self {
        IniError::Parse {
            message: message.into(),
            line,
        }
    }
}
