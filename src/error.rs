//! Fatal errors: conditions that stop a run before or instead of validation.
//!
//! Schema violations are not errors in this sense; they are collected as
//! [`ValidationError`](crate::types::ValidationError) records.

use std::path::PathBuf;

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, ValidatorError>;

#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    /// The input file could not be read.
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed YAML. `message` is the parser's diagnostic.
    #[error("{message}")]
    Parse { message: String, line: Option<u32> },

    /// The input contained no YAML documents.
    #[error("empty document")]
    EmptyInput,
}

impl ValidatorError {
    /// Source line associated with the error, if one is known.
    pub fn line(&self) -> Option<u32> {
        match self {
            Self::Parse { line, .. } => *line,
            _ => None,
        }
    }
}
