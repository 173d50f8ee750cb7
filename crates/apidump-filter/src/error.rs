//! Error types for the apidump-filter crate.
//!
//! Evaluating a filter never fails. Errors only come from building filters
//! out of user patterns and from loading dump data.

use thiserror::Error;

/// Errors that can occur when building filters or loading an API dump.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// The dump is not valid JSON or does not have the expected layout.
    #[error("invalid API dump: {0}")]
    InvalidDump(#[from] serde_json::Error),

    /// The dump could not be read.
    #[error("failed to read API dump: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for apidump-filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
