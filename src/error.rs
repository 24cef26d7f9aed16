//! Error types for geodat.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for geodat operations.
///
/// The wire encoder itself never fails; every variant here belongs to the
/// upstream list-reading pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A list file could not be opened
    #[error("failed to read {}: {source}", path.display())]
    ReadList {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A recognized prefix with nothing after it
    #[error("line {line}: empty value after {prefix:?}")]
    EmptyValue { line: usize, prefix: &'static str },

    /// The same tag was requested more than once (case-insensitive)
    #[error("duplicate tag: {0}")]
    DuplicateTag(String),

    /// Every requested tag was empty, or none were requested
    #[error("no rule sets to write")]
    NoRuleSets,
}

/// Result type alias for geodat operations.
pub type Result<T> = std::result::Result<T, Error>;
