//! Error types for tabulation.
//!
//! Writing columns into a sink can only fail the way the sink fails, so the
//! core entry points return [`std::io::Result`]. [`TabulateError`] covers the
//! surrounding surface: rendering into a `String`, and loading or applying a
//! [`Layout`](crate::Layout).

use thiserror::Error;

/// Errors raised while rendering into memory or applying a layout.
#[derive(Debug, Error)]
pub enum TabulateError {
    /// The output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendered output is not valid UTF-8.
    ///
    /// Happens when a word wider than its column is hard-wrapped in the
    /// middle of a multi-byte character.
    #[error("rendered output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The fill character does not fit in a single byte.
    #[error("fill character {0:?} is not a single-byte ASCII character")]
    InvalidFill(char),

    /// Number of texts does not match the number of configured widths.
    #[error("layout has {expected} columns but {actual} texts were given")]
    ColumnCountMismatch { expected: usize, actual: usize },

    /// Layout configuration could not be parsed.
    #[error("invalid layout: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for TabulateError {
    fn from(err: serde_yaml::Error) -> Self {
        TabulateError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TabulateError {
    fn from(err: serde_json::Error) -> Self {
        TabulateError::Config(err.to_string())
    }
}

/// Result type for tabulation operations.
pub type Result<T> = std::result::Result<T, TabulateError>;
