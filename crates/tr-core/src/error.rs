use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or loading a question pool.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The pool file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The pool source is not valid JSON or does not match the record shape.
    #[error("invalid pool data: {0}")]
    Json(#[from] serde_json::Error),

    /// A question record breaks one of the record rules.
    #[error("invalid question: {0}")]
    InvalidQuestion(String),
}
