//! Error types for mood-core

use std::path::PathBuf;

use thiserror::Error;

/// Warning shown when a submission carries no feedback text.
pub const EMPTY_FEEDBACK_WARNING: &str = "Please enter feedback text.";

/// Top-level error type for feedback operations
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// The submission was rejected before scoring; nothing was stored
    #[error("{0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl FeedbackError {
    /// Rejection for empty or whitespace-only feedback
    pub fn empty_feedback() -> Self {
        Self::Validation(EMPTY_FEEDBACK_WARNING.to_string())
    }

    /// Returns true if this is a validation rejection rather than a failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Errors from the flat-file feedback log
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("feedback store unavailable at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a valid feedback log
    #[error("malformed feedback log at line {line}: {message}")]
    Malformed { line: u64, message: String },

    /// Records could not be encoded as CSV
    #[error("failed to encode feedback log: {0}")]
    Encode(String),
}

impl StoreError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unavailable {
            path: path.into(),
            source,
        }
    }
}
