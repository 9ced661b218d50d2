//! Error types for Sentiscope

use std::path::PathBuf;

/// Result type alias using Sentiscope's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Sentiscope operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither the model file nor its archive exists
    #[error("model archive not found: {}", .0.display())]
    ArchiveNotFound(PathBuf),

    /// The archive was extracted but did not contain the model file
    #[error("model file not found after extraction: {}", .0.display())]
    ModelNotFound(PathBuf),

    /// Unreadable or unsafe model archive
    #[error("archive error: {0}")]
    Archive(String),

    /// Invalid model artifact
    #[error("model error: {0}")]
    Model(String),

    /// The predictor returned a different number of labels than lines submitted
    #[error("predictor returned {actual} labels for {expected} lines")]
    PredictionMismatch { expected: usize, actual: usize },

    /// Submitted text contained no non-empty lines
    #[error("input contains no non-empty lines")]
    EmptyInput,

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new archive error
    pub fn archive(msg: impl Into<String>) -> Self {
        Self::Archive(msg.into())
    }

    /// Create a new model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }
}
