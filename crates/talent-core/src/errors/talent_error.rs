use super::{EmbeddingError, StorageError, ValidationError};

/// Convenience alias used by every fallible API in the workspace.
pub type TalentResult<T> = Result<T, TalentError>;

/// Top-level error for the Talent matching system.
#[derive(Debug, thiserror::Error)]
pub enum TalentError {
    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("weight adjustment failed: {reason}")]
    AdjustmentFailed { reason: String },

    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl TalentError {
    /// Input and validation faults are the caller's mistake: they are
    /// returned synchronously and never logged as system faults.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmbeddingError(_) | Self::ValidationError(_))
    }

    /// Whether the persistence layer produced this error.
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Self::StorageError(_))
    }
}
