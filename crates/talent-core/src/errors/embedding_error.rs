/// Embedding shape errors, raised before any numeric work.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("{side} embedding is empty")]
    Empty { side: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
