//! Error taxonomy: input/validation faults, storage faults, and the
//! top-level `TalentError` every public API returns.

mod embedding_error;
mod storage_error;
mod talent_error;
mod validation_error;

pub use embedding_error::EmbeddingError;
pub use storage_error::StorageError;
pub use talent_error::{TalentError, TalentResult};
pub use validation_error::ValidationError;
