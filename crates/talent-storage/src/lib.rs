//! # talent-storage
//!
//! SQLite persistence for the append-only feedback log and the weight
//! history audit trail. One serialized writer, a read pool for file-backed
//! databases, and versioned migrations.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use talent_core::errors::{StorageError, TalentError};

/// Wrap a lower-level failure message as a storage error.
pub fn to_storage_err(message: impl Into<String>) -> TalentError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}
