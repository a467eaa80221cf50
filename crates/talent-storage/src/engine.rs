//! StorageEngine: owns the ConnectionPool, implements IFeedbackStorage +
//! IWeightHistoryStorage, runs migrations at startup.

use std::path::Path;

use talent_core::config::StorageConfig;
use talent_core::errors::TalentResult;
use talent_core::models::{
    FeedbackEntry, LabelStatistics, NewFeedback, NewWeightHistory, WeightHistoryRecord,
};
use talent_core::traits::{IFeedbackStorage, IWeightHistoryStorage};

use crate::migrations;
use crate::pool::{pragmas, ConnectionPool};
use crate::queries::{feedback_ops, maintenance, weight_history_ops};

/// The main storage engine. Every write is committed before it returns;
/// there is no cache in front of the tables.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk with default settings.
    pub fn open(path: &Path) -> TalentResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed engine with explicit pool and pragma settings.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> TalentResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(dir = %parent.display(), error = %e, "could not create data directory");
            }
        }
        let pool = ConnectionPool::open(path, config)?;
        let engine = Self { pool };
        engine.initialize()?;
        tracing::debug!(path = %path.display(), "feedback storage opened");
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> TalentResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations.
    fn initialize(&self) -> TalentResult<()> {
        self.pool.writer.with_conn(migrations::run_migrations)
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> TalentResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> TalentResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }

    /// Current schema version.
    pub fn schema_version(&self) -> TalentResult<u32> {
        self.pool.writer.with_conn(migrations::current_version)
    }

    pub fn integrity_check(&self) -> TalentResult<bool> {
        self.pool.writer.with_conn(maintenance::integrity_check)
    }

    pub fn wal_checkpoint(&self) -> TalentResult<()> {
        self.pool.writer.with_conn(maintenance::wal_checkpoint)
    }

    pub fn is_wal_mode(&self) -> TalentResult<bool> {
        self.pool.writer.with_conn(pragmas::verify_wal_mode)
    }
}

impl IFeedbackStorage for StorageEngine {
    fn record(&self, entry: &NewFeedback) -> TalentResult<i64> {
        self.pool
            .writer
            .with_conn(|conn| feedback_ops::insert_feedback(conn, entry))
    }

    fn count(&self) -> TalentResult<usize> {
        self.with_reader(feedback_ops::count_feedback)
    }

    fn recent(&self, limit: usize) -> TalentResult<Vec<FeedbackEntry>> {
        self.with_reader(|conn| feedback_ops::recent_feedback(conn, Some(limit)))
    }

    fn all(&self) -> TalentResult<Vec<FeedbackEntry>> {
        self.with_reader(|conn| feedback_ops::recent_feedback(conn, None))
    }

    fn label_statistics(&self) -> TalentResult<Vec<LabelStatistics>> {
        self.with_reader(feedback_ops::label_statistics)
    }
}

impl IWeightHistoryStorage for StorageEngine {
    fn append(&self, record: &NewWeightHistory) -> TalentResult<i64> {
        self.pool
            .writer
            .with_conn(|conn| weight_history_ops::insert_record(conn, record))
    }

    fn recent_history(&self, limit: usize) -> TalentResult<Vec<WeightHistoryRecord>> {
        self.with_reader(|conn| weight_history_ops::recent_records(conn, limit))
    }

    fn latest_history(&self) -> TalentResult<Option<WeightHistoryRecord>> {
        self.with_reader(weight_history_ops::latest_record)
    }

    fn history_count(&self) -> TalentResult<usize> {
        self.with_reader(weight_history_ops::count_records)
    }
}
