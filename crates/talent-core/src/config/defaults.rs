// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_PATH: &str = "./data/feedback.db";
pub const DEFAULT_WAL_MODE: bool = true;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Matching ---
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_MIN_SCORE: f64 = 6.0;

// --- Learning ---
pub const DEFAULT_LEARNING_RATE: f64 = 0.05;
pub const DEFAULT_ADJUSTMENT_THRESHOLD: usize = 5;
pub const DEFAULT_FEEDBACK_WINDOW: usize = 10;
pub const DEFAULT_SIMILARITY_WEIGHT: f64 = 0.6;
pub const DEFAULT_SCREENING_WEIGHT: f64 = 0.4;
pub const DEFAULT_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_MAX_CONFIDENCE: f64 = 0.95;
pub const DEFAULT_SIMILARITY_WEIGHT_MIN: f64 = 0.3;
pub const DEFAULT_SIMILARITY_WEIGHT_MAX: f64 = 0.8;
pub const DEFAULT_SCREENING_WEIGHT_MIN: f64 = 0.2;
pub const DEFAULT_SCREENING_WEIGHT_MAX: f64 = 0.7;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

// --- Environment overrides ---
pub const ENV_DB_PATH: &str = "FEEDBACK_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
