/// Talent system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Literal stored for a positive hiring verdict.
pub const FEEDBACK_GOOD_FIT: &str = "Good Fit";

/// Literal stored for a negative hiring verdict.
pub const FEEDBACK_NOT_A_FIT: &str = "Not a Fit";

/// Upper bound of the screening scale (lower bound is 0).
pub const SCREENING_SCORE_MAX: f64 = 10.0;

/// Upper bound of the final score scale.
pub const FINAL_SCORE_MAX: f64 = 10.0;

/// Final score assigned to a batch entry that could not be scored.
pub const FAILED_MATCH_SCORE: f64 = -1.0;

/// Screening score assumed for a batch candidate that supplies none.
pub const DEFAULT_BATCH_SCREENING_SCORE: f64 = 5.0;

/// Trigger description recorded when an operator resets the weights.
pub const MANUAL_RESET_TRIGGER: &str = "Manual reset to defaults";

/// Default number of weight history records returned to callers.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;
