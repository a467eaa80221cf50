//! Span definitions per operation: matching, feedback recording, weight adjustment.

/// Create a span around one candidate/job match.
#[macro_export]
macro_rules! matching_span {
    ($candidate_id:expr, $job_id:expr) => {
        tracing::info_span!("talent.matching", candidate_id = %$candidate_id, job_id = %$job_id)
    };
}

/// Create a span around a batch ranking.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr) => {
        tracing::info_span!("talent.batch", batch_size = $batch_size)
    };
}

/// Create a span around a feedback write and the pass it triggers.
#[macro_export]
macro_rules! feedback_span {
    ($candidate_id:expr, $label:expr) => {
        tracing::info_span!("talent.feedback", candidate_id = %$candidate_id, feedback = %$label)
    };
}

/// Create a span around one weight adjustment pass.
#[macro_export]
macro_rules! adjustment_span {
    ($feedback_count:expr) => {
        tracing::info_span!("talent.adjustment", feedback_count = $feedback_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const MATCHING: &str = "talent.matching";
    pub const BATCH: &str = "talent.batch";
    pub const FEEDBACK: &str = "talent.feedback";
    pub const ADJUSTMENT: &str = "talent.adjustment";
}
