//! Structured log events for the feedback loop.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a persisted feedback entry.
pub fn feedback_recorded(feedback_id: i64, candidate_id: &str, label: &str) {
    tracing::info!(
        event = "feedback_recorded",
        feedback_id = feedback_id,
        candidate_id = %candidate_id,
        feedback = %label,
        "feedback recorded"
    );
}

/// Log the outcome of an adjustment pass.
pub fn weights_adjusted(
    trigger_action: &str,
    similarity_weight: f64,
    screening_weight: f64,
    confidence: f64,
    window: usize,
) {
    tracing::info!(
        event = "weights_adjusted",
        trigger_action = %trigger_action,
        similarity_weight = similarity_weight,
        screening_weight = screening_weight,
        confidence = confidence,
        window = window,
        "weights adjusted"
    );
}

/// Log an operator reset.
pub fn weights_reset(feedback_count: usize) {
    tracing::info!(
        event = "weights_reset",
        feedback_count = feedback_count,
        "weights reset to defaults"
    );
}

/// Log a swallowed adjustment failure.
pub fn adjustment_failed(error: &str) {
    tracing::warn!(
        event = "adjustment_failed",
        error = %error,
        "weight adjustment failed; feedback kept"
    );
}

/// Log a read path that fell back to a zero/default payload.
pub fn analytics_degraded(component: &str, error: &str) {
    tracing::warn!(
        event = "analytics_degraded",
        component = %component,
        error = %error,
        "analytics degraded"
    );
}

/// Log a batch candidate replaced by the failure sentinel.
pub fn batch_item_failed(candidate_id: &str, error: &str) {
    tracing::warn!(
        event = "batch_item_failed",
        candidate_id = %candidate_id,
        error = %error,
        "batch candidate could not be scored"
    );
}
