use talent_core::errors::*;
use talent_core::models::{FeedbackLabel, NewFeedback};

#[test]
fn invalid_feedback_error_carries_value() {
    let err = ValidationError::InvalidFeedback {
        value: "Maybe".into(),
    };
    assert!(err.to_string().contains("Maybe"));
}

#[test]
fn dimension_mismatch_carries_both_lengths() {
    let err = EmbeddingError::DimensionMismatch {
        expected: 768,
        actual: 384,
    };
    let msg = err.to_string();
    assert!(msg.contains("768"));
    assert!(msg.contains("384"));
}

#[test]
fn score_out_of_range_names_the_field() {
    let err = ValidationError::ScoreOutOfRange {
        field: "screening_score".into(),
        value: 11.0,
        min: 0.0,
        max: 10.0,
    };
    let msg = err.to_string();
    assert!(msg.contains("screening_score"));
    assert!(msg.contains("11"));
}

// --- From impls ---

#[test]
fn storage_error_converts_to_talent_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let err: TalentError = storage_err.into();
    assert!(matches!(err, TalentError::StorageError(_)));
    assert!(err.is_storage_error());
    assert!(!err.is_input_error());
}

#[test]
fn embedding_and_validation_errors_are_input_errors() {
    let emb: TalentError = EmbeddingError::Empty {
        side: "job".into(),
    }
    .into();
    let val: TalentError = ValidationError::InvalidFeedback {
        value: "x".into(),
    }
    .into();
    assert!(emb.is_input_error());
    assert!(val.is_input_error());
}

#[test]
fn adjustment_failure_is_neither_input_nor_storage() {
    let err = TalentError::AdjustmentFailed {
        reason: "window unavailable".into(),
    };
    assert!(!err.is_input_error());
    assert!(!err.is_storage_error());
    assert!(err.to_string().contains("window unavailable"));
}

// --- Feedback literal validation ---

#[test]
fn only_exact_literals_parse() {
    assert_eq!("Good Fit".parse::<FeedbackLabel>().unwrap(), FeedbackLabel::GoodFit);
    assert_eq!("Not a Fit".parse::<FeedbackLabel>().unwrap(), FeedbackLabel::NotAFit);
    assert!("good fit".parse::<FeedbackLabel>().is_err());
    assert!(" Good Fit".parse::<FeedbackLabel>().is_err());
    assert!("Maybe".parse::<FeedbackLabel>().is_err());
}

#[test]
fn new_feedback_rejects_non_finite_score() {
    let err = NewFeedback::parse("c1", "hm1", f64::NAN, "Good Fit", None).unwrap_err();
    assert!(err.is_input_error());
}

#[test]
fn new_feedback_rejects_unknown_label() {
    let err = NewFeedback::parse("c1", "hm1", 7.0, "Maybe", None).unwrap_err();
    assert!(matches!(
        err,
        TalentError::ValidationError(ValidationError::InvalidFeedback { .. })
    ));
}
