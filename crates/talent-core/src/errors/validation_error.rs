/// Input validation errors for scores and feedback literals.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} {value} is outside [{min}, {max}]")]
    ScoreOutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NonFiniteScore { field: String },

    #[error("feedback must be 'Good Fit' or 'Not a Fit', got '{value}'")]
    InvalidFeedback { value: String },
}
