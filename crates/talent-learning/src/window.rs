//! Per-label summary of the most recent feedback entries.

use talent_core::models::{FeedbackEntry, FeedbackLabel};

/// Mean assumed for a label with no entries in the window.
pub const NEUTRAL_MEAN: f64 = 5.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackWindow {
    good_fit_scores: Vec<f64>,
    not_fit_scores: Vec<f64>,
}

impl FeedbackWindow {
    pub fn from_entries(entries: &[FeedbackEntry]) -> Self {
        let mut window = Self::default();
        for entry in entries {
            match entry.feedback {
                FeedbackLabel::GoodFit => window.good_fit_scores.push(entry.final_score),
                FeedbackLabel::NotAFit => window.not_fit_scores.push(entry.final_score),
            }
        }
        window
    }

    /// Number of entries examined.
    pub fn len(&self) -> usize {
        self.good_fit_scores.len() + self.not_fit_scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn good_fit_count(&self) -> usize {
        self.good_fit_scores.len()
    }

    pub fn not_fit_count(&self) -> usize {
        self.not_fit_scores.len()
    }

    pub fn good_fit_mean(&self) -> f64 {
        mean_or_neutral(&self.good_fit_scores)
    }

    pub fn not_fit_mean(&self) -> f64 {
        mean_or_neutral(&self.not_fit_scores)
    }
}

fn mean_or_neutral(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        NEUTRAL_MEAN
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}
