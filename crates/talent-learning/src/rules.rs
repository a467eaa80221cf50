//! Ordered weight adjustment rules. First match wins; at most one fires per pass.
//!
//! 1. Rejected candidates scored high (not-fit mean > 6.5): shift weight from similarity to screening.
//! 2. Hired candidates scored low (good-fit mean < 5.0): lean on screening.
//! 3. Hired candidates scored high (good-fit mean > 7.5): reinforce both, raise confidence.
//! 4. Rejected candidates scored low (not-fit mean < 5.0): raise confidence only.
//!
//! Weight deltas are multiples of the learning rate.

use crate::window::FeedbackWindow;

/// Which label's mean a rule inspects, and on which side of its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    NotFitMeanAbove,
    GoodFitMeanBelow,
    GoodFitMeanAbove,
    NotFitMeanBelow,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentRule {
    pub condition: Condition,
    pub threshold: f64,
    /// Similarity delta as a multiple of the learning rate.
    pub similarity_factor: f64,
    /// Screening delta as a multiple of the learning rate.
    pub screening_factor: f64,
    /// Absolute confidence increase, capped at the configured maximum.
    pub confidence_delta: f64,
    /// Recorded as the history trigger when the rule fires.
    pub trigger_action: &'static str,
}

impl AdjustmentRule {
    /// Whether this rule fires for the window. A label with no entries
    /// never satisfies a condition on its mean.
    pub fn matches(&self, window: &FeedbackWindow) -> bool {
        match self.condition {
            Condition::NotFitMeanAbove => {
                window.not_fit_count() > 0 && window.not_fit_mean() > self.threshold
            }
            Condition::GoodFitMeanBelow => {
                window.good_fit_count() > 0 && window.good_fit_mean() < self.threshold
            }
            Condition::GoodFitMeanAbove => {
                window.good_fit_count() > 0 && window.good_fit_mean() > self.threshold
            }
            Condition::NotFitMeanBelow => {
                window.not_fit_count() > 0 && window.not_fit_mean() < self.threshold
            }
        }
    }

    /// Whether firing changes either weight (and so requires renormalizing).
    pub fn moves_weights(&self) -> bool {
        self.similarity_factor != 0.0 || self.screening_factor != 0.0
    }
}

/// All rules in priority order.
pub fn all_rules() -> Vec<AdjustmentRule> {
    vec![
        AdjustmentRule {
            condition: Condition::NotFitMeanAbove,
            threshold: 6.5,
            similarity_factor: -1.0,
            screening_factor: 1.0,
            confidence_delta: 0.0,
            trigger_action: "Reduce similarity weight (false positives detected)",
        },
        AdjustmentRule {
            condition: Condition::GoodFitMeanBelow,
            threshold: 5.0,
            similarity_factor: -0.25,
            screening_factor: 0.5,
            confidence_delta: 0.0,
            trigger_action: "Increase screening weight (good low-score candidates)",
        },
        AdjustmentRule {
            condition: Condition::GoodFitMeanAbove,
            threshold: 7.5,
            similarity_factor: 0.3,
            screening_factor: 0.2,
            confidence_delta: 0.1,
            trigger_action: "Reinforce current weights (strong matches)",
        },
        AdjustmentRule {
            condition: Condition::NotFitMeanBelow,
            threshold: 5.0,
            similarity_factor: 0.0,
            screening_factor: 0.0,
            confidence_delta: 0.05,
            trigger_action: "Low scores consistently rejected (good filtering)",
        },
    ]
}

/// The first rule that fires for the window, if any.
pub fn find_applicable_rule(window: &FeedbackWindow) -> Option<AdjustmentRule> {
    all_rules().into_iter().find(|rule| rule.matches(window))
}
