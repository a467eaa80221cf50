//! # talent-learning
//!
//! Turns hiring-manager verdicts into weight adjustments: a window of recent
//! feedback is summarized per label, an ordered rule table picks at most one
//! nudge, and the WeightAdapter applies it, clamps, renormalizes, and writes
//! the audit trail.

pub mod adapter;
pub mod rules;
pub mod window;

pub use adapter::{AdjustmentOutcome, WeightAdapter};
pub use rules::AdjustmentRule;
pub use window::FeedbackWindow;
