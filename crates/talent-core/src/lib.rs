//! # talent-core
//!
//! Foundation crate for the Talent matching system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TalentConfig;
pub use errors::{TalentError, TalentResult};
pub use models::{
    Embedding, FeedbackEntry, FeedbackLabel, MatchResult, NewFeedback, Recommendation,
    WeightHistoryRecord, WeightParameters,
};
