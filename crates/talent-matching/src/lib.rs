//! # talent-matching
//!
//! Candidate/job scoring: cosine similarity rescaled to [0, 1], a weighted
//! blend with the screening score on a 0–10 scale, recommendation tiers and
//! explanations, and batch ranking with top-K, threshold, and statistics.

pub mod batch;
pub mod combiner;
pub mod engine;
pub mod explanation;
pub mod similarity;

pub use batch::BatchCandidate;
pub use engine::MatchingEngine;
