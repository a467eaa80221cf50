//! # talent-analytics
//!
//! Monitoring reports computed fresh on every call. Store errors degrade to
//! zero-valued payloads instead of propagating so the display stays up.

pub mod aggregator;

pub use aggregator::AnalyticsAggregator;
