//! # talent-observability
//!
//! Structured tracing for the matching and feedback paths: subscriber setup,
//! span definitions, and named log events shared by every engine.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
