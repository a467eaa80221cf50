//! # talent-runtime
//!
//! The operations a UI or API layer calls: scoring, feedback recording,
//! weight inspection and reset, analytics, and export. Each `TalentRuntime`
//! owns its engines and its weight state; there is no process-wide instance.

pub mod runtime;

pub use runtime::{RuntimeOptions, TalentRuntime};
