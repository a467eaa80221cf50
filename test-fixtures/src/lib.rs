//! Test fixture loader for feedback-loop scenarios shared by integration
//! tests across the workspace.
//!
//! Each scenario under `feedback/` lists feedback events in submission order
//! and the weight state expected once they have all been recorded.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// One hiring-manager verdict as submitted by a caller.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackEvent {
    pub candidate_id: String,
    pub hiring_manager_id: String,
    pub final_score: f64,
    /// Raw label text, validated by the code under test.
    pub feedback: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Weight state after every event of a scenario has been recorded.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedWeights {
    pub similarity_weight: f64,
    pub screening_weight: f64,
    pub confidence: f64,
    /// Number of weight history records written.
    pub history_count: usize,
    /// Trigger of the most recent history record, if any was written.
    pub last_trigger: Option<String>,
}

/// A named feedback sequence with its expected outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackScenario {
    pub name: String,
    pub description: String,
    pub events: Vec<FeedbackEvent>,
    pub expected: ExpectedWeights,
}

/// Load one scenario from `feedback/<name>.json`.
pub fn load_feedback_scenario(name: &str) -> FeedbackScenario {
    load_fixture(&format!("feedback/{name}.json"))
}

/// Every scenario under `feedback/`, sorted by file name.
pub fn all_feedback_scenarios() -> Vec<FeedbackScenario> {
    list_fixtures("feedback")
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
        })
        .collect()
}
