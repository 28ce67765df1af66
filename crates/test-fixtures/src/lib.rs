//! Fixture loader for ACC golden scenarios shared by integration tests.
//!
//! Fixtures are JSON files under this crate's `fixtures/` directory.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use acc_core::{LinkageMethod, SimilarityMatrix, StepAction};

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
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

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension()
                .is_some_and(|ext| ext == "json")
                .then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// A pair of input matrices with the build outcome they must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub unit: Option<f64>,
    pub method: Option<LinkageMethod>,
    pub local: SimilarityMatrix,
    pub global: SimilarityMatrix,
    pub expected: ExpectedLayout,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedLayout {
    pub actions: Vec<StepAction>,
    /// Step descriptions to compare, in order; may be shorter than `actions`.
    #[serde(default)]
    pub descriptions: Vec<String>,
    /// Display form of the final structure tree, when the build completes.
    pub final_structure: Option<String>,
    pub complete: bool,
}

/// Load `fixtures/scenarios/<name>.json`.
pub fn load_scenario(name: &str) -> LayoutScenario {
    load_fixture(&format!("scenarios/{name}.json"))
}

/// Every scenario under `fixtures/scenarios/`.
pub fn all_scenarios() -> Vec<LayoutScenario> {
    list_fixtures("scenarios")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_else(|| panic!("Non-UTF-8 fixture name {}", path.display()));
            load_fixture(&format!("scenarios/{name}"))
        })
        .collect()
}
