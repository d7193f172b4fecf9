//! Test fixture loader for HSN catalogs and golden validation scenarios.
//!
//! Provides typed deserialization of the fixture files and helper functions
//! for loading them in tests across crates.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("catalogs").exists() {
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

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// The sample catalog (`catalogs/sample_catalog.json`) as a code → description map.
pub fn sample_catalog() -> HashMap<String, String> {
    load_fixture("catalogs/sample_catalog.json")
}

/// The three-entry catalog used by the reference scenarios.
pub fn horse_catalog() -> HashMap<String, String> {
    [
        ("01", "Live animals"),
        ("0101", "Live horses, asses, mules and hinnies"),
        ("010110", "Pure-bred breeding animals"),
    ]
    .into_iter()
    .map(|(c, d)| (c.to_string(), d.to_string()))
    .collect()
}

/// One golden validation scenario against the sample catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub code: String,
    pub is_valid: bool,
    pub description: String,
    /// Rule labels expected to fail, in trail order.
    #[serde(default)]
    pub failed_rules: Vec<String>,
    /// Rule label → substring its message must contain.
    #[serde(default)]
    pub message_contains: HashMap<String, String>,
}

/// All golden scenarios from `golden/scenarios.json`.
pub fn golden_scenarios() -> Vec<GoldenScenario> {
    load_fixture("golden/scenarios.json")
}
