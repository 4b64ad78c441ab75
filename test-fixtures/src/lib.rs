//! Test fixture loader for cohortsim golden scenarios.
//!
//! Scenario configs live under `test-fixtures/scenarios/` (TOML) and their
//! expected outputs under `test-fixtures/golden/` (JSON).

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
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

/// Load a fixture file as raw text (scenario TOML).
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Expected output of a golden scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub description: String,
    #[serde(default)]
    pub installs_total: Vec<i64>,
    pub variants: BTreeMap<String, GoldenVariant>,
    /// Reporting day (as a string key) to the variant with more revenue through that day.
    pub winners: BTreeMap<String, String>,
    /// Reporting day (as a string key) to the variant with more DAU on that day.
    #[serde(default)]
    pub dau_winners: BTreeMap<String, String>,
}

/// Expected series and totals for one variant.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenVariant {
    pub dau: Vec<f64>,
    pub revenue: Vec<f64>,
    #[serde(default)]
    pub dau_by_source: BTreeMap<String, Vec<f64>>,
    pub revenue_through: BTreeMap<String, f64>,
    #[serde(default)]
    pub revenue_with_sale_through: BTreeMap<String, f64>,
}

/// Relative closeness check for golden comparisons.
pub fn approx_eq(actual: f64, expected: f64, rel_tol: f64) -> bool {
    (actual - expected).abs() <= rel_tol * (1.0 + expected.abs())
}
