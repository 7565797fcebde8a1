use std::fs;
use std::path::{Path, PathBuf};

use json_cow_patch::PatchError;
use serde::Deserialize;
use serde_json::Value;

pub const FIXTURE_FILES: &[&str] = &["rfc6902.json", "cases.json"];

/// Error categories a fixture can expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedError {
    InvalidOperation,
    PathNotFound,
    BannedKey,
    AssertionFailed,
}

impl ExpectedError {
    pub fn matches(&self, err: &PatchError) -> bool {
        matches!(
            (self, err),
            (ExpectedError::InvalidOperation, PatchError::InvalidOperation(_))
                | (ExpectedError::PathNotFound, PatchError::PathNotFound { .. })
                | (ExpectedError::BannedKey, PatchError::BannedKey { .. })
                | (ExpectedError::AssertionFailed, PatchError::AssertionFailed { .. })
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchCase {
    pub comment: String,
    pub doc: Value,
    pub patch: Value,
    #[serde(default)]
    pub expected: Option<Value>,
    #[serde(default)]
    pub error: Option<ExpectedError>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone)]
pub struct FixtureRecord {
    pub file: &'static str,
    pub case: PatchCase,
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn read_json(path: &Path) -> Value {
    let data = fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {:?}: {e}", path));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {:?}: {e}", path))
}

pub fn load_fixtures() -> Vec<FixtureRecord> {
    let dir = fixtures_dir();
    let mut out = Vec::new();
    for &file in FIXTURE_FILES {
        let cases: Vec<PatchCase> = serde_json::from_value(read_json(&dir.join(file)))
            .unwrap_or_else(|e| panic!("invalid fixture layout in {file}: {e}"));
        out.extend(cases.into_iter().map(|case| FixtureRecord { file, case }));
    }
    out
}
