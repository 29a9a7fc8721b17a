use std::fs;
use std::path::{Path, PathBuf};

use pasc::ast::Program;

/// Path to a fixture under tests/fixtures/
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a test fixture from tests/fixtures/
pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Load a program serialized as JSON from tests/fixtures/
pub fn load_program(name: &str) -> Program {
    serde_json::from_str(&load_fixture(name))
        .unwrap_or_else(|e| panic!("Fixture {} is not a program: {}", name, e))
}
