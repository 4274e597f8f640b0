//! Common test utilities

use githost::{GitHostInfo, HostRegistry};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary directory for testing
#[allow(dead_code)] // Test utility for integration tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write `contents` as `config.toml` inside `dir` and return its path
#[allow(dead_code)] // Test utility for integration tests
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, contents).expect("Failed to write config file");
    path
}

/// Resolve `url` against `registry`, failing the test when nothing matches
#[allow(dead_code)] // Test utility for integration tests
pub fn resolve(registry: &HostRegistry, url: &str) -> GitHostInfo {
    registry
        .resolve(url)
        .unwrap_or_else(|| panic!("{url} should resolve"))
}
