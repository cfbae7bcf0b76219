//! Common test utilities for mdmatter integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary directory holding documents for a test
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Copy a fixture from tests/fixtures into the workspace
    #[allow(dead_code)]
    pub fn copy_fixture(&self, fixture_name: &str) -> PathBuf {
        let content = fixture(fixture_name);
        self.write_file(fixture_name, &content)
    }

    /// mdmatter command running inside the workspace, isolated from the caller's env
    #[allow(dead_code, deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("mdmatter").expect("Failed to find mdmatter binary");
        cmd.current_dir(&self.path)
            .env_remove("MDMATTER_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a fixture file from tests/fixtures
#[allow(dead_code)]
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).expect("Failed to read fixture")
}
