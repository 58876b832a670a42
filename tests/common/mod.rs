//! Shared testing utilities for hymns CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables the binary reads; cleared so the host environment cannot leak in.
const AMBIENT_VARS: [&str; 4] = ["NODE_ENV", "HYMNS_JSON_URL", "HYMNS_CONFIG", "RUST_LOG"];

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory the CLI runs in.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `hymns` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("hymns").expect("Failed to locate hymns binary");
        cmd.current_dir(self.work_dir());
        for var in AMBIENT_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Default bootstrap target inside the work directory.
    pub fn dev_data_path(&self) -> PathBuf {
        self.work_dir().join("dev-data/Hymns.json")
    }

    /// Write `hymns.toml` into the work directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir().join("hymns.toml"), content).expect("Failed to write hymns.toml");
    }

    /// Pre-seed the local dataset copy.
    pub fn seed_dev_data(&self, content: &str) {
        let path = self.dev_data_path();
        fs::create_dir_all(path.parent().expect("dev data has a parent"))
            .expect("Failed to create dev-data directory");
        fs::write(path, content).expect("Failed to seed dev data");
    }

    /// Read the local dataset copy.
    pub fn read_dev_data(&self) -> String {
        fs::read_to_string(self.dev_data_path()).expect("Failed to read dev data")
    }
}
