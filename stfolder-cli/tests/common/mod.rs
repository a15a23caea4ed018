//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Configuration file fixtures
//! - Command builder helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated configuration file.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the folders configuration file
    pub config_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The configuration file path is chosen but not written yet.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_path = temp_path.join("folders.yaml");

        Self {
            temp_dir,
            temp_path,
            config_path,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("stfolder").expect("Failed to find stfolder binary");
        cmd.env_remove("STFOLDER_CONFIG")
            .env_remove("STFOLDER_LOG_MODE")
            .env_remove("STFOLDER_OUTPUT_FORMAT");
        cmd
    }

    /// Get a command builder with `--config` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write the configuration file.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
    }

    /// Write a configuration with one folder per `(id, path)` pair.
    pub fn write_folders(&self, folders: &[(&str, &Path)]) {
        let mut yaml = String::from("folders:\n");
        for (id, path) in folders {
            yaml.push_str(&format!("  - id: {id}\n    path: {}\n", path.display()));
        }
        self.write_config(&yaml);
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical spelling of a directory on Unix.
#[allow(dead_code)]
pub fn canonical_dir(path: &Path) -> String {
    format!("{}/", path.display())
}
