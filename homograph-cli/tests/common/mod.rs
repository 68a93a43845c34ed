//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the caller's environment
//! - Configuration file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads.
const HOMOGRAPH_ENV_VARS: &[&str] = &[
    "HOMOGRAPH_WORKING_DIR",
    "HOMOGRAPH_FORBIDDEN",
    "HOMOGRAPH_OUTPUT_FORMAT",
    "HOMOGRAPH_CONFIG_DIR",
    "HOMOGRAPH_LOG_MODE",
];

/// Test environment with isolated configuration.
///
/// Commands run inside a temporary project directory with an empty user
/// configuration directory, so no configuration from the host leaks in.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the user configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("user-config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a command with a clean environment but no pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("homograph").expect("Failed to find homograph binary");
        for var in HOMOGRAPH_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder with the config directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write the project `homograph.yaml`.
    pub fn write_project_config(&self, contents: &str) -> PathBuf {
        self.write_file("homograph.yaml", contents)
    }

    /// Write the user `config.yaml`.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let path = self.config_dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Write a file under the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
