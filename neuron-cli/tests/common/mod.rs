//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment home passed to every command built with [`TestEnv::command`].
#[allow(dead_code)]
pub const HOME: &str = "/home/svc";

/// A small inventory with one plain host and one cls host.
#[allow(dead_code)]
pub const INVENTORY: &str = r"
all:
  vars:
    release_version: 1.4.0
    neuron_config:
      team: acme
      app: billing
  hosts:
    web-1:
      instance_id: inst-1
    web-2:
      instance_id: inst-2
  children:
    java:
      vars:
        neuron_features:
          cls: true
        neuron_cls_java:
          main_class: com.acme.Main
          java_home: /opt/jdk
      hosts:
        web-2:
";

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Output-affecting environment variables are cleared so the host
    /// environment cannot leak into assertions.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("neuron").expect("Failed to find neuron binary");
        cmd.env_remove("NEURON_OUTPUT_FORMAT")
            .env_remove("NEURON_ENV_HOME")
            .env_remove("NEURON_LOG_MODE");
        cmd
    }

    /// Get a command builder with `--env-home` set to [`HOME`].
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--env-home").arg(HOME);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write [`INVENTORY`] and return its path.
    pub fn inventory(&self) -> PathBuf {
        self.write("inventory.yml", INVENTORY)
    }

    /// Run a command expected to print JSON and parse its stdout.
    ///
    /// The exit status is not checked; invalid reports still print JSON.
    pub fn json(&self, cmd: &mut Command) -> serde_json::Value {
        let output = cmd.output().expect("Failed to run command");
        serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({e}): {}\nstderr: {}",
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            )
        })
    }
}
