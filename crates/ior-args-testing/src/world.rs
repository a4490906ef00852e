//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated results tree
//! - Placing IOR output files into dataset directories
//! - Executing the CLI against that tree

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use ior_args_testing::TestWorld;
///
/// let world = TestWorld::new()
///     .with_output("randio", "ior-n1p8.out", "/src/glior-3.3/install/bin/ior -w -z");
///
/// let result = world.run(&["--format", "plain"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    results_root: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty results tree.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let results_root = temp_dir.path().join("results");
        std::fs::create_dir_all(&results_root).expect("Failed to create results dir");

        Self {
            temp_dir,
            results_root,
            env_vars: HashMap::new(),
        }
    }

    /// Get the results root the CLI is pointed at.
    pub fn results_root(&self) -> &Path {
        &self.results_root
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Populate the results tree with the reference parameter sweep.
    pub fn with_reference_sweep(self) -> Self {
        fixtures::write_reference_sweep(&self.results_root)
            .expect("Failed to write reference sweep");
        self
    }

    /// Add an IOR output file recording `command_line` to a dataset directory.
    pub fn with_output(self, dataset: &str, file_name: &str, command_line: &str) -> Self {
        let path = self.results_root.join(dataset).join(file_name);
        fixtures::write_output(&path, &fixtures::ior_output(command_line))
            .expect("Failed to write output file");
        self
    }

    /// Add a gzip-compressed IOR output file.
    pub fn with_gz_output(self, dataset: &str, file_name: &str, command_line: &str) -> Self {
        let path = self.results_root.join(dataset).join(file_name);
        fixtures::write_gz_output(&path, &fixtures::ior_output(command_line))
            .expect("Failed to write gzip output file");
        self
    }

    /// Add an arbitrary file below the results root.
    pub fn with_file(self, relative_path: &str, content: &str) -> Self {
        let path = self.results_root.join(relative_path);
        fixtures::write_output(&path, content).expect("Failed to write file");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The command runs inside the results root with `IOR_ARGS_CONFIG`
    /// cleared, so only configs placed by the test are picked up.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(&self.results_root);
        cmd.env_remove("IOR_ARGS_CONFIG");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `ior-args` binary with `args` and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built, which cargo test does for the CLI crate's integration tests.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("ior-args")
            .map_err(|e| anyhow::anyhow!("Failed to find ior-args binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
