//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns a temp data directory that is passed to every command
//! through `--data-dir`, so tests never touch the real user data.

use anyhow::Result;
use assert_cmd::Command;
use promo_runtime::Board;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::LINK_ID;

/// Isolated test environment.
///
/// # Example
/// ```no_run
/// use promo_testing::TestWorld;
///
/// let world = TestWorld::new().with_config(3);
/// let result = world.run(&["campaign", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    json: bool,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".promo");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            json: false,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Run every command with `--format json`.
    pub fn json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a config for the fixture link with the given campaign limit.
    pub fn with_config(self, max_campaigns: usize) -> Self {
        let config = format!(
            "link_id = \"{}\"\n\n[limits]\nmax_campaigns = {}\n",
            LINK_ID, max_campaigns
        );
        std::fs::write(self.data_dir.join("config.toml"), config)
            .expect("Failed to write config");
        self
    }

    /// Persist a board into the data directory.
    pub fn with_board(self, board: &Board) -> Self {
        board.save(&self.data_dir).expect("Failed to save board");
        self
    }

    pub fn board(&self) -> Result<Board> {
        Ok(Board::load_or_new(&self.data_dir, LINK_ID)?)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(if self.json { "json" } else { "plain" });

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG").env_remove("PROMO_PATH");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `promo` binary with `args` in this environment.
    ///
    /// Uses `Command::cargo_bin()`, so it only works from tests of the crate
    /// that builds the binary.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("promo")
            .map_err(|e| anyhow::anyhow!("Failed to find promo binary: {}", e))?;

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
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
