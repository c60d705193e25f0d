//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Seeding the team database
//! - Executing CLI commands against a fixed clock

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{self, FIXED_NOW, TeamDb};

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use teamdeck_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_team().unwrap();
///
/// let result = world.run(&["board"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    format: String,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty data directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".teamdeck");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            format: "plain".to_string(),
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Default database location inside the data directory.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("team.db")
    }

    /// Seed the default database with `fixtures::seed_sample_team`.
    pub fn with_sample_team(self) -> Result<Self> {
        fixtures::seed_sample_team(&self.db_path())?;
        Ok(self)
    }

    /// Create an empty database with the dashboard tables.
    pub fn with_empty_team(self) -> Result<Self> {
        TeamDb::create(&self.db_path())?;
        Ok(self)
    }

    /// Run extra statements against the seeded database.
    pub fn with_sql(self, sql: &str) -> Result<Self> {
        let conn = rusqlite::Connection::open(self.db_path())?;
        conn.execute_batch(sql)?;
        Ok(self)
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Result<Self> {
        std::fs::write(self.data_dir.join("config.toml"), toml)?;
        Ok(self)
    }

    /// Output format passed to every command (`plain` unless changed).
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// Adds the data directory, the output format and the fixed clock.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(&self.format)
            .arg("--now")
            .arg(FIXED_NOW);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("TEAMDECK_PATH");
        cmd.env_remove("TEAMDECK_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `teamdeck` binary with this environment and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("teamdeck")
            .map_err(|e| anyhow::anyhow!("Failed to find teamdeck binary: {}", e))?;

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
