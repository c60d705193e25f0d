use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use teamdeck_engine::{FairnessAnalyzer, HealthThresholds};

pub const DEFAULT_DB_FILE: &str = "team.db";

/// Upper bound for the default report and trend windows (ten years)
pub const MAX_RANGE_DAYS: u32 = 3650;

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TEAMDECK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.teamdeck (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("TEAMDECK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("teamdeck"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".teamdeck"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Team database; relative paths are taken from the data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportsConfig {
    pub default_range_days: u32,
    pub overwork_threshold: f64,
    pub trend_days: u32,
    pub top_agents: usize,
    /// Rows in the activity feed unless `--limit` is given
    pub activity_limit: usize,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            default_range_days: 30,
            overwork_threshold: teamdeck_engine::fairness::DEFAULT_OVERWORK_THRESHOLD,
            trend_days: 30,
            top_agents: 5,
            activity_limit: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    pub stale_after_minutes: i64,
    pub offline_after_minutes: i64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        let thresholds = HealthThresholds::default();
        Self {
            stale_after_minutes: thresholds.stale_after,
            offline_after_minutes: thresholds.offline_after,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
    #[serde(default)]
    pub health: HealthConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        for (key, days) in [
            ("reports.default_range_days", self.reports.default_range_days),
            ("reports.trend_days", self.reports.trend_days),
        ] {
            if !(1..=MAX_RANGE_DAYS).contains(&days) {
                return Err(Error::Config(format!(
                    "{} must be between 1 and {}, got {}",
                    key, MAX_RANGE_DAYS, days
                )));
            }
        }
        if self.reports.activity_limit == 0 {
            return Err(Error::Config(
                "reports.activity_limit must be at least 1".to_string(),
            ));
        }
        if self.reports.overwork_threshold < 1.0 {
            return Err(Error::Config(format!(
                "reports.overwork_threshold must be at least 1.0, got {}",
                self.reports.overwork_threshold
            )));
        }
        if self.health.stale_after_minutes < 0
            || self.health.offline_after_minutes < self.health.stale_after_minutes
        {
            return Err(Error::Config(format!(
                "health thresholds must satisfy 0 <= stale_after_minutes ({}) <= offline_after_minutes ({})",
                self.health.stale_after_minutes, self.health.offline_after_minutes
            )));
        }
        Ok(())
    }

    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        match &self.database.path {
            Some(path) => {
                let path = expand_tilde(path);
                if path.is_absolute() {
                    path
                } else {
                    data_dir.join(path)
                }
            }
            None => data_dir.join(DEFAULT_DB_FILE),
        }
    }

    pub fn health_thresholds(&self) -> HealthThresholds {
        HealthThresholds {
            stale_after: self.health.stale_after_minutes,
            offline_after: self.health.offline_after_minutes,
        }
    }

    pub fn fairness_analyzer(&self) -> FairnessAnalyzer {
        FairnessAnalyzer::new(self.reports.overwork_threshold)
    }
}
