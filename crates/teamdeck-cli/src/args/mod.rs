mod commands;
mod common;

pub use commands::*;
pub use common::*;

use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "teamdeck")]
#[command(about = "Kanban board and workload reports for agent teams", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml and the default database
    /// [default: $TEAMDECK_PATH, then the XDG data dir]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Team database to read, overriding the configured path
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Pin the clock (RFC 3339) for durations, health and default ranges
    #[arg(long, global = true)]
    pub now: Option<DateTime<Utc>>,

    #[command(subcommand)]
    pub command: Commands,
}
