use std::path::{Path, PathBuf};
use teamdeck_index::Database;

use crate::config::Config;
use crate::services::{BoardService, ReportService};
use crate::Result;

pub const CONFIG_FILE: &str = "config.toml";

/// An opened data directory: its configuration and the team database
pub struct Teamdeck {
    db: Database,
    db_path: PathBuf,
    data_dir: PathBuf,
    config: Config,
}

impl Teamdeck {
    /// Open `data_dir`, reading the database named by its config unless
    /// `db_override` points elsewhere.
    pub fn open(data_dir: PathBuf, db_override: Option<PathBuf>) -> Result<Self> {
        let config = Config::load_from(&data_dir.join(CONFIG_FILE))?;
        let db_path = db_override.unwrap_or_else(|| config.database_path(&data_dir));

        tracing::debug!(
            data_dir = %data_dir.display(),
            db = %db_path.display(),
            "opening workspace"
        );
        let db = Database::open(&db_path)?;

        Ok(Self {
            db,
            db_path,
            data_dir,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn board(&self) -> BoardService<'_> {
        BoardService::new(&self.db, &self.config)
    }

    pub fn reports(&self) -> ReportService<'_> {
        ReportService::new(&self.db, &self.config)
    }
}
