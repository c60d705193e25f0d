use anyhow::{Context, Result};
use std::path::Path;
use teamdeck_runtime::Config;

use crate::presentation::view_models::{ConfigPathsViewModel, ConfigShowViewModel};

pub fn present_config_show(config: Config, config_file: &Path) -> Result<ConfigShowViewModel> {
    Ok(ConfigShowViewModel {
        config_file: config_file.display().to_string(),
        config_exists: config_file.exists(),
        toml: config.to_toml().context("Failed to render configuration as TOML")?,
        config,
    })
}

pub fn present_config_paths(data_dir: &Path, config_file: &Path, database: &Path) -> ConfigPathsViewModel {
    ConfigPathsViewModel {
        data_dir: data_dir.display().to_string(),
        config_file: config_file.display().to_string(),
        config_exists: config_file.exists(),
        database: database.display().to_string(),
        database_exists: database.exists(),
    }
}
