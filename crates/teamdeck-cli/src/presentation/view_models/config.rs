use serde::Serialize;
use teamdeck_runtime::Config;

#[derive(Debug, Serialize)]
pub struct ConfigShowViewModel {
    pub config_file: String,
    pub config_exists: bool,
    pub config: Config,
    /// Rendered TOML for plain output
    #[serde(skip)]
    pub toml: String,
}

#[derive(Debug, Serialize)]
pub struct ConfigPathsViewModel {
    pub data_dir: String,
    pub config_file: String,
    pub config_exists: bool,
    pub database: String,
    pub database_exists: bool,
}
