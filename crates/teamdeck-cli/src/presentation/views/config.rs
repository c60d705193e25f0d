use std::fmt;
use std::io;

use crate::presentation::formatters::Style;
use crate::presentation::view_models::{ConfigPathsViewModel, ConfigShowViewModel, CreateView, CsvExport};

pub struct ConfigShowView<'a> {
    data: &'a ConfigShowViewModel,
    style: Style,
}

impl<'a> fmt::Display for ConfigShowView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let source = if self.data.config_exists {
            self.data.config_file.clone()
        } else {
            format!("{} (not found, using defaults)", self.data.config_file)
        };
        writeln!(f, "{}", self.style.muted(&format!("# {}", source)))?;
        write!(f, "{}", self.data.toml)
    }
}

impl CreateView for ConfigShowViewModel {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigShowView { data: self, style })
    }
}

/// Flattened `section.key,value` pairs
impl CsvExport for ConfigShowViewModel {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        let config = &self.config;
        writer.write_record(["setting", "value"])?;
        let rows = [
            ("database.path", config.database.path.clone().unwrap_or_default()),
            ("reports.default_range_days", config.reports.default_range_days.to_string()),
            ("reports.overwork_threshold", config.reports.overwork_threshold.to_string()),
            ("reports.trend_days", config.reports.trend_days.to_string()),
            ("reports.top_agents", config.reports.top_agents.to_string()),
            ("reports.activity_limit", config.reports.activity_limit.to_string()),
            ("health.stale_after_minutes", config.health.stale_after_minutes.to_string()),
            ("health.offline_after_minutes", config.health.offline_after_minutes.to_string()),
        ];
        for (key, value) in rows {
            writer.write_record([key, value.as_str()])?;
        }
        Ok(())
    }
}

pub struct ConfigPathsView<'a> {
    data: &'a ConfigPathsViewModel,
    style: Style,
}

impl<'a> ConfigPathsView<'a> {
    fn marker(&self, exists: bool) -> String {
        if exists {
            String::new()
        } else {
            format!(" {}", self.style.muted("(missing)"))
        }
    }
}

impl<'a> fmt::Display for ConfigPathsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Data dir: {}", self.data.data_dir)?;
        writeln!(
            f,
            "Config:   {}{}",
            self.data.config_file,
            self.marker(self.data.config_exists)
        )?;
        writeln!(
            f,
            "Database: {}{}",
            self.data.database,
            self.marker(self.data.database_exists)
        )
    }
}

impl CreateView for ConfigPathsViewModel {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigPathsView { data: self, style })
    }
}

impl CsvExport for ConfigPathsViewModel {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        writer.write_record(["name", "path", "exists"])?;
        writer.write_record(["data_dir", self.data_dir.as_str(), "true"])?;
        writer.write_record([
            "config",
            self.config_file.as_str(),
            if self.config_exists { "true" } else { "false" },
        ])?;
        writer.write_record([
            "database",
            self.database.as_str(),
            if self.database_exists { "true" } else { "false" },
        ])
    }
}
