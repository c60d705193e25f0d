pub mod config;
pub mod error;
pub mod services;
pub mod workspace;

pub use config::{Config, DatabaseConfig, HealthConfig, ReportsConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use services::{
    BoardService, BoardSnapshot, ProductivitySummary, ProductivityTotals, ReportService,
    WorkloadSummary, resolve_range,
};
pub use workspace::Teamdeck;
