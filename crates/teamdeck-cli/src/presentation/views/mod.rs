mod agents;
mod board;
mod config;
mod report;

pub use agents::AgentListView;
pub use board::BoardView;
pub use config::{ConfigPathsView, ConfigShowView};
pub use report::{
    ActivityView, FairnessView, ProductivityView, SummaryView, TrendView, WorkloadView,
};
