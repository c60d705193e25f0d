pub mod board;
pub mod config;
pub mod report;

pub use board::{present_board, present_roster};
pub use config::{present_config_paths, present_config_show};
pub use report::{
    present_activity, present_fairness, present_productivity, present_summary, present_trends,
    present_workload,
};
