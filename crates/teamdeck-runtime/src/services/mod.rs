mod board;
mod report;

pub use board::{BoardService, BoardSnapshot};
pub use report::{ProductivitySummary, ProductivityTotals, ReportService, WorkloadSummary, resolve_range};
