pub mod agents;
pub mod board;
pub mod config;
pub mod report;
pub mod result;

pub use agents::AgentListViewModel;
pub use board::BoardViewModel;
pub use config::{ConfigPathsViewModel, ConfigShowViewModel};
pub use report::{
    ActivityViewModel, FairnessViewModel, ProductivityViewModel, SummaryViewModel, TrendViewModel,
    WorkloadRow, WorkloadViewModel,
};
pub use result::CommandResultViewModel;

use std::fmt;
use std::io;

use crate::presentation::formatters::Style;

/// Content with a plain-text layout
pub trait CreateView {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a>;
}

/// Content with a tabular export
pub trait CsvExport {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()>;
}
