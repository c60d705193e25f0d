//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!  (service call)   (join/total)      (Serialize)     (plain/json/csv)
//! ```
//!
//! - `view_models/`: what a command reports. Pure data, `Serialize`; the JSON
//!   envelope is `CommandResultViewModel`.
//! - `presenters/`: turn service output into view models (joins, totals).
//! - `views/`: text layout (`CreateView`) and CSV rows (`CsvExport`) per view model.
//! - `renderers/`: pick the output format and write to stdout.
//! - `formatters/`: small shared helpers (truncation, numbers, colors).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use formatters::Style;
pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, CsvExport};
