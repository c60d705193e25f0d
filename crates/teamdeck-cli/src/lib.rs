// NOTE: teamdeck layering
//
// types   -> closed enums and row types, no IO
// engine  -> lane placement and analytics over already-fetched rows
// index   -> read-only SQLite access, the only place SQL lives
// runtime -> config, data directory, services that wire index into engine
// cli     -> argument parsing, presentation, exit codes
//
// The dashboard never writes to the team database. Every command opens it
// read-only, takes one batch of rows, and renders.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{ActivityArgs, Cli, Commands, ConfigCommand, RangeArgs, ReportCommand};
pub use commands::run;
