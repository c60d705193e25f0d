mod context;

pub mod agents;
pub mod board;
pub mod config;
pub mod report;

pub use context::HandlerContext;
