use clap::ValueEnum;
use std::fmt;
use teamdeck_types::ActivityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum ActivityType {
    ShiftAssigned,
    SwapRequested,
    SwapApproved,
    SwapRejected,
}

impl From<ActivityType> for ActivityKind {
    fn from(value: ActivityType) -> Self {
        match value {
            ActivityType::ShiftAssigned => ActivityKind::ShiftAssigned,
            ActivityType::SwapRequested => ActivityKind::SwapRequested,
            ActivityType::SwapApproved => ActivityKind::SwapApproved,
            ActivityType::SwapRejected => ActivityKind::SwapRejected,
        }
    }
}
