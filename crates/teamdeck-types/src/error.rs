use std::fmt;

/// Result type for teamdeck-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A string did not name a known lane
    UnknownLane(String),

    /// A timestamp or date string could not be parsed
    InvalidTimestamp(String),

    /// A date range whose end precedes its start
    InvalidDateRange { start: String, end: String },

    /// Counting back from a date left the calendar
    DateOutOfRange { end: String, days: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownLane(name) => write!(f, "Unknown lane: {}", name),
            Error::InvalidTimestamp(raw) => write!(f, "Invalid timestamp: {}", raw),
            Error::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: {} is after {}", start, end)
            }
            Error::DateOutOfRange { end, days } => {
                write!(f, "Date out of range: {} days before {}", days, end)
            }
        }
    }
}

impl std::error::Error for Error {}
