use std::fmt;
use std::path::PathBuf;

/// Result type for teamdeck-index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the index layer
#[derive(Debug)]
pub enum Error {
    /// Database operation failed
    Database(rusqlite::Error),

    /// The database file does not exist
    NotFound(PathBuf),

    /// The database lacks a table the dashboard reads
    MissingTable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Database(err) => {
                let msg = err.to_string();
                if msg.contains("no such column") || msg.contains("no such table") {
                    write!(
                        f,
                        "Database schema mismatch: {}. Is this a team database?",
                        msg
                    )
                } else {
                    write!(f, "Database error: {}", err)
                }
            }
            Error::NotFound(path) => write!(f, "Database not found: {}", path.display()),
            Error::MissingTable(table) => {
                write!(f, "Database schema mismatch: missing table '{}'", table)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::NotFound(_) | Error::MissingTable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_error_message() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some("no such column: blocked_reason".to_string()),
        );
        let msg = Error::Database(sqlite_err).to_string();

        assert!(msg.contains("Database schema mismatch"));
        assert!(msg.contains("blocked_reason"));
    }

    #[test]
    fn test_regular_database_error_message() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some("database is locked".to_string()),
        );
        let msg = Error::Database(sqlite_err).to_string();

        assert!(msg.starts_with("Database error:"));
    }

    #[test]
    fn test_not_found_message() {
        let msg = Error::NotFound(PathBuf::from("/tmp/none.db")).to_string();
        assert_eq!(msg, "Database not found: /tmp/none.db");
    }
}
