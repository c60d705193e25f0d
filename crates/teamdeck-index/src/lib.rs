// SQLite reader for the team database
// Opens the store read-only and maps rows onto domain types

mod db;
mod error;
mod queries;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use schema::{REQUIRED_TABLES, create_schema};
