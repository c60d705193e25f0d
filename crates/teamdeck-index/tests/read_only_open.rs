//! Integration tests for opening on-disk team databases
//!
//! These tests verify that Database::open refuses foreign files and never
//! writes to the store it reads.

use rusqlite::Connection;
use std::path::Path;
use teamdeck_index::{Database, Error, create_schema};
use tempfile::TempDir;

fn create_team_db(path: &Path) {
    let conn = Connection::open(path).unwrap();
    create_schema(&conn).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO agents (id, name, status) VALUES ('a1', 'Alice', 'active');
        INSERT INTO tasks (id, title, status) VALUES ('T-1', 'Ship it', 'todo');
        "#,
    )
    .unwrap();
}

#[test]
fn test_open_reads_existing_database() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("team.db");
    create_team_db(&db_path);

    let db = Database::open(&db_path).unwrap();
    assert_eq!(db.list_tasks().unwrap().len(), 1);
    assert_eq!(db.list_agents().unwrap()[0].name, "Alice");
}

#[test]
fn test_open_is_read_only() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("team.db");
    create_team_db(&db_path);

    let db = Database::open(&db_path).unwrap();
    let result = db
        .connection()
        .execute("INSERT INTO tasks (id, status) VALUES ('T-2', 'todo')", []);
    assert!(result.is_err());

    drop(db);
    let conn = Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_open_rejects_database_without_team_tables() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("other.db");
    Connection::open(&db_path)
        .unwrap()
        .execute_batch("CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT);")
        .unwrap();

    match Database::open(&db_path) {
        Err(Error::MissingTable(table)) => assert_eq!(table, "projects"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected open to fail"),
    }
}

#[test]
fn test_open_missing_file_does_not_create_it() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("absent.db");

    assert!(matches!(Database::open(&db_path), Err(Error::NotFound(_))));
    assert!(!db_path.exists());
}
