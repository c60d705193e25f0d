use rusqlite::{Connection, OptionalExtension};

use crate::{Error, Result};

/// Tables the dashboard reads. The store is owned by the team runtime; this
/// crate never migrates it.
pub const REQUIRED_TABLES: [&str; 6] = [
    "projects",
    "agents",
    "tasks",
    "task_history",
    "shifts",
    "swap_requests",
];

pub fn check_schema(conn: &Connection) -> Result<()> {
    for table in REQUIRED_TABLES {
        let found: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [table],
                |row| row.get(0),
            )
            .optional()?;

        if found.is_none() {
            return Err(Error::MissingTable(table.to_string()));
        }
    }
    Ok(())
}

/// Create the tables the dashboard reads, with the columns it uses.
///
/// Only for seeding scratch databases (tests, demos); production stores are
/// created by the team runtime with more columns than listed here.
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS agents (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            role TEXT,
            status TEXT DEFAULT 'idle',
            current_task_id TEXT,
            health_status TEXT DEFAULT 'unknown',
            last_heartbeat DATETIME,
            total_tasks_completed INTEGER DEFAULT 0,
            total_tasks_assigned INTEGER DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id TEXT PRIMARY KEY,
            project_id TEXT,
            title TEXT,
            status TEXT DEFAULT 'todo',
            priority TEXT DEFAULT 'normal',
            assignee_id TEXT,
            due_date DATE,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            started_at DATETIME,
            completed_at DATETIME,
            actual_duration_minutes REAL,
            blocked_reason TEXT,
            FOREIGN KEY (project_id) REFERENCES projects(id),
            FOREIGN KEY (assignee_id) REFERENCES agents(id)
        );

        CREATE TABLE IF NOT EXISTS task_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            task_id TEXT NOT NULL,
            agent_id TEXT,
            action TEXT,
            old_status TEXT,
            new_status TEXT,
            timestamp DATETIME DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (task_id) REFERENCES tasks(id)
        );

        CREATE TABLE IF NOT EXISTS shifts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            agent_id TEXT NOT NULL,
            shift_date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            shift_type TEXT DEFAULT 'regular'
                CHECK (shift_type IN ('regular', 'on_call', 'holiday', 'overtime', 'maintenance')),
            is_active BOOLEAN DEFAULT TRUE,
            FOREIGN KEY (agent_id) REFERENCES agents(id)
        );

        CREATE TABLE IF NOT EXISTS swap_requests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            requestor_agent_id TEXT NOT NULL,
            requestor_shift_id INTEGER,
            target_agent_id TEXT NOT NULL,
            target_shift_id INTEGER,
            status TEXT DEFAULT 'pending'
                CHECK (status IN ('pending', 'approved', 'rejected', 'cancelled', 'expired', 'completed')),
            reason TEXT,
            response_notes TEXT,
            requested_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            responded_at DATETIME,
            FOREIGN KEY (requestor_agent_id) REFERENCES agents(id),
            FOREIGN KEY (target_agent_id) REFERENCES agents(id)
        );

        CREATE INDEX IF NOT EXISTS idx_task_history_task ON task_history(task_id, timestamp DESC);
        CREATE INDEX IF NOT EXISTS idx_shifts_date ON shifts(shift_date);
        CREATE INDEX IF NOT EXISTS idx_swap_requests_date ON swap_requests(requested_at);
        "#,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_schema_passes_check() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        assert!(check_schema(&conn).is_ok());
    }

    #[test]
    fn test_check_reports_first_missing_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE projects (id TEXT); CREATE TABLE agents (id TEXT);")
            .unwrap();

        match check_schema(&conn) {
            Err(Error::MissingTable(table)) => assert_eq!(table, "tasks"),
            other => panic!("expected missing table, got {:?}", other),
        }
    }
}
