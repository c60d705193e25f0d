use rusqlite::Connection;
use teamdeck_types::{AgentId, Priority, Task, TaskId, TaskStatus};

use super::{non_empty, timestamp_column};
use crate::Result;

/// All tasks in board order: due date, then priority
pub fn list(conn: &Connection) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT CAST(t.id AS TEXT), t.title, t.status, t.priority,
               CAST(t.assignee_id AS TEXT), a.name, p.name, t.due_date,
               t.created_at, t.started_at, t.completed_at,
               t.actual_duration_minutes, t.blocked_reason
        FROM tasks t
        LEFT JOIN projects p ON t.project_id = p.id
        LEFT JOIN agents a ON t.assignee_id = a.id
        ORDER BY t.due_date, t.priority
        "#,
    )?;

    let tasks = stmt
        .query_map([], |row| {
            let status: Option<String> = row.get(2)?;
            let priority: Option<String> = row.get(3)?;

            Ok(Task {
                id: TaskId::new(row.get::<_, String>(0)?),
                title: non_empty(row.get(1)?),
                status: TaskStatus::parse(status.as_deref().unwrap_or_default()),
                priority: Priority::parse_lossy(priority.as_deref()),
                assignee_id: non_empty(row.get(4)?).map(AgentId::new),
                assignee_name: non_empty(row.get(5)?),
                project_name: non_empty(row.get(6)?),
                due_date: non_empty(row.get(7)?),
                created_at: timestamp_column(row.get(8)?, "tasks.created_at"),
                started_at: timestamp_column(row.get(9)?, "tasks.started_at"),
                completed_at: timestamp_column(row.get(10)?, "tasks.completed_at"),
                actual_duration_minutes: row.get(11)?,
                blocked_reason: non_empty(row.get(12)?),
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!(count = tasks.len(), "loaded tasks");
    Ok(tasks)
}
