use rusqlite::Connection;
use teamdeck_types::{TaskHistoryEvent, TaskStatus};

use super::{non_empty, timestamp_column};
use crate::Result;

/// Status transitions, oldest first (ties by insertion order).
///
/// With `blocked_only` the result is limited to tasks that are blocked now,
/// which is all lane placement ever consults. Rows whose timestamp cannot be
/// read are dropped: they cannot be ordered.
pub fn list_status_events(conn: &Connection, blocked_only: bool) -> Result<Vec<TaskHistoryEvent>> {
    let filter = if blocked_only {
        "AND th.task_id IN (SELECT id FROM tasks WHERE status = 'blocked')"
    } else {
        ""
    };

    let query = format!(
        r#"
        SELECT CAST(th.task_id AS TEXT), th.old_status, th.new_status, th.timestamp
        FROM task_history th
        WHERE (th.old_status IS NOT NULL OR th.new_status IS NOT NULL)
        {}
        ORDER BY th.timestamp, th.id
        "#,
        filter
    );

    let mut stmt = conn.prepare(&query)?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                non_empty(row.get(1)?),
                non_empty(row.get(2)?),
                row.get::<_, Option<String>>(3)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let total = rows.len();
    let events: Vec<TaskHistoryEvent> = rows
        .into_iter()
        .filter_map(|(task_id, old_status, new_status, raw_ts)| {
            let timestamp = timestamp_column(raw_ts, "task_history.timestamp")?;
            Some(TaskHistoryEvent {
                task_id: task_id.into(),
                old_status: old_status.map(TaskStatus::from),
                new_status: new_status.map(TaskStatus::from),
                timestamp,
            })
        })
        .collect();

    if events.len() < total {
        tracing::warn!(
            skipped = total - events.len(),
            "dropped history rows without a usable timestamp"
        );
    }
    tracing::debug!(count = events.len(), blocked_only, "loaded task history");
    Ok(events)
}
