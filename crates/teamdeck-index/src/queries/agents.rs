use rusqlite::Connection;
use teamdeck_types::{Agent, AgentId, AgentStatus, HealthStatus, TaskId};

use super::{count, non_empty, timestamp_column};
use crate::Result;

pub fn list(conn: &Connection) -> Result<Vec<Agent>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT CAST(id AS TEXT), name, role, status, CAST(current_task_id AS TEXT),
               health_status, last_heartbeat
        FROM agents
        ORDER BY name
        "#,
    )?;

    let agents = stmt
        .query_map([], |row| {
            let id: String = row.get(0)?;
            let status: Option<String> = row.get(3)?;
            let health: Option<String> = row.get(5)?;

            Ok(Agent {
                name: non_empty(row.get(1)?).unwrap_or_else(|| id.clone()),
                id: AgentId::new(id),
                role: non_empty(row.get(2)?),
                status: AgentStatus::parse_lossy(status.as_deref().unwrap_or_default()),
                current_task_id: non_empty(row.get(4)?).map(TaskId::new),
                health_status: health.as_deref().and_then(HealthStatus::parse),
                last_heartbeat: timestamp_column(row.get(6)?, "agents.last_heartbeat"),
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(agents)
}

/// Agents whose status is anything but offline
pub fn count_available(conn: &Connection) -> Result<u64> {
    let available: i64 = conn.query_row(
        "SELECT COUNT(*) FROM agents WHERE COALESCE(status, '') != 'offline'",
        [],
        |row| row.get(0),
    )?;
    Ok(count(available))
}
