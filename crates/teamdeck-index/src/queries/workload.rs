use rusqlite::{Connection, params};
use teamdeck_types::{AgentId, DateRange, TaskProductivityRecord, TaskWorkloadRecord};

use super::{count, non_empty};
use crate::Result;

/// Task throughput per agent that is not offline, busiest first
pub fn task_workload(conn: &Connection, range: &DateRange) -> Result<Vec<TaskWorkloadRecord>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT CAST(a.id AS TEXT), a.name,
               COUNT(DISTINCT CASE WHEN t.status = 'done'
                   AND date(t.completed_at) BETWEEN ?1 AND ?2 THEN t.id END) AS completed,
               COUNT(DISTINCT CASE WHEN t.status = 'done' AND t.priority = 'high'
                   AND date(t.completed_at) BETWEEN ?1 AND ?2 THEN t.id END),
               COUNT(DISTINCT CASE WHEN t.status IN ('todo', 'in_progress', 'review') THEN t.id END),
               COALESCE(SUM(CASE WHEN t.status = 'done' AND t.actual_duration_minutes > 0
                   THEN t.actual_duration_minutes ELSE 0 END), 0.0)
        FROM agents a
        LEFT JOIN tasks t ON a.id = t.assignee_id
        WHERE COALESCE(a.status, '') != 'offline'
        GROUP BY a.id
        ORDER BY completed DESC, a.name
        "#,
    )?;

    let rows = stmt
        .query_map(params![range.start_str(), range.end_str()], |row| {
            let id: String = row.get(0)?;
            Ok(TaskWorkloadRecord {
                agent_name: non_empty(row.get(1)?).unwrap_or_else(|| id.clone()),
                agent_id: AgentId::new(id),
                completed: count(row.get(2)?),
                high_priority: count(row.get(3)?),
                pending: count(row.get(4)?),
                total_minutes: row.get(5)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// Lifetime counters from the agent row next to in-period completions
pub fn task_productivity(
    conn: &Connection,
    range: &DateRange,
) -> Result<Vec<TaskProductivityRecord>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT CAST(a.id AS TEXT), a.name, a.role,
               COALESCE(a.total_tasks_completed, 0), COALESCE(a.total_tasks_assigned, 0),
               COUNT(DISTINCT CASE WHEN t.status = 'done'
                   AND date(t.completed_at) BETWEEN ?1 AND ?2 THEN t.id END) AS completed_in_period,
               COUNT(DISTINCT CASE WHEN t.status IN ('in_progress', 'review') THEN t.id END),
               ROUND(AVG(CASE WHEN t.status = 'done' AND t.actual_duration_minutes > 0
                   THEN t.actual_duration_minutes END), 1)
        FROM agents a
        LEFT JOIN tasks t ON a.id = t.assignee_id
        WHERE COALESCE(a.status, '') != 'offline'
        GROUP BY a.id
        ORDER BY completed_in_period DESC, a.name
        "#,
    )?;

    let rows = stmt
        .query_map(params![range.start_str(), range.end_str()], |row| {
            let id: String = row.get(0)?;
            Ok(TaskProductivityRecord {
                agent_name: non_empty(row.get(1)?).unwrap_or_else(|| id.clone()),
                agent_id: AgentId::new(id),
                agent_role: non_empty(row.get(2)?),
                lifetime_completed: count(row.get(3)?),
                lifetime_assigned: count(row.get(4)?),
                completed_in_period: count(row.get(5)?),
                active_tasks: count(row.get(6)?),
                avg_duration_minutes: row.get(7)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}
