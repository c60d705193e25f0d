use rusqlite::{Connection, params};
use teamdeck_types::{ActivityRecord, AgentId, DateRange};

use super::shifts::SHIFT_HOURS;
use super::{date_column, non_empty};
use crate::Result;

/// Active shifts in the range, newest day first
pub fn shifts(conn: &Connection, range: &DateRange, limit: usize) -> Result<Vec<ActivityRecord>> {
    let query = format!(
        r#"
        SELECT s.shift_date, CAST(s.agent_id AS TEXT), a.name, s.shift_type, {}
        FROM shifts s
        JOIN agents a ON s.agent_id = a.id
        WHERE s.shift_date BETWEEN ?1 AND ?2
          AND s.is_active = 1
        ORDER BY s.shift_date DESC, a.name
        LIMIT ?3
        "#,
        SHIFT_HOURS
    );
    let mut stmt = conn.prepare(&query)?;
    let rows = stmt
        .query_map(params![range.start_str(), range.end_str(), sql_limit(limit)], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, f64>(4)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows
        .into_iter()
        .filter_map(|(raw, agent_id, name, shift_type, hours)| {
            Some(ActivityRecord::shift_assigned(
                date_column(&raw, "shifts.shift_date")?,
                AgentId::new(agent_id.clone()),
                non_empty(name).unwrap_or(agent_id),
                non_empty(shift_type).unwrap_or_else(|| "regular".to_string()),
                hours,
            ))
        })
        .collect())
}

/// Swap requests filed in the range, attributed to the requestor
pub fn swap_requests(
    conn: &Connection,
    range: &DateRange,
    limit: usize,
) -> Result<Vec<ActivityRecord>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT date(sr.requested_at), CAST(sr.requestor_agent_id AS TEXT), a.name, sr.reason
        FROM swap_requests sr
        JOIN agents a ON sr.requestor_agent_id = a.id
        WHERE date(sr.requested_at) BETWEEN ?1 AND ?2
        ORDER BY sr.requested_at DESC
        LIMIT ?3
        "#,
    )?;
    let rows = stmt
        .query_map(params![range.start_str(), range.end_str(), sql_limit(limit)], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows
        .into_iter()
        .filter_map(|(raw, agent_id, name, reason)| {
            Some(ActivityRecord::swap_requested(
                date_column(&raw, "swap_requests.requested_at")?,
                AgentId::new(agent_id.clone()),
                non_empty(name).unwrap_or(agent_id),
                non_empty(reason).as_deref(),
            ))
        })
        .collect())
}

/// Approvals and rejections given in the range, attributed to the target
pub fn swap_answers(
    conn: &Connection,
    range: &DateRange,
    limit: usize,
) -> Result<Vec<ActivityRecord>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT date(sr.responded_at), CAST(sr.target_agent_id AS TEXT), a.name, sr.status,
               sr.response_notes
        FROM swap_requests sr
        JOIN agents a ON sr.target_agent_id = a.id
        WHERE date(sr.responded_at) BETWEEN ?1 AND ?2
          AND sr.status IN ('approved', 'rejected')
        ORDER BY sr.responded_at DESC
        LIMIT ?3
        "#,
    )?;
    let rows = stmt
        .query_map(params![range.start_str(), range.end_str(), sql_limit(limit)], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, Option<String>>(4)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows
        .into_iter()
        .filter_map(|(raw, agent_id, name, status, notes)| {
            Some(ActivityRecord::swap_answered(
                date_column(&raw, "swap_requests.responded_at")?,
                AgentId::new(agent_id.clone()),
                non_empty(name).unwrap_or(agent_id),
                status == "approved",
                non_empty(notes).as_deref(),
            ))
        })
        .collect())
}

fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}
