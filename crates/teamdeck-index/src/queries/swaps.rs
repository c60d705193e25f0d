use rusqlite::{Connection, params};
use teamdeck_types::{AgentId, DailySwapRow, DateRange, SwapCountRow, SwapStatus};

use super::{count, date_column};
use crate::Result;

/// Swap requests filed in the range, grouped by requestor, target and status
pub fn counts(conn: &Connection, range: &DateRange) -> Result<Vec<SwapCountRow>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT CAST(requestor_agent_id AS TEXT), CAST(target_agent_id AS TEXT), status, COUNT(*)
        FROM swap_requests
        WHERE date(requested_at) BETWEEN ?1 AND ?2
        GROUP BY requestor_agent_id, target_agent_id, status
        "#,
    )?;

    let rows = stmt
        .query_map(params![range.start_str(), range.end_str()], |row| {
            let status: Option<String> = row.get(2)?;
            Ok(SwapCountRow {
                requestor_id: AgentId::new(row.get::<_, String>(0)?),
                target_id: AgentId::new(row.get::<_, String>(1)?),
                status: status.as_deref().and_then(SwapStatus::parse),
                count: count(row.get(3)?),
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!(groups = rows.len(), range = %range, "loaded swap counts");
    Ok(rows)
}

/// Requests still waiting for an answer, whenever they were filed
pub fn pending(conn: &Connection) -> Result<u64> {
    let pending: i64 = conn.query_row(
        "SELECT COUNT(*) FROM swap_requests WHERE status = 'pending'",
        [],
        |row| row.get(0),
    )?;
    Ok(count(pending))
}

pub fn daily(conn: &Connection, range: &DateRange) -> Result<Vec<DailySwapRow>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT date(requested_at) AS day, COUNT(*)
        FROM swap_requests
        WHERE date(requested_at) BETWEEN ?1 AND ?2
        GROUP BY day
        ORDER BY day
        "#,
    )?;

    let rows = stmt
        .query_map(params![range.start_str(), range.end_str()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows
        .into_iter()
        .filter_map(|(raw, swaps)| {
            Some(DailySwapRow {
                date: date_column(&raw, "swap_requests.requested_at")?,
                swaps: count(swaps),
            })
        })
        .collect())
}
