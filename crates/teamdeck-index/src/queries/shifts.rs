use rusqlite::{Connection, params};
use std::collections::HashMap;
use teamdeck_types::{AgentId, AggregateAgentRecord, DailyShiftRow, DateRange, ShiftTypeCount};

use super::{count, date_column, non_empty};
use crate::Result;

// Shifts crossing midnight wrap around instead of going negative
pub(super) const SHIFT_HOURS: &str =
    "((strftime('%s', s.end_time) - strftime('%s', s.start_time) + 86400) % 86400) / 3600.0";

/// Per-agent shift totals for every agent that is not offline, by name.
/// Agents without shifts in the range are included with zeroes.
pub fn workload(conn: &Connection, range: &DateRange) -> Result<Vec<AggregateAgentRecord>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT CAST(id AS TEXT), name, role
        FROM agents
        WHERE COALESCE(status, '') != 'offline'
        ORDER BY name
        "#,
    )?;
    let mut records = stmt
        .query_map([], |row| {
            let id: String = row.get(0)?;
            Ok(AggregateAgentRecord {
                agent_name: non_empty(row.get(1)?).unwrap_or_else(|| id.clone()),
                agent_id: AgentId::new(id),
                agent_role: non_empty(row.get(2)?),
                ..AggregateAgentRecord::default()
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let query = format!(
        r#"
        SELECT CAST(s.agent_id AS TEXT), s.shift_type, COUNT(*), COALESCE(SUM({}), 0.0)
        FROM shifts s
        WHERE s.shift_date BETWEEN ?1 AND ?2
          AND s.is_active = 1
        GROUP BY s.agent_id, s.shift_type
        "#,
        SHIFT_HOURS
    );
    let mut stmt = conn.prepare(&query)?;
    let rows = stmt
        .query_map(params![range.start_str(), range.end_str()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, f64>(3)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let positions: HashMap<String, usize> = records
        .iter()
        .enumerate()
        .map(|(i, r)| (r.agent_id.to_string(), i))
        .collect();

    for (agent_id, shift_type, shifts, hours) in rows {
        let Some(&i) = positions.get(&agent_id) else {
            continue;
        };
        let record = &mut records[i];
        let shifts = count(shifts);

        record.total_shifts += shifts;
        record.total_hours += hours;
        match shift_type.as_deref().unwrap_or("regular") {
            "regular" => record.regular_shifts += shifts,
            "overtime" => record.overtime_shifts += shifts,
            "on_call" => record.on_call_shifts += shifts,
            "holiday" => record.holiday_shifts += shifts,
            "maintenance" => record.maintenance_shifts += shifts,
            other => tracing::debug!(shift_type = other, "uncategorized shift type"),
        }
    }

    tracing::debug!(agents = records.len(), range = %range, "loaded shift workload");
    Ok(records)
}

/// Active shifts and distinct agents per day with at least one shift
pub fn daily(conn: &Connection, range: &DateRange) -> Result<Vec<DailyShiftRow>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT shift_date, COUNT(*), COUNT(DISTINCT agent_id)
        FROM shifts
        WHERE shift_date BETWEEN ?1 AND ?2
          AND is_active = 1
        GROUP BY shift_date
        ORDER BY shift_date
        "#,
    )?;

    let rows = stmt
        .query_map(params![range.start_str(), range.end_str()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows
        .into_iter()
        .filter_map(|(raw, shifts, agents)| {
            Some(DailyShiftRow {
                date: date_column(&raw, "shifts.shift_date")?,
                shifts: count(shifts),
                agents: count(agents),
            })
        })
        .collect())
}

/// Active shifts in the range per shift type, every agent included
pub fn type_breakdown(conn: &Connection, range: &DateRange) -> Result<Vec<ShiftTypeCount>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT COALESCE(NULLIF(TRIM(shift_type), ''), 'regular') AS kind, COUNT(*)
        FROM shifts
        WHERE shift_date BETWEEN ?1 AND ?2
          AND is_active = 1
        GROUP BY kind
        ORDER BY kind
        "#,
    )?;

    let rows = stmt
        .query_map(params![range.start_str(), range.end_str()], |row| {
            Ok(ShiftTypeCount {
                shift_type: row.get(0)?,
                shifts: count(row.get(1)?),
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}
