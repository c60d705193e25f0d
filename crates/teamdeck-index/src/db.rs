use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use teamdeck_types::{
    ActivityRecord, Agent, AggregateAgentRecord, DailyShiftRow, DailySwapRow, DateRange,
    ShiftTypeCount, SwapCountRow, Task, TaskHistoryEvent, TaskProductivityRecord,
    TaskWorkloadRecord,
};

use crate::queries::{activity, agents, history, shifts, swaps, tasks, workload};
use crate::schema::{check_schema, create_schema};
use crate::{Error, Result};

// NOTE: The team database is written by the agent runtime. This reader
// opens it read-only and never migrates it; missing tables are reported
// instead of created.

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if !db_path.exists() {
            return Err(Error::NotFound(db_path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        check_schema(&conn)?;

        tracing::debug!(path = %db_path.display(), "opened team database read-only");
        Ok(Self { conn })
    }

    /// Scratch database with the dashboard tables, for seeding and tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    // Board

    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        tasks::list(&self.conn)
    }

    /// History of the tasks that are blocked right now
    pub fn blocked_task_history(&self) -> Result<Vec<TaskHistoryEvent>> {
        history::list_status_events(&self.conn, true)
    }

    pub fn task_history(&self) -> Result<Vec<TaskHistoryEvent>> {
        history::list_status_events(&self.conn, false)
    }

    pub fn list_agents(&self) -> Result<Vec<Agent>> {
        agents::list(&self.conn)
    }

    // Reports

    pub fn shift_workload(&self, range: &DateRange) -> Result<Vec<AggregateAgentRecord>> {
        shifts::workload(&self.conn, range)
    }

    pub fn daily_shifts(&self, range: &DateRange) -> Result<Vec<DailyShiftRow>> {
        shifts::daily(&self.conn, range)
    }

    pub fn swap_counts(&self, range: &DateRange) -> Result<Vec<SwapCountRow>> {
        swaps::counts(&self.conn, range)
    }

    pub fn daily_swaps(&self, range: &DateRange) -> Result<Vec<DailySwapRow>> {
        swaps::daily(&self.conn, range)
    }

    pub fn task_workload(&self, range: &DateRange) -> Result<Vec<TaskWorkloadRecord>> {
        workload::task_workload(&self.conn, range)
    }

    pub fn task_productivity(&self, range: &DateRange) -> Result<Vec<TaskProductivityRecord>> {
        workload::task_productivity(&self.conn, range)
    }

    // Summary

    pub fn shift_types(&self, range: &DateRange) -> Result<Vec<ShiftTypeCount>> {
        shifts::type_breakdown(&self.conn, range)
    }

    pub fn available_agents(&self) -> Result<u64> {
        agents::count_available(&self.conn)
    }

    pub fn pending_swaps(&self) -> Result<u64> {
        swaps::pending(&self.conn)
    }

    // Activity feed, each source newest first and capped at `limit`

    pub fn shift_activity(&self, range: &DateRange, limit: usize) -> Result<Vec<ActivityRecord>> {
        activity::shifts(&self.conn, range, limit)
    }

    pub fn swap_request_activity(
        &self,
        range: &DateRange,
        limit: usize,
    ) -> Result<Vec<ActivityRecord>> {
        activity::swap_requests(&self.conn, range, limit)
    }

    pub fn swap_answer_activity(
        &self,
        range: &DateRange,
        limit: usize,
    ) -> Result<Vec<ActivityRecord>> {
        activity::swap_answers(&self.conn, range, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rusqlite::params;
    use teamdeck_types::{ActivityKind, AgentStatus, HealthStatus, Priority, SwapStatus, TaskStatus};

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        )
        .unwrap()
    }

    fn seeded() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.connection()
            .execute_batch(
                r#"
                INSERT INTO projects (id, name) VALUES ('p1', 'Apollo');
                INSERT INTO agents (id, name, role, status, current_task_id, health_status, last_heartbeat,
                                    total_tasks_completed, total_tasks_assigned)
                VALUES ('a1', 'Alice', 'coder', 'active', 'T-2', 'healthy', '2026-03-10 08:00:00', 4, 5),
                       ('a2', 'Bob', NULL, 'idle', NULL, 'unknown', 'not a date', 0, 0),
                       ('a3', 'Zed', NULL, 'offline', NULL, NULL, NULL, 0, 0);

                INSERT INTO tasks (id, project_id, title, status, priority, assignee_id, due_date,
                                   created_at, started_at, completed_at, actual_duration_minutes, blocked_reason)
                VALUES ('T-1', 'p1', 'Write docs', 'done', 'high', 'a1', '2026-03-05',
                        '2026-03-01 09:00:00', '2026-03-02 09:00:00', '2026-03-03 09:00:00', 45, NULL),
                       ('T-2', 'p1', 'Fix build', 'blocked', 'normal', 'a1', '2026-03-06',
                        '2026-03-01T10:00:00Z', NULL, NULL, NULL, 'needs token'),
                       ('T-3', NULL, '', 'weird', 'urgent', NULL, NULL, '', NULL, NULL, NULL, '');

                INSERT INTO task_history (task_id, old_status, new_status, timestamp)
                VALUES ('T-2', 'todo', 'in_progress', '2026-03-02 10:00:00'),
                       ('T-2', 'in_progress', 'blocked', '2026-03-02 11:00:00'),
                       ('T-2', 'blocked', NULL, 'garbage'),
                       ('T-1', 'review', 'done', '2026-03-03 09:00:00'),
                       ('T-1', NULL, NULL, '2026-03-03 09:30:00');

                INSERT INTO shifts (agent_id, shift_date, start_time, end_time, shift_type, is_active)
                VALUES ('a1', '2026-03-02', '09:00', '17:00', 'regular', 1),
                       ('a1', '2026-03-03', '22:00', '06:00', 'overtime', 1),
                       ('a2', '2026-03-02', '09:00', '13:00', 'on_call', 1),
                       ('a2', '2026-03-04', '09:00', '17:00', 'regular', 0),
                       ('a1', '2026-04-02', '09:00', '17:00', 'regular', 1);

                INSERT INTO swap_requests (requestor_agent_id, target_agent_id, status, reason,
                                           response_notes, requested_at, responded_at)
                VALUES ('a1', 'a2', 'approved', 'school run', 'sure', '2026-03-02 12:00:00', '2026-03-02 18:00:00'),
                       ('a1', 'a2', 'approved', NULL, NULL, '2026-03-02 13:00:00', '2026-04-01 08:00:00'),
                       ('a2', 'a1', 'rejected', '', NULL, '2026-03-05 09:00:00', '2026-03-06 09:00:00'),
                       ('a2', 'a1', 'pending', NULL, NULL, '2026-04-05 09:00:00', NULL);
                "#,
            )
            .unwrap();
        db
    }

    #[test]
    fn test_open_missing_file_is_not_found() {
        let err = Database::open(Path::new("/nonexistent/team.db")).err().unwrap();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_tasks_map_columns_and_defaults() {
        let tasks = seeded().list_tasks().unwrap();
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        // NULL due dates sort first
        assert_eq!(ids, vec!["T-3", "T-1", "T-2"]);

        let done = &tasks[1];
        assert_eq!(done.status, TaskStatus::Done);
        assert_eq!(done.priority, Priority::High);
        assert_eq!(done.project_name.as_deref(), Some("Apollo"));
        assert_eq!(done.assignee_name.as_deref(), Some("Alice"));
        assert_eq!(done.actual_duration_minutes, Some(45.0));
        assert_eq!(
            done.completed_at,
            Some(Utc.with_ymd_and_hms(2026, 3, 3, 9, 0, 0).unwrap())
        );

        let odd = &tasks[0];
        assert_eq!(odd.status, TaskStatus::Unknown("weird".to_string()));
        assert_eq!(odd.priority, Priority::Normal);
        assert_eq!(odd.title, None);
        assert_eq!(odd.created_at, None);
        assert_eq!(odd.blocked_reason, None);

        assert_eq!(tasks[2].blocked_reason.as_deref(), Some("needs token"));
    }

    #[test]
    fn test_blocked_history_only_covers_blocked_tasks() {
        let events = seeded().blocked_task_history().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.task_id.as_str() == "T-2"));
        assert_eq!(events[1].new_status, Some(TaskStatus::Blocked));
    }

    #[test]
    fn test_full_history_skips_statusless_rows() {
        let events = seeded().task_history().unwrap();
        // garbage timestamp and NULL/NULL rows are dropped
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_agents_lossy_fields() {
        let agents = seeded().list_agents().unwrap();
        assert_eq!(agents.len(), 3);

        let alice = &agents[0];
        assert_eq!(alice.status, AgentStatus::Active);
        assert_eq!(alice.health_status, Some(HealthStatus::Healthy));
        assert_eq!(alice.current_task_id.as_ref().map(|t| t.as_str()), Some("T-2"));

        let bob = &agents[1];
        assert_eq!(bob.health_status, None);
        assert_eq!(bob.last_heartbeat, None);
    }

    #[test]
    fn test_shift_workload_by_type_and_hours() {
        let records = seeded().shift_workload(&range()).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.agent_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);

        let alice = &records[0];
        assert_eq!(alice.total_shifts, 2);
        assert_eq!(alice.regular_shifts, 1);
        assert_eq!(alice.overtime_shifts, 1);
        assert_eq!(alice.total_hours, 16.0);

        let bob = &records[1];
        assert_eq!(bob.total_shifts, 1);
        assert_eq!(bob.on_call_shifts, 1);
        assert_eq!(bob.total_hours, 4.0);
    }

    #[test]
    fn test_swap_counts_grouped() {
        let rows = seeded().swap_counts(&range()).unwrap();
        assert_eq!(rows.len(), 2);

        let approved = rows
            .iter()
            .find(|r| r.status == Some(SwapStatus::Approved))
            .unwrap();
        assert_eq!(approved.requestor_id.as_str(), "a1");
        assert_eq!(approved.count, 2);
    }

    #[test]
    fn test_daily_series() {
        let db = seeded();
        let shifts = db.daily_shifts(&range()).unwrap();
        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0].shifts, 2);
        assert_eq!(shifts[0].agents, 2);

        let swaps = db.daily_swaps(&range()).unwrap();
        assert_eq!(swaps.len(), 2);
        assert_eq!(swaps[0].swaps, 2);
    }

    #[test]
    fn test_task_workload_and_productivity() {
        let db = seeded();
        let workload = db.task_workload(&range()).unwrap();
        assert_eq!(workload[0].agent_name, "Alice");
        assert_eq!(workload[0].completed, 1);
        assert_eq!(workload[0].high_priority, 1);
        assert_eq!(workload[0].total_minutes, 45.0);
        assert_eq!(workload.len(), 2);

        let productivity = db.task_productivity(&range()).unwrap();
        assert_eq!(productivity[0].lifetime_completed, 4);
        assert_eq!(productivity[0].lifetime_assigned, 5);
        assert_eq!(productivity[0].avg_duration_minutes, Some(45.0));
        assert_eq!(productivity[1].avg_duration_minutes, None);
    }

    #[test]
    fn test_summary_counts() {
        let db = seeded();
        let types = db.shift_types(&range()).unwrap();
        assert_eq!(
            types,
            vec![
                ShiftTypeCount { shift_type: "on_call".to_string(), shifts: 1 },
                ShiftTypeCount { shift_type: "overtime".to_string(), shifts: 1 },
                ShiftTypeCount { shift_type: "regular".to_string(), shifts: 1 },
            ]
        );
        assert_eq!(db.available_agents().unwrap(), 2);
        // pending swaps are counted regardless of when they were filed
        assert_eq!(db.pending_swaps().unwrap(), 1);
    }

    #[test]
    fn test_shift_activity_newest_first() {
        let records = seeded().shift_activity(&range(), 10).unwrap();
        let rows: Vec<(String, &str, Option<f64>)> = records
            .iter()
            .map(|r| (r.date.to_string(), r.agent_name.as_str(), r.hours))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("2026-03-03".to_string(), "Alice", Some(8.0)),
                ("2026-03-02".to_string(), "Alice", Some(8.0)),
                ("2026-03-02".to_string(), "Bob", Some(4.0)),
            ]
        );
        assert_eq!(records[0].shift_type.as_deref(), Some("overtime"));

        assert_eq!(seeded().shift_activity(&range(), 1).unwrap().len(), 1);
    }

    #[test]
    fn test_swap_activity_sides() {
        let db = seeded();
        let requests = db.swap_request_activity(&range(), 10).unwrap();
        let described: Vec<(&str, &str)> = requests
            .iter()
            .map(|r| (r.agent_name.as_str(), r.description.as_str()))
            .collect();
        assert_eq!(
            described,
            vec![
                ("Bob", "Swap requested: No reason given"),
                ("Alice", "Swap requested: No reason given"),
                ("Alice", "Swap requested: school run"),
            ]
        );

        // the April answer falls outside the window
        let answers = db.swap_answer_activity(&range(), 10).unwrap();
        let described: Vec<(&str, ActivityKind, &str)> = answers
            .iter()
            .map(|r| (r.agent_name.as_str(), r.kind, r.description.as_str()))
            .collect();
        assert_eq!(
            described,
            vec![
                ("Alice", ActivityKind::SwapRejected, "Swap rejected: No notes"),
                ("Bob", ActivityKind::SwapApproved, "Swap approved: sure"),
            ]
        );
    }

    #[test]
    fn test_param_binding_uses_iso_dates() {
        let db = seeded();
        let count: i64 = db
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM shifts WHERE shift_date BETWEEN ?1 AND ?2",
                params![range().start_str(), range().end_str()],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 4);
    }
}
