//! Team database fixtures.
//!
//! `TeamDb` writes rows with the same column layout the team runtime uses,
//! so the reader is exercised against real SQLite files. `seed_sample_team`
//! is the shared scenario most CLI tests run against; its expectations are
//! spelled out next to each insert.

use anyhow::Result;
use rusqlite::{Connection, params};
use std::path::Path;

/// Clock every fixture is written against (`--now` in CLI tests)
pub const FIXED_NOW: &str = "2026-03-16T12:00:00Z";

/// Optional task columns; everything defaults to NULL
#[derive(Debug, Clone, Default)]
pub struct TaskRow<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub status: &'a str,
    pub priority: &'a str,
    pub assignee_id: Option<&'a str>,
    pub project_id: Option<&'a str>,
    pub due_date: Option<&'a str>,
    pub created_at: Option<&'a str>,
    pub started_at: Option<&'a str>,
    pub completed_at: Option<&'a str>,
    pub actual_duration_minutes: Option<f64>,
    pub blocked_reason: Option<&'a str>,
}

/// One swap request; the answer columns stay NULL unless set
#[derive(Debug, Clone, Default)]
pub struct SwapRow<'a> {
    pub requestor: &'a str,
    pub target: &'a str,
    pub status: &'a str,
    pub requested_at: &'a str,
    pub reason: Option<&'a str>,
    pub responded_at: Option<&'a str>,
    pub response_notes: Option<&'a str>,
}

pub struct TeamDb {
    conn: Connection,
}

impl TeamDb {
    /// Create a database file with the dashboard tables
    pub fn create(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        teamdeck_index::create_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn project(&self, id: &str, name: &str) -> Result<&Self> {
        self.conn.execute(
            "INSERT INTO projects (id, name) VALUES (?1, ?2)",
            params![id, name],
        )?;
        Ok(self)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn agent(
        &self,
        id: &str,
        name: &str,
        role: Option<&str>,
        status: &str,
        current_task_id: Option<&str>,
        health_status: Option<&str>,
        last_heartbeat: Option<&str>,
        lifetime: (i64, i64),
    ) -> Result<&Self> {
        self.conn.execute(
            r#"
            INSERT INTO agents (id, name, role, status, current_task_id, health_status,
                                last_heartbeat, total_tasks_completed, total_tasks_assigned)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                id,
                name,
                role,
                status,
                current_task_id,
                health_status,
                last_heartbeat,
                lifetime.0,
                lifetime.1
            ],
        )?;
        Ok(self)
    }

    pub fn task(&self, row: TaskRow<'_>) -> Result<&Self> {
        self.conn.execute(
            r#"
            INSERT INTO tasks (id, project_id, title, status, priority, assignee_id, due_date,
                               created_at, started_at, completed_at, actual_duration_minutes,
                               blocked_reason)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
            params![
                row.id,
                row.project_id,
                row.title,
                row.status,
                row.priority,
                row.assignee_id,
                row.due_date,
                row.created_at,
                row.started_at,
                row.completed_at,
                row.actual_duration_minutes,
                row.blocked_reason
            ],
        )?;
        Ok(self)
    }

    pub fn history(
        &self,
        task_id: &str,
        old_status: Option<&str>,
        new_status: Option<&str>,
        timestamp: &str,
    ) -> Result<&Self> {
        self.conn.execute(
            r#"
            INSERT INTO task_history (task_id, action, old_status, new_status, timestamp)
            VALUES (?1, 'status_change', ?2, ?3, ?4)
            "#,
            params![task_id, old_status, new_status, timestamp],
        )?;
        Ok(self)
    }

    pub fn shift(
        &self,
        agent_id: &str,
        date: &str,
        hours: (&str, &str),
        shift_type: &str,
        is_active: bool,
    ) -> Result<&Self> {
        self.conn.execute(
            r#"
            INSERT INTO shifts (agent_id, shift_date, start_time, end_time, shift_type, is_active)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![agent_id, date, hours.0, hours.1, shift_type, is_active],
        )?;
        Ok(self)
    }

    pub fn swap(&self, row: SwapRow<'_>) -> Result<&Self> {
        self.conn.execute(
            r#"
            INSERT INTO swap_requests (requestor_agent_id, target_agent_id, status, reason,
                                       response_notes, requested_at, responded_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                row.requestor,
                row.target,
                row.status,
                row.reason,
                row.response_notes,
                row.requested_at,
                row.responded_at
            ],
        )?;
        Ok(self)
    }
}

/// Four agents, ten tasks, two weeks of shifts and swaps.
///
/// Against `FIXED_NOW` the board is:
/// - backlog: T-1
/// - todo: T-8 (blocked, resolved from done), T-9 (cancelled), T-2
/// - doing: T-4 (blocked from in_progress), T-3 ("1h 30m")
/// - waiting_review: T-6
/// - reviewing: T-5 (Alice is working it)
/// - done: T-7 ("2h 5m"), T-10
///
/// Reports for 2026-03-01..2026-03-15 see Alice, Bob and Cara (Dan is
/// offline) with 4, 2 and 1 active shifts. Dan still has one active shift
/// on the schedule, so the window holds 8 active shifts in all.
///
/// The activity feed for that window has 15 rows: 8 shifts, 4 swap requests
/// and 3 answers (Bob approved on 03-03, Cara rejected on 03-05, Alice
/// approved on 03-07).
pub fn seed_sample_team(path: &Path) -> Result<TeamDb> {
    let db = TeamDb::create(path)?;
    db.project("p1", "Apollo")?;

    db.agent("a1", "Alice", Some("coder"), "active", Some("T-5"), Some("healthy"), Some("2026-03-16 11:55:00"), (10, 12))?
        .agent("a2", "Bob", Some("reviewer"), "idle", None, Some("unknown"), Some("2026-03-16 11:20:00"), (5, 5))?
        .agent("a3", "Cara", Some("ops"), "blocked", None, None, Some("2026-03-16 09:00:00"), (0, 2))?
        .agent("a4", "Dan", Some("coder"), "offline", None, Some("offline"), None, (0, 0))?;

    let task = |id, title, status, priority| TaskRow {
        id,
        title,
        status,
        priority,
        project_id: Some("p1"),
        ..TaskRow::default()
    };

    db.task(TaskRow {
        assignee_id: Some("a2"),
        due_date: Some("2026-03-30"),
        created_at: Some("2026-03-10 12:00:00"),
        ..task("T-1", "Draft roadmap", "backlog", "normal")
    })?
    .task(TaskRow {
        assignee_id: Some("a1"),
        due_date: Some("2026-03-18"),
        created_at: Some("2026-03-15 12:00:00"),
        ..task("T-2", "Set up CI", "todo", "high")
    })?
    .task(TaskRow {
        assignee_id: Some("a1"),
        due_date: Some("2026-03-17"),
        created_at: Some("2026-03-14 09:00:00"),
        started_at: Some("2026-03-16 10:30:00"),
        ..task("T-3", "Fix login bug", "in_progress", "critical")
    })?
    .task(TaskRow {
        assignee_id: Some("a3"),
        due_date: Some("2026-03-19"),
        created_at: Some("2026-03-12 09:00:00"),
        blocked_reason: Some("waiting on credentials"),
        ..task("T-4", "Migrate DB", "blocked", "high")
    })?
    .task(TaskRow {
        assignee_id: Some("a2"),
        due_date: Some("2026-03-20"),
        created_at: Some("2026-03-13 09:00:00"),
        ..task("T-5", "Review API", "review", "normal")
    })?
    .task(TaskRow {
        assignee_id: Some("a3"),
        due_date: Some("2026-03-21"),
        created_at: Some("2026-03-13 09:00:00"),
        ..task("T-6", "Write tests", "review", "normal")
    })?
    .task(TaskRow {
        assignee_id: Some("a1"),
        due_date: Some("2026-03-10"),
        created_at: Some("2026-03-05 09:00:00"),
        started_at: Some("2026-03-06 09:00:00"),
        completed_at: Some("2026-03-08 10:00:00"),
        actual_duration_minutes: Some(125.0),
        ..task("T-7", "Release notes", "done", "normal")
    })?
    .task(TaskRow {
        assignee_id: Some("a2"),
        due_date: Some("2026-03-25"),
        created_at: Some("2026-03-01 09:00:00"),
        ..task("T-8", "Old spike", "blocked", "low")
    })?
    .task(TaskRow {
        project_id: None,
        ..task("T-9", "Cancelled idea", "cancelled", "low")
    })?
    .task(TaskRow {
        assignee_id: Some("a2"),
        due_date: Some("2026-03-11"),
        created_at: Some("2026-03-09 09:00:00"),
        completed_at: Some("2026-03-12 09:00:00"),
        actual_duration_minutes: Some(45.0),
        ..task("T-10", "Docs pass", "done", "normal")
    })?;

    db.history("T-4", Some("todo"), Some("in_progress"), "2026-03-13 09:00:00")?
        .history("T-4", Some("in_progress"), Some("blocked"), "2026-03-14 09:00:00")?
        .history("T-8", Some("review"), Some("done"), "2026-03-09 10:00:00")?
        .history("T-8", Some("done"), Some("blocked"), "2026-03-10 10:00:00")?
        .history("T-7", Some("review"), Some("done"), "2026-03-08 10:00:00")?;

    let day = ("09:00", "17:00");
    db.shift("a1", "2026-03-02", day, "regular", true)?
        .shift("a1", "2026-03-03", day, "regular", true)?
        .shift("a1", "2026-03-04", ("18:00", "22:00"), "overtime", true)?
        .shift("a1", "2026-03-05", ("22:00", "06:00"), "on_call", true)?
        .shift("a2", "2026-03-02", day, "regular", true)?
        .shift("a2", "2026-03-03", day, "on_call", true)?
        .shift("a3", "2026-03-02", day, "regular", true)?
        .shift("a3", "2026-03-04", day, "regular", false)?
        .shift("a4", "2026-03-02", day, "regular", true)?;

    db.swap(SwapRow {
        requestor: "a1",
        target: "a2",
        status: "approved",
        requested_at: "2026-03-03 10:00:00",
        reason: Some("family event"),
        responded_at: Some("2026-03-03 15:00:00"),
        response_notes: Some("happy to help"),
    })?
    .swap(SwapRow {
        requestor: "a1",
        target: "a3",
        status: "rejected",
        requested_at: "2026-03-04 10:00:00",
        responded_at: Some("2026-03-05 08:00:00"),
        ..SwapRow::default()
    })?
    .swap(SwapRow {
        requestor: "a2",
        target: "a1",
        status: "pending",
        requested_at: "2026-03-06 10:00:00",
        reason: Some("doctor appointment"),
        ..SwapRow::default()
    })?
    .swap(SwapRow {
        requestor: "a4",
        target: "a1",
        status: "approved",
        requested_at: "2026-03-07 10:00:00",
        responded_at: Some("2026-03-07 12:00:00"),
        response_notes: Some("ok"),
        ..SwapRow::default()
    })?
    .swap(SwapRow {
        requestor: "a1",
        target: "a2",
        status: "approved",
        requested_at: "2026-02-20 10:00:00",
        responded_at: Some("2026-02-20 11:00:00"),
        ..SwapRow::default()
    })?;

    Ok(db)
}
