use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AgentId, TaskId};

/// Lifecycle status of a task as recorded in the store.
///
/// Values outside the known set are kept verbatim in `Unknown` so that
/// display code can still show them; lane placement treats them as `todo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Backlog,
    Todo,
    InProgress,
    Review,
    Reviewing,
    Blocked,
    Done,
    Cancelled,
    Unknown(String),
}

impl TaskStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "backlog" => TaskStatus::Backlog,
            "todo" => TaskStatus::Todo,
            "in_progress" => TaskStatus::InProgress,
            "review" => TaskStatus::Review,
            "reviewing" => TaskStatus::Reviewing,
            "blocked" => TaskStatus::Blocked,
            "done" => TaskStatus::Done,
            "cancelled" => TaskStatus::Cancelled,
            other => TaskStatus::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Backlog => "backlog",
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Review => "review",
            TaskStatus::Reviewing => "reviewing",
            TaskStatus::Blocked => "blocked",
            TaskStatus::Done => "done",
            TaskStatus::Cancelled => "cancelled",
            TaskStatus::Unknown(raw) => raw,
        }
    }

    /// Done and cancelled tasks never move again
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Done | TaskStatus::Cancelled)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for TaskStatus {
    fn from(s: &str) -> Self {
        TaskStatus::parse(s)
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        TaskStatus::parse(&s)
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Normal,
    Low,
}

impl Priority {
    /// Unrecognized or missing priorities fall back to `Normal`
    pub fn parse_lossy(raw: Option<&str>) -> Self {
        match raw {
            Some("critical") => Priority::Critical,
            Some("high") => Priority::High,
            Some("low") => Priority::Low,
            _ => Priority::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A task row with its display-relevant columns.
///
/// Only `id` and `status` are required; every other column is optional in
/// the store and defaults to absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<AgentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub actual_duration_minutes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_reason: Option<String>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, status: TaskStatus) -> Self {
        Self {
            id: id.into(),
            title: None,
            status,
            priority: Priority::default(),
            assignee_id: None,
            assignee_name: None,
            project_name: None,
            due_date: None,
            created_at: None,
            started_at: None,
            completed_at: None,
            actual_duration_minutes: None,
            blocked_reason: None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.status == TaskStatus::Blocked
    }
}

/// One status transition from `task_history`. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskHistoryEvent {
    pub task_id: TaskId,
    pub old_status: Option<TaskStatus>,
    pub new_status: Option<TaskStatus>,
    pub timestamp: DateTime<Utc>,
}

impl TaskHistoryEvent {
    pub fn new(
        task_id: impl Into<TaskId>,
        old_status: Option<&str>,
        new_status: Option<&str>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            old_status: old_status.map(TaskStatus::parse),
            new_status: new_status.map(TaskStatus::parse),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_known_values() {
        assert_eq!(TaskStatus::parse("in_progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("cancelled"), TaskStatus::Cancelled);
        assert_eq!(TaskStatus::parse("blocked").as_str(), "blocked");
    }

    #[test]
    fn test_status_keeps_unknown_raw_value() {
        let status = TaskStatus::parse("planning");
        assert_eq!(status, TaskStatus::Unknown("planning".to_string()));
        assert_eq!(status.to_string(), "planning");
    }

    #[test]
    fn test_status_serializes_as_plain_string() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let back: TaskStatus = serde_json::from_str("\"waiting\"").unwrap();
        assert_eq!(back, TaskStatus::Unknown("waiting".to_string()));
    }

    #[test]
    fn test_priority_defaults_to_normal() {
        assert_eq!(Priority::parse_lossy(None), Priority::Normal);
        assert_eq!(Priority::parse_lossy(Some("urgent")), Priority::Normal);
        assert_eq!(Priority::parse_lossy(Some("critical")), Priority::Critical);
    }

    #[test]
    fn test_new_task_has_no_optional_fields() {
        let task = Task::new("T-1", TaskStatus::Todo);
        assert_eq!(task.id.as_str(), "T-1");
        assert!(task.created_at.is_none());
        assert!(task.blocked_reason.is_none());
        assert!(!task.is_blocked());
    }
}
