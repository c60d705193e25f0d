use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AgentId, TaskId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    #[default]
    Idle,
    Blocked,
    Offline,
}

impl AgentStatus {
    /// Unrecognized values are shown as idle
    pub fn parse_lossy(raw: &str) -> Self {
        match raw {
            "active" => AgentStatus::Active,
            "blocked" => AgentStatus::Blocked,
            "offline" => AgentStatus::Offline,
            _ => AgentStatus::Idle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Idle => "idle",
            AgentStatus::Blocked => "blocked",
            AgentStatus::Offline => "offline",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Liveness of an agent as reported by the health monitor or derived from
/// its heartbeat age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Stale,
    Offline,
    Unknown,
}

impl HealthStatus {
    /// Only the three values the monitor writes are recognized
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "healthy" => Some(HealthStatus::Healthy),
            "stale" => Some(HealthStatus::Stale),
            "offline" => Some(HealthStatus::Offline),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Stale => "stale",
            HealthStatus::Offline => "offline",
            HealthStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub status: AgentStatus,
    pub current_task_id: Option<TaskId>,
    pub health_status: Option<HealthStatus>,
    pub last_heartbeat: Option<DateTime<Utc>>,
}

impl Agent {
    pub fn new(id: impl Into<AgentId>, name: impl Into<String>, status: AgentStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: None,
            status,
            current_task_id: None,
            health_status: None,
            last_heartbeat: None,
        }
    }

    /// The task this agent is working on right now, if it is active
    pub fn active_task(&self) -> Option<&TaskId> {
        match self.status {
            AgentStatus::Active => self.current_task_id.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_task_requires_active_status() {
        let mut agent = Agent::new("a1", "Alice", AgentStatus::Idle);
        agent.current_task_id = Some(TaskId::from("T-1"));
        assert!(agent.active_task().is_none());

        agent.status = AgentStatus::Active;
        assert_eq!(agent.active_task().map(|t| t.as_str()), Some("T-1"));
    }

    #[test]
    fn test_health_parse_rejects_unknown_values() {
        assert_eq!(HealthStatus::parse("stale"), Some(HealthStatus::Stale));
        assert_eq!(HealthStatus::parse("degraded"), None);
    }
}
