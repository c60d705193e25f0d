use chrono::{DateTime, Utc};
use serde::Serialize;
use teamdeck_types::{Agent, AgentId, AgentStatus, HealthStatus, TaskId};

/// Heartbeat age limits, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthThresholds {
    pub stale_after: i64,
    pub offline_after: i64,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            stale_after: 30,
            offline_after: 60,
        }
    }
}

/// Minutes since the last heartbeat, fractional
pub fn minutes_since(heartbeat: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<f64> {
    heartbeat.map(|at| (now - at).num_seconds() as f64 / 60.0)
}

/// A status written by the health monitor wins; otherwise judge by
/// heartbeat age.
pub fn classify_health(agent: &Agent, now: DateTime<Utc>, thresholds: HealthThresholds) -> HealthStatus {
    if let Some(status) = agent.health_status
        && status != HealthStatus::Unknown
    {
        return status;
    }

    match minutes_since(agent.last_heartbeat, now) {
        None => HealthStatus::Unknown,
        Some(m) if m > thresholds.offline_after as f64 => HealthStatus::Offline,
        Some(m) if m > thresholds.stale_after as f64 => HealthStatus::Stale,
        Some(_) => HealthStatus::Healthy,
    }
}

pub fn format_last_seen(minutes: Option<f64>) -> String {
    match minutes {
        None => "Never".to_string(),
        Some(m) if m < 1.0 => "Just now".to_string(),
        Some(m) if m < 60.0 => format!("{}m ago", m.floor() as i64),
        Some(m) => format!("{}h ago", (m / 60.0 * 10.0).round() / 10.0),
    }
}

/// Roster row for the agents view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentHealth {
    pub agent_id: AgentId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub status: AgentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_task_id: Option<TaskId>,
    pub health: HealthStatus,
    pub last_seen: String,
}

pub fn assess_agents(agents: &[Agent], now: DateTime<Utc>, thresholds: HealthThresholds) -> Vec<AgentHealth> {
    agents
        .iter()
        .map(|agent| AgentHealth {
            agent_id: agent.id.clone(),
            name: agent.name.clone(),
            role: agent.role.clone(),
            status: agent.status,
            current_task_id: agent.current_task_id.clone(),
            health: classify_health(agent, now, thresholds),
            last_seen: format_last_seen(minutes_since(agent.last_heartbeat, now)),
        })
        .collect()
}
