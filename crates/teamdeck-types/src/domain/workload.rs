use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AgentId;

/// Numeric column of a per-agent aggregate that fairness can be measured on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountField {
    TotalShifts,
    RegularShifts,
    OvertimeShifts,
    OnCallShifts,
    HolidayShifts,
    MaintenanceShifts,
    CompletedTasks,
    HighPriorityTasks,
    PendingTasks,
}

impl CountField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountField::TotalShifts => "total_shifts",
            CountField::RegularShifts => "regular_shifts",
            CountField::OvertimeShifts => "overtime_shifts",
            CountField::OnCallShifts => "on_call_shifts",
            CountField::HolidayShifts => "holiday_shifts",
            CountField::MaintenanceShifts => "maintenance_shifts",
            CountField::CompletedTasks => "completed_tasks",
            CountField::HighPriorityTasks => "high_priority_tasks",
            CountField::PendingTasks => "pending_tasks",
        }
    }
}

impl fmt::Display for CountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A per-agent aggregate that exposes named counts.
///
/// Fields a record does not carry read as zero.
pub trait WorkloadRecord {
    fn agent_id(&self) -> &AgentId;
    fn agent_name(&self) -> &str;
    fn count(&self, field: CountField) -> u64;
}

/// Shift totals for one agent over a report period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateAgentRecord {
    pub agent_id: AgentId,
    pub agent_name: String,
    pub agent_role: Option<String>,
    pub total_shifts: u64,
    pub regular_shifts: u64,
    pub overtime_shifts: u64,
    pub on_call_shifts: u64,
    pub holiday_shifts: u64,
    pub maintenance_shifts: u64,
    pub total_hours: f64,
}

impl AggregateAgentRecord {
    pub fn new(agent_id: impl Into<AgentId>, agent_name: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            agent_name: agent_name.into(),
            ..Self::default()
        }
    }
}

impl WorkloadRecord for AggregateAgentRecord {
    fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    fn agent_name(&self) -> &str {
        &self.agent_name
    }

    fn count(&self, field: CountField) -> u64 {
        match field {
            CountField::TotalShifts => self.total_shifts,
            CountField::RegularShifts => self.regular_shifts,
            CountField::OvertimeShifts => self.overtime_shifts,
            CountField::OnCallShifts => self.on_call_shifts,
            CountField::HolidayShifts => self.holiday_shifts,
            CountField::MaintenanceShifts => self.maintenance_shifts,
            CountField::CompletedTasks
            | CountField::HighPriorityTasks
            | CountField::PendingTasks => 0,
        }
    }
}

/// Task throughput for one agent over a report period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskWorkloadRecord {
    pub agent_id: AgentId,
    pub agent_name: String,
    pub completed: u64,
    pub high_priority: u64,
    pub pending: u64,
    pub total_minutes: f64,
}

impl TaskWorkloadRecord {
    pub fn new(agent_id: impl Into<AgentId>, agent_name: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            agent_name: agent_name.into(),
            ..Self::default()
        }
    }
}

impl WorkloadRecord for TaskWorkloadRecord {
    fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    fn agent_name(&self) -> &str {
        &self.agent_name
    }

    fn count(&self, field: CountField) -> u64 {
        match field {
            CountField::CompletedTasks => self.completed,
            CountField::HighPriorityTasks => self.high_priority,
            CountField::PendingTasks => self.pending,
            _ => 0,
        }
    }
}

/// Lifetime and in-period task counters for one agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskProductivityRecord {
    pub agent_id: AgentId,
    pub agent_name: String,
    pub agent_role: Option<String>,
    pub lifetime_completed: u64,
    pub lifetime_assigned: u64,
    pub completed_in_period: u64,
    pub active_tasks: u64,
    pub avg_duration_minutes: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Expired,
    Completed,
}

impl SwapStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(SwapStatus::Pending),
            "approved" => Some(SwapStatus::Approved),
            "rejected" => Some(SwapStatus::Rejected),
            "cancelled" => Some(SwapStatus::Cancelled),
            "expired" => Some(SwapStatus::Expired),
            "completed" => Some(SwapStatus::Completed),
            _ => None,
        }
    }
}

/// Swap requests grouped by requestor, target and status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapCountRow {
    pub requestor_id: AgentId,
    pub target_id: AgentId,
    pub status: Option<SwapStatus>,
    pub count: u64,
}

/// Active shifts scheduled on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyShiftRow {
    pub date: NaiveDate,
    pub shifts: u64,
    pub agents: u64,
}

/// Swap requests filed on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySwapRow {
    pub date: NaiveDate,
    pub swaps: u64,
}
