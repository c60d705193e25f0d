use chrono::NaiveDate;
use serde::Serialize;
use teamdeck_engine::{AgentReport, FairnessReport, SummaryDashboard, TaskFairnessReport, TrendPoint};
use teamdeck_runtime::ProductivityTotals;
use teamdeck_types::{ActivityKind, ActivityRecord, AgentId};

#[derive(Debug, Serialize)]
pub struct ProductivityViewModel {
    pub totals: ProductivityTotals,
    pub agents: Vec<AgentReport>,
}

#[derive(Debug, Serialize)]
pub struct FairnessViewModel {
    pub threshold: f64,
    #[serde(flatten)]
    pub report: FairnessReport,
}

/// Task workload and lifetime productivity for one agent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadRow {
    pub agent_id: AgentId,
    pub agent_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_role: Option<String>,
    pub completed: u64,
    pub high_priority: u64,
    pub pending: u64,
    pub active_tasks: u64,
    pub total_minutes: f64,
    pub avg_duration_minutes: Option<f64>,
    pub lifetime_completed: u64,
    pub lifetime_assigned: u64,
    pub completion_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct WorkloadViewModel {
    pub agents: Vec<WorkloadRow>,
    pub fairness: TaskFairnessReport,
}

#[derive(Debug, Serialize)]
pub struct TrendViewModel {
    pub total_shifts: u64,
    pub total_swaps: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_day: Option<NaiveDate>,
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Serialize)]
pub struct SummaryViewModel {
    #[serde(flatten)]
    pub summary: SummaryDashboard,
}

#[derive(Debug, Serialize)]
pub struct ActivityViewModel {
    pub activity_types: Vec<ActivityKind>,
    pub limit: usize,
    pub records: Vec<ActivityRecord>,
}
