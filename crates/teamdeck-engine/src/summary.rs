use serde::Serialize;
use std::collections::BTreeMap;
use teamdeck_types::ShiftTypeCount;

use crate::fairness::{FairnessGrade, FairnessReport, round1};

/// Headline numbers for a report window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryDashboard {
    pub total_shifts: u64,
    /// Agents not offline right now
    pub active_agents: u64,
    /// Swap requests waiting for an answer, whenever filed
    pub pending_swaps: u64,
    pub shift_types: BTreeMap<String, u64>,
    pub fairness_score: f64,
    pub grade: FairnessGrade,
    pub avg_shifts_per_agent: f64,
}

/// `total_shifts` counts every active shift in the window, including those
/// of agents now offline; the fairness numbers only cover agents on duty.
pub fn build_summary(
    shift_types: &[ShiftTypeCount],
    active_agents: u64,
    pending_swaps: u64,
    fairness: &FairnessReport,
) -> SummaryDashboard {
    let mut by_type = BTreeMap::new();
    for row in shift_types {
        *by_type.entry(row.shift_type.clone()).or_insert(0) += row.shifts;
    }

    SummaryDashboard {
        total_shifts: by_type.values().sum(),
        active_agents,
        pending_swaps,
        shift_types: by_type,
        fairness_score: round1(fairness.workload.score),
        grade: fairness.grade,
        avg_shifts_per_agent: round1(fairness.workload.mean),
    }
}
