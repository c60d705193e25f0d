use serde::Serialize;
use std::collections::HashMap;
use teamdeck_types::{AgentId, AggregateAgentRecord, SwapCountRow, SwapStatus, TaskProductivityRecord};

use crate::fairness::round1;

/// Swaps an agent asked for, split by outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InitiatedSwaps {
    pub initiated: u64,
    pub approved: u64,
    pub rejected: u64,
}

/// Swap request tallies keyed by agent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapStats {
    pub initiated: HashMap<AgentId, InitiatedSwaps>,
    pub received: HashMap<AgentId, u64>,
}

impl SwapStats {
    /// Tally rows grouped by (requestor, target, status)
    pub fn from_rows(rows: &[SwapCountRow]) -> Self {
        let mut stats = Self::default();
        for row in rows {
            let requested = stats.initiated.entry(row.requestor_id.clone()).or_default();
            requested.initiated += row.count;
            match row.status {
                Some(SwapStatus::Approved) => requested.approved += row.count,
                Some(SwapStatus::Rejected) => requested.rejected += row.count,
                _ => {}
            }

            *stats.received.entry(row.target_id.clone()).or_default() += row.count;
        }
        stats
    }

    pub fn initiated_by(&self, agent_id: &AgentId) -> InitiatedSwaps {
        self.initiated.get(agent_id).copied().unwrap_or_default()
    }

    pub fn received_by(&self, agent_id: &AgentId) -> u64 {
        self.received.get(agent_id).copied().unwrap_or(0)
    }
}

/// Shift productivity for one agent with swap activity merged in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentReport {
    pub agent_id: AgentId,
    pub agent_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_role: Option<String>,
    pub total_shifts: u64,
    pub regular_shifts: u64,
    pub overtime_shifts: u64,
    pub on_call_shifts: u64,
    pub holiday_shifts: u64,
    pub maintenance_shifts: u64,
    pub total_hours: f64,
    pub avg_shift_hours: f64,
    pub swaps_initiated: u64,
    pub swaps_received: u64,
    pub swaps_approved: u64,
    pub swaps_rejected: u64,
    pub swap_success_rate: f64,
}

impl AgentReport {
    pub fn merge(record: AggregateAgentRecord, swaps: &SwapStats) -> Self {
        let initiated = swaps.initiated_by(&record.agent_id);
        let received = swaps.received_by(&record.agent_id);

        let avg_shift_hours = if record.total_shifts > 0 {
            record.total_hours / record.total_shifts as f64
        } else {
            0.0
        };
        let swap_success_rate = if initiated.initiated > 0 {
            initiated.approved as f64 / initiated.initiated as f64 * 100.0
        } else {
            0.0
        };

        Self {
            agent_id: record.agent_id,
            agent_name: record.agent_name,
            agent_role: record.agent_role,
            total_shifts: record.total_shifts,
            regular_shifts: record.regular_shifts,
            overtime_shifts: record.overtime_shifts,
            on_call_shifts: record.on_call_shifts,
            holiday_shifts: record.holiday_shifts,
            maintenance_shifts: record.maintenance_shifts,
            total_hours: record.total_hours,
            avg_shift_hours,
            swaps_initiated: initiated.initiated,
            swaps_received: received,
            swaps_approved: initiated.approved,
            swaps_rejected: initiated.rejected,
            swap_success_rate,
        }
    }
}

/// One report row per base record, in base order.
///
/// Agents without swap activity read as zero; swap tallies for ids that
/// are not in `records` are dropped.
pub fn merge_swap_stats(records: Vec<AggregateAgentRecord>, swaps: &SwapStats) -> Vec<AgentReport> {
    records
        .into_iter()
        .map(|record| AgentReport::merge(record, swaps))
        .collect()
}

/// Task productivity with derived completion rate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskProductivity {
    #[serde(flatten)]
    pub record: TaskProductivityRecord,
    pub completion_rate: f64,
}

impl From<TaskProductivityRecord> for TaskProductivity {
    fn from(record: TaskProductivityRecord) -> Self {
        let completion_rate = if record.lifetime_assigned > 0 {
            round1(record.lifetime_completed as f64 / record.lifetime_assigned as f64 * 100.0)
        } else {
            0.0
        };
        Self {
            record,
            completion_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(from: &str, to: &str, status: &str, count: u64) -> SwapCountRow {
        SwapCountRow {
            requestor_id: AgentId::from(from),
            target_id: AgentId::from(to),
            status: SwapStatus::parse(status),
            count,
        }
    }

    fn shifts(id: &str, total: u64, hours: f64) -> AggregateAgentRecord {
        AggregateAgentRecord {
            total_shifts: total,
            total_hours: hours,
            ..AggregateAgentRecord::new(id, id.to_uppercase())
        }
    }

    #[test]
    fn test_swap_stats_tally_by_side() {
        let stats = SwapStats::from_rows(&[
            row("a1", "a2", "approved", 2),
            row("a1", "a2", "rejected", 1),
            row("a1", "a3", "pending", 1),
            row("a2", "a1", "approved", 1),
        ]);

        let a1 = stats.initiated_by(&AgentId::from("a1"));
        assert_eq!(
            a1,
            InitiatedSwaps {
                initiated: 4,
                approved: 2,
                rejected: 1
            }
        );
        assert_eq!(stats.received_by(&AgentId::from("a2")), 3);
        assert_eq!(stats.received_by(&AgentId::from("a1")), 1);
        assert_eq!(stats.received_by(&AgentId::from("zz")), 0);
    }

    #[test]
    fn test_merge_defaults_missing_agents_to_zero() {
        let stats = SwapStats::from_rows(&[row("a1", "a2", "approved", 1)]);
        let reports = merge_swap_stats(vec![shifts("a3", 4, 32.0)], &stats);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].swaps_initiated, 0);
        assert_eq!(reports[0].swaps_received, 0);
        assert_eq!(reports[0].swap_success_rate, 0.0);
        assert_eq!(reports[0].avg_shift_hours, 8.0);
    }

    #[test]
    fn test_merge_ignores_unknown_ids_and_keeps_order() {
        let stats = SwapStats::from_rows(&[
            row("ghost", "a2", "approved", 5),
            row("a2", "ghost", "rejected", 1),
        ]);
        let reports = merge_swap_stats(vec![shifts("a2", 0, 0.0), shifts("a1", 1, 6.0)], &stats);

        let ids: Vec<&str> = reports.iter().map(|r| r.agent_id.as_str()).collect();
        assert_eq!(ids, vec!["a2", "a1"]);
        assert_eq!(reports[0].swaps_received, 5);
        assert_eq!(reports[0].swaps_initiated, 1);
        assert_eq!(reports[0].swaps_rejected, 1);
        assert_eq!(reports[0].avg_shift_hours, 0.0);
    }

    #[test]
    fn test_success_rate() {
        let stats = SwapStats::from_rows(&[
            row("a1", "a2", "approved", 3),
            row("a1", "a2", "rejected", 1),
        ]);
        let reports = merge_swap_stats(vec![shifts("a1", 0, 0.0)], &stats);
        assert_eq!(reports[0].swap_success_rate, 75.0);
    }

    #[test]
    fn test_completion_rate() {
        let record = TaskProductivityRecord {
            lifetime_completed: 2,
            lifetime_assigned: 3,
            ..TaskProductivityRecord::default()
        };
        assert_eq!(TaskProductivity::from(record).completion_rate, 66.7);

        let idle = TaskProductivity::from(TaskProductivityRecord::default());
        assert_eq!(idle.completion_rate, 0.0);
    }
}
