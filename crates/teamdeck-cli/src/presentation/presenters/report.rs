use std::collections::HashMap;
use teamdeck_engine::{ActivityFilter, FairnessReport, SummaryDashboard, TaskProductivity, TrendPoint};
use teamdeck_runtime::{ProductivitySummary, WorkloadSummary};
use teamdeck_types::ActivityRecord;

use crate::presentation::view_models::{
    ActivityViewModel, FairnessViewModel, ProductivityViewModel, SummaryViewModel, TrendViewModel,
    WorkloadRow, WorkloadViewModel,
};

pub fn present_productivity(summary: ProductivitySummary) -> ProductivityViewModel {
    ProductivityViewModel {
        totals: summary.totals,
        agents: summary.agents,
    }
}

pub fn present_fairness(report: FairnessReport, threshold: f64) -> FairnessViewModel {
    FairnessViewModel { threshold, report }
}

/// Join task workload rows with lifetime productivity, keeping workload order
/// (most completed first).
pub fn present_workload(summary: WorkloadSummary) -> WorkloadViewModel {
    let productivity: HashMap<String, TaskProductivity> = summary
        .productivity
        .into_iter()
        .map(|p| (p.record.agent_id.to_string(), p))
        .collect();

    let agents = summary
        .workload
        .into_iter()
        .map(|w| {
            let lifetime = productivity.get(w.agent_id.as_str());
            WorkloadRow {
                agent_role: lifetime.and_then(|p| p.record.agent_role.clone()),
                completed: w.completed,
                high_priority: w.high_priority,
                pending: w.pending,
                active_tasks: lifetime.map(|p| p.record.active_tasks).unwrap_or(0),
                total_minutes: w.total_minutes,
                avg_duration_minutes: lifetime.and_then(|p| p.record.avg_duration_minutes),
                lifetime_completed: lifetime.map(|p| p.record.lifetime_completed).unwrap_or(0),
                lifetime_assigned: lifetime.map(|p| p.record.lifetime_assigned).unwrap_or(0),
                completion_rate: lifetime.map(|p| p.completion_rate).unwrap_or(0.0),
                agent_id: w.agent_id,
                agent_name: w.agent_name,
            }
        })
        .collect();

    WorkloadViewModel {
        agents,
        fairness: summary.fairness,
    }
}

pub fn present_summary(summary: SummaryDashboard) -> SummaryViewModel {
    SummaryViewModel { summary }
}

pub fn present_activity(
    records: Vec<ActivityRecord>,
    filter: &ActivityFilter,
    limit: usize,
) -> ActivityViewModel {
    ActivityViewModel {
        activity_types: filter.kinds(),
        limit,
        records,
    }
}

/// Totals over the series; the busiest day is the first with the most shifts
pub fn present_trends(points: Vec<TrendPoint>) -> TrendViewModel {
    let busiest_day = points
        .iter()
        .filter(|p| p.shifts > 0)
        .fold(None::<&TrendPoint>, |best, p| match best {
            Some(b) if b.shifts >= p.shifts => Some(b),
            _ => Some(p),
        })
        .map(|p| p.date);

    TrendViewModel {
        total_shifts: points.iter().map(|p| p.shifts).sum(),
        total_swaps: points.iter().map(|p| p.swaps).sum(),
        busiest_day,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, shifts: u64, swaps: u64) -> TrendPoint {
        TrendPoint {
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            shifts,
            agents: shifts,
            swaps,
        }
    }

    #[test]
    fn test_trend_totals_and_busiest_day() {
        let vm = present_trends(vec![point(1, 0, 1), point(2, 4, 0), point(3, 4, 2)]);
        assert_eq!(vm.total_shifts, 8);
        assert_eq!(vm.total_swaps, 3);
        assert_eq!(vm.busiest_day, NaiveDate::from_ymd_opt(2026, 3, 2));
    }

    #[test]
    fn test_trend_without_shifts_has_no_busiest_day() {
        let vm = present_trends(vec![point(1, 0, 0)]);
        assert!(vm.busiest_day.is_none());
    }
}
