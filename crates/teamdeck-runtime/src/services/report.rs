use chrono::NaiveDate;
use serde::Serialize;
use teamdeck_engine::{
    ActivityFilter, AgentReport, FairnessReport, SummaryDashboard, SwapStats, TaskFairnessReport,
    TaskProductivity, TrendPoint, build_summary, build_trend, merge_activity, merge_swap_stats,
};
use teamdeck_index::Database;
use teamdeck_types::{ActivityKind, ActivityRecord, DateRange, TaskWorkloadRecord};

use crate::{Config, Result};

/// Report window from optional bounds: `until` defaults to `today`, `since`
/// to `default_days` before `until`.
pub fn resolve_range(
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
    today: NaiveDate,
    default_days: u32,
) -> Result<DateRange> {
    let end = until.unwrap_or(today);
    let range = match since {
        Some(start) => DateRange::new(start, end)?,
        None => DateRange::ending_on(end, default_days)?,
    };
    Ok(range)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductivityTotals {
    pub agents: usize,
    pub total_shifts: u64,
    pub total_hours: f64,
    pub swaps_initiated: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductivitySummary {
    pub totals: ProductivityTotals,
    pub agents: Vec<AgentReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadSummary {
    pub productivity: Vec<TaskProductivity>,
    pub workload: Vec<TaskWorkloadRecord>,
    pub fairness: TaskFairnessReport,
}

pub struct ReportService<'a> {
    db: &'a Database,
    config: &'a Config,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a Database, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Shift productivity merged with swap activity
    pub fn productivity(&self, range: &DateRange) -> Result<ProductivitySummary> {
        let records = self.db.shift_workload(range)?;
        let swaps = SwapStats::from_rows(&self.db.swap_counts(range)?);
        let agents = merge_swap_stats(records, &swaps);

        let totals = ProductivityTotals {
            agents: agents.len(),
            total_shifts: agents.iter().map(|a| a.total_shifts).sum(),
            total_hours: agents.iter().map(|a| a.total_hours).sum(),
            swaps_initiated: agents.iter().map(|a| a.swaps_initiated).sum(),
        };

        Ok(ProductivitySummary { totals, agents })
    }

    pub fn fairness(&self, range: &DateRange) -> Result<FairnessReport> {
        let records = self.db.shift_workload(range)?;
        Ok(self.config.fairness_analyzer().shifts(&records))
    }

    /// Task throughput, completion rates and task fairness
    pub fn workload(&self, range: &DateRange) -> Result<WorkloadSummary> {
        let productivity = self
            .db
            .task_productivity(range)?
            .into_iter()
            .map(TaskProductivity::from)
            .collect();
        let workload = self.db.task_workload(range)?;
        let fairness = self.config.fairness_analyzer().tasks(&workload);

        Ok(WorkloadSummary {
            productivity,
            workload,
            fairness,
        })
    }

    pub fn trends(&self, range: &DateRange) -> Result<Vec<TrendPoint>> {
        let shifts = self.db.daily_shifts(range)?;
        let swaps = self.db.daily_swaps(range)?;
        Ok(build_trend(range, &shifts, &swaps))
    }

    /// Shift counts, pending swaps and the headline fairness score
    pub fn summary(&self, range: &DateRange) -> Result<SummaryDashboard> {
        let shift_types = self.db.shift_types(range)?;
        let fairness = self.fairness(range)?;
        Ok(build_summary(
            &shift_types,
            self.db.available_agents()?,
            self.db.pending_swaps()?,
            &fairness,
        ))
    }

    /// Shifts and swap activity, newest first. Sources the filter rules out
    /// are not queried.
    pub fn activity(
        &self,
        range: &DateRange,
        filter: &ActivityFilter,
        limit: usize,
    ) -> Result<Vec<ActivityRecord>> {
        let mut sources = Vec::new();
        if filter.wants_shifts() {
            sources.push(self.db.shift_activity(range, limit)?);
        }
        if filter.wants_requests() {
            sources.push(self.db.swap_request_activity(range, limit)?);
        }
        if filter.wants_answers() {
            // approvals and rejections share one query; cap it only when both are kept
            let both = filter.includes(ActivityKind::SwapApproved)
                && filter.includes(ActivityKind::SwapRejected);
            let cap = if both { limit } else { usize::MAX };
            sources.push(self.db.swap_answer_activity(range, cap)?);
        }

        let feed = merge_activity(sources, filter, limit);
        tracing::debug!(rows = feed.len(), limit, range = %range, "merged activity feed");
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn d(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, month, day).unwrap()
    }

    #[test]
    fn test_resolve_range_defaults() {
        let range = resolve_range(None, None, d(3, 31), 30).unwrap();
        assert_eq!(range.start, d(3, 1));
        assert_eq!(range.end, d(3, 31));
    }

    #[test]
    fn test_resolve_range_counts_back_from_until() {
        let range = resolve_range(None, Some(d(2, 10)), d(3, 31), 9).unwrap();
        assert_eq!(range.start, d(2, 1));
        assert_eq!(range.end, d(2, 10));
    }

    #[test]
    fn test_resolve_range_explicit_bounds() {
        let range = resolve_range(Some(d(1, 1)), Some(d(1, 31)), d(3, 31), 30).unwrap();
        assert_eq!(range.len_days(), 31);
    }

    #[test]
    fn test_resolve_range_rejects_inverted() {
        let err = resolve_range(Some(d(3, 5)), Some(d(3, 1)), d(3, 31), 30).unwrap_err();
        assert!(matches!(err, Error::Types(_)));
    }

    #[test]
    fn test_resolve_range_reports_calendar_overflow() {
        let err = resolve_range(None, None, d(3, 1), 200_000_000).unwrap_err();
        assert!(matches!(
            err,
            Error::Types(teamdeck_types::Error::DateOutOfRange { days: 200_000_000, .. })
        ));
    }
}
