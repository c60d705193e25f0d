use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use teamdeck_types::{DailyShiftRow, DailySwapRow, DateRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub shifts: u64,
    pub agents: u64,
    pub swaps: u64,
}

/// One point per day of `range`; days without rows are zero
pub fn build_trend(
    range: &DateRange,
    shifts: &[DailyShiftRow],
    swaps: &[DailySwapRow],
) -> Vec<TrendPoint> {
    let shifts: HashMap<NaiveDate, &DailyShiftRow> = shifts.iter().map(|row| (row.date, row)).collect();
    let swaps: HashMap<NaiveDate, u64> = swaps.iter().map(|row| (row.date, row.swaps)).collect();

    range
        .start
        .iter_days()
        .take_while(|day| *day <= range.end)
        .map(|date| {
            let (shift_count, agents) = shifts
                .get(&date)
                .map(|row| (row.shifts, row.agents))
                .unwrap_or((0, 0));
            TrendPoint {
                date,
                shifts: shift_count,
                agents,
                swaps: swaps.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    fn range(start: u32, end: u32) -> DateRange {
        DateRange::new(d(start), d(end)).unwrap()
    }

    #[test]
    fn test_trend_zero_fills_missing_days() {
        let shifts = [DailyShiftRow {
            date: d(2),
            shifts: 4,
            agents: 3,
        }];
        let swaps = [DailySwapRow { date: d(3), swaps: 2 }];

        let trend = build_trend(&range(1, 3), &shifts, &swaps);

        assert_eq!(trend.len(), 3);
        assert_eq!(trend[0], TrendPoint { date: d(1), shifts: 0, agents: 0, swaps: 0 });
        assert_eq!(trend[1], TrendPoint { date: d(2), shifts: 4, agents: 3, swaps: 0 });
        assert_eq!(trend[2], TrendPoint { date: d(3), shifts: 0, agents: 0, swaps: 2 });
    }

    #[test]
    fn test_trend_ignores_rows_outside_range() {
        let swaps = [DailySwapRow { date: d(9), swaps: 7 }];
        let trend = build_trend(&range(1, 2), &[], &swaps);
        assert!(trend.iter().all(|p| p.swaps == 0));
    }

    #[test]
    fn test_trend_single_day() {
        let trend = build_trend(&range(5, 5), &[], &[]);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].date, d(5));
    }
}
