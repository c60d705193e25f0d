use std::fmt;
use std::io;
use teamdeck_engine::{AgentCount, DimensionScore, LoadOutliers, format_minutes};

use crate::presentation::formatters::Style;
use crate::presentation::formatters::number::{hours, one_decimal, percent};
use crate::presentation::formatters::text::truncate;
use crate::presentation::view_models::{
    ActivityViewModel, CreateView, CsvExport, FairnessViewModel, ProductivityViewModel,
    SummaryViewModel, TrendViewModel, WorkloadViewModel,
};

fn names(agents: &[AgentCount]) -> String {
    agents
        .iter()
        .map(|a| format!("{} ({})", a.agent_name, a.count))
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_outliers(f: &mut fmt::Formatter, style: Style, outliers: &LoadOutliers) -> fmt::Result {
    if outliers.overworked.is_empty() && outliers.underworked.is_empty() {
        return writeln!(f, "No outliers.");
    }
    if !outliers.overworked.is_empty() {
        writeln!(f, "{} {}", style.bad("Overworked:"), names(&outliers.overworked))?;
    }
    if !outliers.underworked.is_empty() {
        writeln!(f, "{} {}", style.warn("Underworked:"), names(&outliers.underworked))?;
    }
    Ok(())
}

fn write_dimension(f: &mut fmt::Formatter, style: Style, label: &str, score: &DimensionScore) -> fmt::Result {
    writeln!(
        f,
        "{:<10} {:>6}  {:<18} mean {:<6} std dev {:<6} range {}-{}",
        label,
        one_decimal(score.score),
        style.grade(score.grade()),
        one_decimal(score.mean),
        one_decimal(score.std_dev),
        score.min,
        score.max
    )
}

fn write_dimension_row<W: io::Write>(
    writer: &mut csv::Writer<W>,
    dimension: &str,
    score: &DimensionScore,
) -> csv::Result<()> {
    writer.write_record([
        dimension.to_string(),
        one_decimal(score.score),
        score.grade().label().to_string(),
        format!("{:.2}", score.mean),
        format!("{:.2}", score.std_dev),
        format!("{:.2}", score.cv),
        score.min.to_string(),
        score.max.to_string(),
    ])
}

// --------------------------------------------------------
// Productivity
// --------------------------------------------------------

pub struct ProductivityView<'a> {
    data: &'a ProductivityViewModel,
    style: Style,
}

impl<'a> fmt::Display for ProductivityView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let totals = &self.data.totals;
        writeln!(
            f,
            "{} {} agents, {} shifts, {}, {} swaps requested",
            self.style.heading("Productivity:"),
            totals.agents,
            totals.total_shifts,
            hours(totals.total_hours),
            totals.swaps_initiated
        )?;
        writeln!(f)?;

        if self.data.agents.is_empty() {
            writeln!(f, "No agents on duty.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<16} {:>6} {:>4} {:>4} {:>4} {:>8} {:>6} {:>5} {:>5} {:>7}",
            "AGENT", "SHIFTS", "OT", "CALL", "HOL", "HOURS", "AVG", "SWAPS", "RECV", "SUCCESS"
        )?;
        writeln!(f, "{}", "-".repeat(78))?;
        for agent in &self.data.agents {
            writeln!(
                f,
                "{:<16} {:>6} {:>4} {:>4} {:>4} {:>8} {:>6} {:>5} {:>5} {:>7}",
                truncate(&agent.agent_name, 16),
                agent.total_shifts,
                agent.overtime_shifts,
                agent.on_call_shifts,
                agent.holiday_shifts,
                hours(agent.total_hours),
                hours(agent.avg_shift_hours),
                agent.swaps_initiated,
                agent.swaps_received,
                percent(agent.swap_success_rate)
            )?;
        }
        Ok(())
    }
}

impl CreateView for ProductivityViewModel {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
        Box::new(ProductivityView { data: self, style })
    }
}

impl CsvExport for ProductivityViewModel {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        writer.write_record([
            "agent_id",
            "agent_name",
            "role",
            "total_shifts",
            "regular_shifts",
            "overtime_shifts",
            "on_call_shifts",
            "holiday_shifts",
            "maintenance_shifts",
            "total_hours",
            "avg_shift_hours",
            "swaps_initiated",
            "swaps_received",
            "swaps_approved",
            "swaps_rejected",
            "swap_success_rate",
        ])?;
        for a in &self.agents {
            writer.write_record([
                a.agent_id.to_string(),
                a.agent_name.clone(),
                a.agent_role.clone().unwrap_or_default(),
                a.total_shifts.to_string(),
                a.regular_shifts.to_string(),
                a.overtime_shifts.to_string(),
                a.on_call_shifts.to_string(),
                a.holiday_shifts.to_string(),
                a.maintenance_shifts.to_string(),
                one_decimal(a.total_hours),
                one_decimal(a.avg_shift_hours),
                a.swaps_initiated.to_string(),
                a.swaps_received.to_string(),
                a.swaps_approved.to_string(),
                a.swaps_rejected.to_string(),
                one_decimal(a.swap_success_rate),
            ])?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Fairness
// --------------------------------------------------------

pub struct FairnessView<'a> {
    data: &'a FairnessViewModel,
    style: Style,
}

impl<'a> fmt::Display for FairnessView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = &self.data.report;
        writeln!(
            f,
            "{} {} ({} agents)",
            self.style.heading("Fairness:"),
            self.style.grade(report.grade),
            report.agents
        )?;
        writeln!(f)?;
        write_dimension(f, self.style, "workload", &report.workload)?;
        write_dimension(f, self.style, "overtime", &report.overtime)?;
        write_dimension(f, self.style, "on-call", &report.on_call)?;
        writeln!(f)?;

        if !report.distribution.is_empty() {
            writeln!(f, "{:<16} {:>6} {:>8}", "AGENT", "SHIFTS", "OVERTIME")?;
            for (shifts, overtime) in report.distribution.iter().zip(&report.overtime_distribution) {
                writeln!(
                    f,
                    "{:<16} {:>6} {:>8}",
                    truncate(&shifts.agent_name, 16),
                    shifts.count,
                    overtime.count
                )?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Outliers beyond {}x the mean:", self.data.threshold)?;
        write_outliers(f, self.style, &report.outliers)
    }
}

impl CreateView for FairnessViewModel {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
        Box::new(FairnessView { data: self, style })
    }
}

/// One row per scored dimension
impl CsvExport for FairnessViewModel {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        writer.write_record(["dimension", "score", "grade", "mean", "std_dev", "cv", "min", "max"])?;
        write_dimension_row(writer, "workload", &self.report.workload)?;
        write_dimension_row(writer, "overtime", &self.report.overtime)?;
        write_dimension_row(writer, "on_call", &self.report.on_call)
    }
}

// --------------------------------------------------------
// Task workload
// --------------------------------------------------------

pub struct WorkloadView<'a> {
    data: &'a WorkloadViewModel,
    style: Style,
}

impl<'a> fmt::Display for WorkloadView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fairness = &self.data.fairness;
        writeln!(
            f,
            "{} {} (score {}, {} agents)",
            self.style.heading("Task fairness:"),
            self.style.grade(fairness.grade),
            one_decimal(fairness.completed.score),
            fairness.agents
        )?;
        writeln!(f)?;

        if self.data.agents.is_empty() {
            writeln!(f, "No agents on duty.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<16} {:>5} {:>4} {:>7} {:>6} {:>8} {:>9} {:>8}",
            "AGENT", "DONE", "HIGH", "PENDING", "ACTIVE", "TIME", "AVG", "LIFETIME"
        )?;
        writeln!(f, "{}", "-".repeat(72))?;
        for row in &self.data.agents {
            writeln!(
                f,
                "{:<16} {:>5} {:>4} {:>7} {:>6} {:>8} {:>9} {:>8}",
                truncate(&row.agent_name, 16),
                row.completed,
                row.high_priority,
                row.pending,
                row.active_tasks,
                format_minutes(Some(row.total_minutes)),
                format_minutes(row.avg_duration_minutes),
                percent(row.completion_rate)
            )?;
        }
        writeln!(f)?;
        write_outliers(f, self.style, &fairness.outliers)
    }
}

impl CreateView for WorkloadViewModel {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
        Box::new(WorkloadView { data: self, style })
    }
}

impl CsvExport for WorkloadViewModel {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        writer.write_record([
            "agent_id",
            "agent_name",
            "completed",
            "high_priority",
            "pending",
            "active_tasks",
            "total_minutes",
            "avg_duration_minutes",
            "lifetime_completed",
            "lifetime_assigned",
            "completion_rate",
        ])?;
        for row in &self.agents {
            writer.write_record([
                row.agent_id.to_string(),
                row.agent_name.clone(),
                row.completed.to_string(),
                row.high_priority.to_string(),
                row.pending.to_string(),
                row.active_tasks.to_string(),
                one_decimal(row.total_minutes),
                row.avg_duration_minutes.map(one_decimal).unwrap_or_default(),
                row.lifetime_completed.to_string(),
                row.lifetime_assigned.to_string(),
                one_decimal(row.completion_rate),
            ])?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Trends
// --------------------------------------------------------

pub struct TrendView<'a> {
    data: &'a TrendViewModel,
    style: Style,
}

impl<'a> fmt::Display for TrendView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} {} shifts, {} swap requests over {} days",
            self.style.heading("Trends:"),
            self.data.total_shifts,
            self.data.total_swaps,
            self.data.points.len()
        )?;
        if let Some(day) = self.data.busiest_day {
            writeln!(f, "Busiest day: {}", day)?;
        }
        writeln!(f)?;

        let peak = self.data.points.iter().map(|p| p.shifts).max().unwrap_or(0).max(1);
        writeln!(f, "{:<10} {:>6} {:>6} {:>5}", "DATE", "SHIFTS", "AGENTS", "SWAPS")?;
        for point in &self.data.points {
            let bar = "#".repeat((point.shifts * 20 / peak) as usize);
            let line = format!(
                "{:<10} {:>6} {:>6} {:>5}  ",
                point.date.format("%Y-%m-%d"),
                point.shifts,
                point.agents,
                point.swaps
            );
            if point.shifts == 0 && point.swaps == 0 {
                writeln!(f, "{}", self.style.muted(line.trim_end()))?;
            } else {
                writeln!(f, "{}{}", line, self.style.good(&bar))?;
            }
        }
        Ok(())
    }
}

impl CreateView for TrendViewModel {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
        Box::new(TrendView { data: self, style })
    }
}

impl CsvExport for TrendViewModel {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        writer.write_record(["date", "shifts", "agents", "swaps"])?;
        for point in &self.points {
            writer.write_record([
                point.date.format("%Y-%m-%d").to_string(),
                point.shifts.to_string(),
                point.agents.to_string(),
                point.swaps.to_string(),
            ])?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Summary
// --------------------------------------------------------

pub struct SummaryView<'a> {
    data: &'a SummaryViewModel,
    style: Style,
}

impl<'a> fmt::Display for SummaryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = &self.data.summary;
        writeln!(
            f,
            "{} {} shifts, {} agents available, {} pending swaps",
            self.style.heading("Summary:"),
            summary.total_shifts,
            summary.active_agents,
            summary.pending_swaps
        )?;
        writeln!(
            f,
            "Fairness {} ({}), {} shifts per agent",
            one_decimal(summary.fairness_score),
            self.style.grade(summary.grade),
            one_decimal(summary.avg_shifts_per_agent)
        )?;
        writeln!(f)?;

        if summary.shift_types.is_empty() {
            return writeln!(f, "{}", self.style.muted("No shifts in range."));
        }
        writeln!(f, "{:<12} {:>6}", "SHIFT TYPE", "SHIFTS")?;
        for (shift_type, shifts) in &summary.shift_types {
            writeln!(f, "{:<12} {:>6}", truncate(shift_type, 12), shifts)?;
        }
        Ok(())
    }
}

impl CreateView for SummaryViewModel {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
        Box::new(SummaryView { data: self, style })
    }
}

impl CsvExport for SummaryViewModel {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        let summary = &self.summary;
        writer.write_record(["metric", "value"])?;
        let rows = [
            ("total_shifts", summary.total_shifts.to_string()),
            ("active_agents", summary.active_agents.to_string()),
            ("pending_swaps", summary.pending_swaps.to_string()),
            ("fairness_score", one_decimal(summary.fairness_score)),
            ("grade", summary.grade.label().to_string()),
            ("avg_shifts_per_agent", one_decimal(summary.avg_shifts_per_agent)),
        ];
        for (metric, value) in rows {
            writer.write_record([metric, value.as_str()])?;
        }
        for (shift_type, shifts) in &summary.shift_types {
            writer.write_record([format!("shifts.{}", shift_type), shifts.to_string()])?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Activity
// --------------------------------------------------------

pub struct ActivityView<'a> {
    data: &'a ActivityViewModel,
    style: Style,
}

impl<'a> fmt::Display for ActivityView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} {} rows (limit {})",
            self.style.heading("Activity:"),
            self.data.records.len(),
            self.data.limit
        )?;
        writeln!(f)?;

        if self.data.records.is_empty() {
            return writeln!(f, "{}", self.style.muted("No activity in range."));
        }
        writeln!(f, "{:<10} {:<16} {:<15} {}", "DATE", "AGENT", "TYPE", "DESCRIPTION")?;
        for record in &self.data.records {
            let description = match record.hours {
                Some(h) => format!("{} ({})", record.description, hours(h)),
                None => record.description.clone(),
            };
            writeln!(
                f,
                "{:<10} {:<16} {:<15} {}",
                record.date.format("%Y-%m-%d"),
                truncate(&record.agent_name, 16),
                record.kind.as_str(),
                truncate(&description, 60)
            )?;
        }
        Ok(())
    }
}

impl CreateView for ActivityViewModel {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
        Box::new(ActivityView { data: self, style })
    }
}

impl CsvExport for ActivityViewModel {
    fn write_csv<W: io::Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
        writer.write_record([
            "date",
            "agent_id",
            "agent_name",
            "activity_type",
            "description",
            "shift_type",
            "hours",
        ])?;
        for record in &self.records {
            writer.write_record([
                record.date.format("%Y-%m-%d").to_string(),
                record.agent_id.to_string(),
                record.agent_name.clone(),
                record.kind.as_str().to_string(),
                record.description.clone(),
                record.shift_type.clone().unwrap_or_default(),
                record.hours.map(|h| format!("{:.2}", h)).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }
}
