//! Dispersion-based fairness scoring.
//!
//! A dimension's score is `100 - CV`, where CV is the population standard
//! deviation as a percentage of the mean, clamped at zero. An even spread
//! scores 100; a dimension nobody carries (mean of zero) is also even.

use serde::Serialize;
use std::fmt;
use teamdeck_types::{AgentId, AggregateAgentRecord, CountField, TaskWorkloadRecord, WorkloadRecord};

pub const DEFAULT_OVERWORK_THRESHOLD: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FairnessGrade {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl FairnessGrade {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            FairnessGrade::Excellent
        } else if score >= 75.0 {
            FairnessGrade::Good
        } else if score >= 60.0 {
            FairnessGrade::Fair
        } else {
            FairnessGrade::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FairnessGrade::Excellent => "Excellent",
            FairnessGrade::Good => "Good",
            FairnessGrade::Fair => "Fair",
            FairnessGrade::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for FairnessGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Statistics for one count field across agents
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionScore {
    /// `max(0, 100 - cv)`, one decimal
    pub score: f64,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    /// Coefficient of variation in percent
    pub cv: f64,
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

impl DimensionScore {
    pub fn grade(&self) -> FairnessGrade {
        FairnessGrade::from_score(self.score)
    }
}

pub fn score_values(values: &[f64]) -> DimensionScore {
    if values.is_empty() {
        return DimensionScore {
            score: 0.0,
            mean: 0.0,
            variance: 0.0,
            std_dev: 0.0,
            cv: 0.0,
            min: 0.0,
            max: 0.0,
            samples: 0,
        };
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let (cv, score) = if mean > 0.0 {
        let cv = std_dev / mean * 100.0;
        (cv, round1((100.0 - cv).max(0.0)))
    } else {
        (0.0, 100.0)
    };

    DimensionScore {
        score,
        mean,
        variance,
        std_dev,
        cv,
        min,
        max,
        samples: values.len(),
    }
}

pub fn analyze<R: WorkloadRecord>(records: &[R], field: CountField) -> DimensionScore {
    let values: Vec<f64> = records.iter().map(|r| r.count(field) as f64).collect();
    score_values(&values)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentCount {
    pub agent_id: AgentId,
    pub agent_name: String,
    pub count: u64,
}

impl AgentCount {
    fn of<R: WorkloadRecord>(record: &R, field: CountField) -> Self {
        Self {
            agent_id: record.agent_id().clone(),
            agent_name: record.agent_name().to_string(),
            count: record.count(field),
        }
    }
}

/// Agents whose load strays from the mean by more than a factor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadOutliers {
    pub overworked: Vec<AgentCount>,
    pub underworked: Vec<AgentCount>,
}

pub fn find_outliers<R: WorkloadRecord>(
    records: &[R],
    field: CountField,
    mean: f64,
    threshold: f64,
) -> LoadOutliers {
    let mut outliers = LoadOutliers::default();
    if mean <= 0.0 || threshold <= 0.0 {
        return outliers;
    }

    for record in records {
        let value = record.count(field) as f64;
        if value > mean * threshold {
            outliers.overworked.push(AgentCount::of(record, field));
        } else if value < mean / threshold && value < mean {
            outliers.underworked.push(AgentCount::of(record, field));
        }
    }
    outliers
}

fn distribution<R: WorkloadRecord>(records: &[R], field: CountField) -> Vec<AgentCount> {
    records.iter().map(|r| AgentCount::of(r, field)).collect()
}

/// Shift fairness across overall workload, overtime and on-call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FairnessReport {
    pub agents: usize,
    pub workload: DimensionScore,
    pub overtime: DimensionScore,
    pub on_call: DimensionScore,
    pub grade: FairnessGrade,
    pub distribution: Vec<AgentCount>,
    pub overtime_distribution: Vec<AgentCount>,
    #[serde(flatten)]
    pub outliers: LoadOutliers,
}

/// Task fairness over completed work
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskFairnessReport {
    pub agents: usize,
    pub completed: DimensionScore,
    pub grade: FairnessGrade,
    pub distribution: Vec<AgentCount>,
    #[serde(flatten)]
    pub outliers: LoadOutliers,
}

#[derive(Debug, Clone, Copy)]
pub struct FairnessAnalyzer {
    threshold: f64,
}

impl Default for FairnessAnalyzer {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_OVERWORK_THRESHOLD,
        }
    }
}

impl FairnessAnalyzer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn shifts(&self, records: &[AggregateAgentRecord]) -> FairnessReport {
        let workload = analyze(records, CountField::TotalShifts);
        let overtime = analyze(records, CountField::OvertimeShifts);
        let on_call = analyze(records, CountField::OnCallShifts);

        tracing::debug!(
            agents = records.len(),
            workload = workload.score,
            overtime = overtime.score,
            on_call = on_call.score,
            "scored shift fairness"
        );

        FairnessReport {
            agents: records.len(),
            grade: workload.grade(),
            distribution: distribution(records, CountField::TotalShifts),
            overtime_distribution: distribution(records, CountField::OvertimeShifts),
            outliers: find_outliers(records, CountField::TotalShifts, workload.mean, self.threshold),
            workload,
            overtime,
            on_call,
        }
    }

    pub fn tasks(&self, records: &[TaskWorkloadRecord]) -> TaskFairnessReport {
        let completed = analyze(records, CountField::CompletedTasks);

        TaskFairnessReport {
            agents: records.len(),
            grade: completed.grade(),
            distribution: distribution(records, CountField::CompletedTasks),
            outliers: find_outliers(
                records,
                CountField::CompletedTasks,
                completed.mean,
                self.threshold,
            ),
            completed,
        }
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
