// Engine module - lane placement, durations and workload analytics
// Sits between raw store rows (types/index) and presentation (cli)

pub mod activity;
pub mod board;
pub mod duration;
pub mod fairness;
pub mod health;
pub mod lane;
pub mod report;
pub mod stats;
pub mod summary;
pub mod trend;

pub use activity::{ActivityFilter, merge_activity};
pub use board::{AgentCounts, Board, BoardSummary, Card, LaneColumn, build_board, sort_lane};
pub use duration::{format_elapsed, format_minutes, task_duration};
pub use fairness::{
    AgentCount, DimensionScore, FairnessAnalyzer, FairnessGrade, FairnessReport, LoadOutliers,
    TaskFairnessReport, analyze, score_values,
};
pub use health::{AgentHealth, HealthThresholds, assess_agents, classify_health, format_last_seen};
pub use lane::{ActiveReviewers, HistoryIndex, LaneClassifier, Placement, classify};
pub use report::{AgentReport, InitiatedSwaps, SwapStats, TaskProductivity, merge_swap_stats};
pub use stats::{AgentDuration, DurationStats, duration_stats};
pub use summary::{SummaryDashboard, build_summary};
pub use trend::{TrendPoint, build_trend};

use chrono::{DateTime, Utc};
use teamdeck_types::{Agent, Task, TaskHistoryEvent};

// Façade API - Stable public interface for runtime layer
// Runtime should use these functions instead of wiring the pieces itself

/// Build the board from one fetched batch: history is indexed once and the
/// reviewer set is taken from the agent roster.
pub fn assemble_board(
    tasks: Vec<Task>,
    history: Vec<TaskHistoryEvent>,
    agents: &[Agent],
    now: DateTime<Utc>,
) -> Board {
    let index = HistoryIndex::build(history);
    let reviewers = ActiveReviewers::from_agents(agents);
    tracing::debug!(
        tasks = tasks.len(),
        with_history = index.task_count(),
        "assembling board"
    );
    build_board(tasks, &index, &reviewers, now)
}
