use serde::Serialize;
use teamdeck_engine::{AgentCounts, Board, DurationStats};

#[derive(Debug, Serialize)]
pub struct BoardViewModel {
    pub board: Board,
    pub agents: AgentCounts,
    pub durations: DurationStats,
}
