use chrono::{DateTime, Utc};
use serde::Serialize;
use teamdeck_engine::{AgentCounts, AgentHealth, Board, DurationStats, assemble_board, assess_agents, duration_stats};
use teamdeck_index::Database;

use crate::{Config, Result};

/// Everything the board view shows for one refresh
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub board: Board,
    pub agents: AgentCounts,
    pub durations: DurationStats,
}

pub struct BoardService<'a> {
    db: &'a Database,
    config: &'a Config,
}

impl<'a> BoardService<'a> {
    pub fn new(db: &'a Database, config: &'a Config) -> Self {
        Self { db, config }
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> Result<BoardSnapshot> {
        let tasks = self.db.list_tasks()?;
        let history = self.db.blocked_task_history()?;
        let agents = self.db.list_agents()?;

        let durations = duration_stats(&tasks, self.config.reports.top_agents);
        let board = assemble_board(tasks, history, &agents, now);

        Ok(BoardSnapshot {
            board,
            agents: AgentCounts::tally(&agents),
            durations,
        })
    }

    pub fn roster(&self, now: DateTime<Utc>) -> Result<Vec<AgentHealth>> {
        let agents = self.db.list_agents()?;
        Ok(assess_agents(&agents, now, self.config.health_thresholds()))
    }
}
