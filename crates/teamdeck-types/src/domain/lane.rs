use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Kanban column a task is displayed in.
///
/// There is no "blocked" lane: a blocked task sits in the lane it was
/// blocked from and carries a flag instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    Backlog,
    Todo,
    Doing,
    WaitingReview,
    Reviewing,
    Done,
}

impl Lane {
    /// All lanes in board order (left to right)
    pub const ALL: [Lane; 6] = [
        Lane::Backlog,
        Lane::Todo,
        Lane::Doing,
        Lane::WaitingReview,
        Lane::Reviewing,
        Lane::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::Backlog => "backlog",
            Lane::Todo => "todo",
            Lane::Doing => "doing",
            Lane::WaitingReview => "waiting_review",
            Lane::Reviewing => "reviewing",
            Lane::Done => "done",
        }
    }

    /// Column header shown on the board
    pub fn label(&self) -> &'static str {
        match self {
            Lane::Backlog => "Backlog",
            Lane::Todo => "Todo",
            Lane::Doing => "Doing",
            Lane::WaitingReview => "Waiting for Review",
            Lane::Reviewing => "Reviewing",
            Lane::Done => "Done",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Lane {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lane::ALL
            .into_iter()
            .find(|lane| lane.as_str() == s)
            .ok_or_else(|| Error::UnknownLane(s.to_string()))
    }
}
