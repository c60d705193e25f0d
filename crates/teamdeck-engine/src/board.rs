use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use teamdeck_types::{Agent, AgentStatus, Lane, Priority, Task, TaskId, TaskStatus};

use crate::duration::task_duration;
use crate::lane::{ActiveReviewers, HistoryIndex, LaneClassifier};

/// One task as drawn on the board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: TaskId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub lane: Lane,
    pub blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_reason: Option<String>,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneColumn {
    pub lane: Lane,
    pub label: &'static str,
    pub cards: Vec<Card>,
}

impl LaneColumn {
    pub fn blocked_count(&self) -> usize {
        self.cards.iter().filter(|card| card.blocked).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoardSummary {
    pub total_tasks: usize,
    pub blocked: usize,
    pub per_lane: BTreeMap<Lane, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    pub lanes: Vec<LaneColumn>,
    pub summary: BoardSummary,
}

impl Board {
    pub fn lane(&self, lane: Lane) -> Option<&LaneColumn> {
        self.lanes.iter().find(|column| column.lane == lane)
    }
}

/// Agents on the roster by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AgentCounts {
    pub total: usize,
    pub active: usize,
    pub idle: usize,
    pub blocked: usize,
    pub offline: usize,
}

impl AgentCounts {
    pub fn tally(agents: &[Agent]) -> Self {
        let mut counts = Self {
            total: agents.len(),
            ..Self::default()
        };
        for agent in agents {
            match agent.status {
                AgentStatus::Active => counts.active += 1,
                AgentStatus::Idle => counts.idle += 1,
                AgentStatus::Blocked => counts.blocked += 1,
                AgentStatus::Offline => counts.offline += 1,
            }
        }
        counts
    }
}

/// Blocked cards first; relative order otherwise unchanged
pub fn sort_lane(cards: &mut [Card]) {
    // sort_by_key is stable
    cards.sort_by_key(|card| !card.blocked);
}

/// Lay out tasks as the six-lane board.
///
/// `tasks` are expected in display order (due date, then priority); that
/// order survives within each lane apart from blocked cards moving up.
pub fn build_board(
    tasks: Vec<Task>,
    history: &HistoryIndex,
    reviewers: &ActiveReviewers,
    now: DateTime<Utc>,
) -> Board {
    let classifier = LaneClassifier::new(history, reviewers);
    let mut by_lane: BTreeMap<Lane, Vec<Card>> = Lane::ALL.iter().map(|l| (*l, Vec::new())).collect();

    let total_tasks = tasks.len();
    for task in tasks {
        let placement = classifier.classify(&task);
        let duration = task_duration(&task, now);
        let working_agent = reviewers.agent_name(&task.id).map(str::to_string);

        let card = Card {
            blocked_reason: task.blocked_reason.filter(|_| placement.blocked),
            id: task.id,
            title: task.title,
            project_name: task.project_name,
            status: task.status,
            priority: task.priority,
            assignee_name: task.assignee_name,
            due_date: task.due_date,
            lane: placement.lane,
            blocked: placement.blocked,
            duration,
            working_agent,
        };
        by_lane.entry(placement.lane).or_default().push(card);
    }

    let mut summary = BoardSummary {
        total_tasks,
        ..BoardSummary::default()
    };

    let lanes = Lane::ALL
        .iter()
        .map(|lane| {
            let mut cards = by_lane.remove(lane).unwrap_or_default();
            sort_lane(&mut cards);

            let column = LaneColumn {
                lane: *lane,
                label: lane.label(),
                cards,
            };
            summary.blocked += column.blocked_count();
            summary.per_lane.insert(*lane, column.cards.len());
            column
        })
        .collect();

    tracing::debug!(
        tasks = summary.total_tasks,
        blocked = summary.blocked,
        "assembled board"
    );

    Board { lanes, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use teamdeck_types::TaskHistoryEvent;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
    }

    fn card(id: &str, blocked: bool) -> Card {
        Card {
            id: TaskId::from(id),
            title: None,
            project_name: None,
            status: if blocked {
                TaskStatus::Blocked
            } else {
                TaskStatus::Todo
            },
            priority: Priority::Normal,
            assignee_name: None,
            due_date: None,
            lane: Lane::Todo,
            blocked,
            blocked_reason: None,
            duration: "N/A".to_string(),
            working_agent: None,
        }
    }

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_sort_lane_moves_blocked_first_stably() {
        let mut cards = vec![
            card("b1", true),
            card("n1", false),
            card("b2", true),
            card("n2", false),
        ];
        sort_lane(&mut cards);
        assert_eq!(ids(&cards), vec!["b1", "b2", "n1", "n2"]);
    }

    #[test]
    fn test_sort_lane_keeps_order_without_blocked() {
        let mut cards = vec![card("a", false), card("b", false), card("c", false)];
        sort_lane(&mut cards);
        assert_eq!(ids(&cards), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_board_has_six_lanes_in_order() {
        let board = build_board(
            Vec::new(),
            &HistoryIndex::default(),
            &ActiveReviewers::default(),
            now(),
        );
        let lanes: Vec<Lane> = board.lanes.iter().map(|c| c.lane).collect();
        assert_eq!(lanes, Lane::ALL.to_vec());
        assert_eq!(board.lanes[3].label, "Waiting for Review");
        assert_eq!(board.summary.total_tasks, 0);
    }

    #[test]
    fn test_board_places_blocked_task_with_history() {
        let history = HistoryIndex::build(vec![TaskHistoryEvent::new(
            "T-2",
            Some("in_progress"),
            Some("blocked"),
            now() - Duration::hours(1),
        )]);

        let tasks = vec![
            Task::new("T-1", TaskStatus::InProgress),
            Task {
                blocked_reason: Some("waiting on API key".to_string()),
                ..Task::new("T-2", TaskStatus::Blocked)
            },
            Task {
                blocked_reason: Some("stale reason".to_string()),
                ..Task::new("T-3", TaskStatus::Todo)
            },
        ];

        let board = build_board(tasks, &history, &ActiveReviewers::default(), now());
        let doing = board.lane(Lane::Doing).unwrap();

        assert_eq!(ids(&doing.cards), vec!["T-2", "T-1"]);
        assert_eq!(
            doing.cards[0].blocked_reason.as_deref(),
            Some("waiting on API key")
        );
        assert_eq!(board.lane(Lane::Todo).unwrap().cards[0].blocked_reason, None);
        assert_eq!(board.summary.blocked, 1);
        assert_eq!(board.summary.per_lane[&Lane::Doing], 2);
        assert_eq!(board.summary.per_lane[&Lane::Todo], 1);
    }

    #[test]
    fn test_board_marks_working_agent() {
        let mut alice = Agent::new("a1", "Alice", AgentStatus::Active);
        alice.current_task_id = Some(TaskId::from("T-9"));
        let reviewers = ActiveReviewers::from_agents(&[alice]);

        let tasks = vec![Task::new("T-9", TaskStatus::Review)];
        let board = build_board(tasks, &HistoryIndex::default(), &reviewers, now());
        let reviewing = board.lane(Lane::Reviewing).unwrap();

        assert_eq!(reviewing.cards.len(), 1);
        assert_eq!(reviewing.cards[0].working_agent.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_board_computes_card_durations() {
        let task = Task {
            started_at: Some(now() - Duration::minutes(90)),
            ..Task::new("T-1", TaskStatus::InProgress)
        };
        let board = build_board(
            vec![task],
            &HistoryIndex::default(),
            &ActiveReviewers::default(),
            now(),
        );
        assert_eq!(board.lane(Lane::Doing).unwrap().cards[0].duration, "1h 30m");
    }

    #[test]
    fn test_agent_counts_by_status() {
        let agents = vec![
            Agent::new("a1", "Alice", AgentStatus::Active),
            Agent::new("a2", "Bob", AgentStatus::Idle),
            Agent::new("a3", "Cid", AgentStatus::Idle),
            Agent::new("a4", "Dee", AgentStatus::Offline),
        ];
        let counts = AgentCounts::tally(&agents);
        assert_eq!(
            counts,
            AgentCounts {
                total: 4,
                active: 1,
                idle: 2,
                blocked: 0,
                offline: 1
            }
        );
    }
}
