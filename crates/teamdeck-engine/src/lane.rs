use serde::Serialize;
use std::collections::HashMap;
use teamdeck_types::{Agent, Lane, Task, TaskHistoryEvent, TaskId, TaskStatus};

/// Where a task is drawn on the board.
///
/// `blocked` is independent of `lane`: a blocked task keeps the lane it was
/// blocked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub lane: Lane,
    pub blocked: bool,
}

/// Task history grouped by task, newest event first.
///
/// Built once per board so that each blocked task is resolved without
/// rescanning the full history.
#[derive(Debug, Clone, Default)]
pub struct HistoryIndex {
    by_task: HashMap<TaskId, Vec<TaskHistoryEvent>>,
}

impl HistoryIndex {
    pub fn build(events: impl IntoIterator<Item = TaskHistoryEvent>) -> Self {
        let mut by_task: HashMap<TaskId, Vec<TaskHistoryEvent>> = HashMap::new();
        for event in events {
            by_task.entry(event.task_id.clone()).or_default().push(event);
        }

        // Equal timestamps: the event recorded later wins
        for events in by_task.values_mut() {
            events.reverse();
            events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        }

        tracing::debug!(tasks = by_task.len(), "built task history index");
        Self { by_task }
    }

    /// Events for a task, newest first
    pub fn events(&self, task_id: &TaskId) -> &[TaskHistoryEvent] {
        self.by_task.get(task_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn latest_matching<P>(&self, task_id: &TaskId, predicate: P) -> Option<&TaskHistoryEvent>
    where
        P: Fn(&TaskHistoryEvent) -> bool,
    {
        self.events(task_id).iter().find(|event| predicate(event))
    }

    pub fn task_count(&self) -> usize {
        self.by_task.len()
    }
}

/// Tasks an active agent is currently working on, with that agent's name
#[derive(Debug, Clone, Default)]
pub struct ActiveReviewers {
    by_task: HashMap<TaskId, String>,
}

impl ActiveReviewers {
    pub fn from_agents(agents: &[Agent]) -> Self {
        let by_task = agents
            .iter()
            .filter_map(|agent| {
                agent
                    .active_task()
                    .map(|task_id| (task_id.clone(), agent.name.clone()))
            })
            .collect();
        Self { by_task }
    }

    pub fn from_task_ids(ids: impl IntoIterator<Item = TaskId>) -> Self {
        let by_task = ids.into_iter().map(|id| (id, String::new())).collect();
        Self { by_task }
    }

    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.by_task.contains_key(task_id)
    }

    /// Name of the agent working the task; empty when built from bare ids
    pub fn agent_name(&self, task_id: &TaskId) -> Option<&str> {
        self.by_task
            .get(task_id)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

/// Maps tasks to lanes using one history index and one reviewer set
pub struct LaneClassifier<'a> {
    history: &'a HistoryIndex,
    reviewers: &'a ActiveReviewers,
}

impl<'a> LaneClassifier<'a> {
    pub fn new(history: &'a HistoryIndex, reviewers: &'a ActiveReviewers) -> Self {
        Self { history, reviewers }
    }

    pub fn classify(&self, task: &Task) -> Placement {
        let blocked = task.is_blocked();
        let effective = if blocked {
            self.resume_status(&task.id)
        } else {
            task.status.clone()
        };

        Placement {
            lane: self.lane_for(&task.id, &effective),
            blocked,
        }
    }

    /// Status a blocked task would resume in.
    ///
    /// The latest transition into a non-blocked status wins; otherwise the
    /// status the task was in when it was last blocked; otherwise `todo`.
    /// Never done or cancelled: blocked work is by definition unfinished.
    pub fn resume_status(&self, task_id: &TaskId) -> TaskStatus {
        let last_unblocked = self
            .history
            .latest_matching(task_id, |event| {
                matches!(&event.new_status, Some(status) if *status != TaskStatus::Blocked)
            })
            .and_then(|event| event.new_status.clone());

        let resolved = last_unblocked
            .or_else(|| {
                self.history
                    .latest_matching(task_id, |event| {
                        event.new_status == Some(TaskStatus::Blocked) && event.old_status.is_some()
                    })
                    .and_then(|event| event.old_status.clone())
            })
            .unwrap_or(TaskStatus::Todo);

        if resolved.is_terminal() {
            TaskStatus::Todo
        } else {
            resolved
        }
    }

    fn lane_for(&self, task_id: &TaskId, status: &TaskStatus) -> Lane {
        match status {
            TaskStatus::InProgress => Lane::Doing,
            TaskStatus::Reviewing => Lane::Reviewing,
            TaskStatus::Review => {
                if self.reviewers.contains(task_id) {
                    Lane::Reviewing
                } else {
                    Lane::WaitingReview
                }
            }
            TaskStatus::Backlog => Lane::Backlog,
            TaskStatus::Todo => Lane::Todo,
            TaskStatus::Done => Lane::Done,
            TaskStatus::Blocked | TaskStatus::Cancelled => Lane::Todo,
            TaskStatus::Unknown(raw) => raw.parse().unwrap_or(Lane::Todo),
        }
    }
}

/// One-shot form of [`LaneClassifier::classify`]
pub fn classify(task: &Task, history: &HistoryIndex, reviewers: &ActiveReviewers) -> Placement {
    LaneClassifier::new(history, reviewers).classify(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use teamdeck_types::AgentStatus;

    fn t(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 8, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn event(task: &str, old: Option<&str>, new: Option<&str>, at: i64) -> TaskHistoryEvent {
        TaskHistoryEvent::new(task, old, new, t(at))
    }

    fn place(task: &Task, history: &[TaskHistoryEvent], active: &[&str]) -> Placement {
        let index = HistoryIndex::build(history.to_vec());
        let reviewers = ActiveReviewers::from_task_ids(active.iter().map(|id| TaskId::from(*id)));
        classify(task, &index, &reviewers)
    }

    #[test]
    fn test_unblocked_statuses_follow_static_table() {
        let cases = [
            (TaskStatus::Backlog, Lane::Backlog),
            (TaskStatus::Todo, Lane::Todo),
            (TaskStatus::InProgress, Lane::Doing),
            (TaskStatus::Review, Lane::WaitingReview),
            (TaskStatus::Reviewing, Lane::Reviewing),
            (TaskStatus::Done, Lane::Done),
            (TaskStatus::Cancelled, Lane::Todo),
        ];

        for (status, lane) in cases {
            let placement = place(&Task::new("T-1", status.clone()), &[], &[]);
            assert_eq!(placement.lane, lane, "status {}", status);
            assert!(!placement.blocked);
        }
    }

    #[test]
    fn test_history_is_ignored_for_unblocked_tasks() {
        let history = [event("T-1", Some("todo"), Some("in_progress"), 1)];
        let placement = place(&Task::new("T-1", TaskStatus::Review), &history, &[]);
        assert_eq!(placement.lane, Lane::WaitingReview);
    }

    #[test]
    fn test_unknown_status_matching_lane_name_is_used() {
        let task = Task::new("T-1", TaskStatus::parse("waiting_review"));
        assert_eq!(place(&task, &[], &[]).lane, Lane::WaitingReview);

        let task = Task::new("T-2", TaskStatus::parse("doing"));
        assert_eq!(place(&task, &[], &[]).lane, Lane::Doing);
    }

    #[test]
    fn test_unrecognized_status_defaults_to_todo() {
        let task = Task::new("T-1", TaskStatus::parse("planning"));
        let placement = place(&task, &[], &[]);
        assert_eq!(placement.lane, Lane::Todo);
        assert!(!placement.blocked);
    }

    #[test]
    fn test_blocked_from_in_progress_stays_in_doing() {
        let history = [event("T-1", Some("in_progress"), Some("blocked"), 1)];
        let placement = place(&Task::new("T-1", TaskStatus::Blocked), &history, &[]);
        assert_eq!(
            placement,
            Placement {
                lane: Lane::Doing,
                blocked: true
            }
        );
    }

    #[test]
    fn test_blocked_prefers_latest_unblocked_transition() {
        let history = [
            event("T-1", Some("todo"), Some("in_progress"), 1),
            event("T-1", Some("in_progress"), Some("review"), 2),
            event("T-1", Some("review"), Some("blocked"), 3),
        ];
        let placement = place(&Task::new("T-1", TaskStatus::Blocked), &history, &[]);
        assert_eq!(placement.lane, Lane::WaitingReview);
        assert!(placement.blocked);
    }

    #[test]
    fn test_blocked_review_with_active_reviewer_is_reviewing() {
        let history = [event("T-1", Some("in_progress"), Some("review"), 1)];
        let placement = place(&Task::new("T-1", TaskStatus::Blocked), &history, &["T-1"]);
        assert_eq!(placement.lane, Lane::Reviewing);
        assert!(placement.blocked);
    }

    #[test]
    fn test_blocked_resolving_to_done_goes_to_todo() {
        let history = [event("T-1", Some("review"), Some("done"), 1)];
        let placement = place(&Task::new("T-1", TaskStatus::Blocked), &history, &[]);
        assert_eq!(placement.lane, Lane::Todo);
        assert!(placement.blocked);
    }

    #[test]
    fn test_blocked_from_cancelled_goes_to_todo() {
        let history = [event("T-1", Some("cancelled"), Some("blocked"), 1)];
        let placement = place(&Task::new("T-1", TaskStatus::Blocked), &history, &[]);
        assert_eq!(placement.lane, Lane::Todo);
    }

    #[test]
    fn test_blocked_without_history_defaults_to_todo() {
        let placement = place(&Task::new("T-1", TaskStatus::Blocked), &[], &[]);
        assert_eq!(
            placement,
            Placement {
                lane: Lane::Todo,
                blocked: true
            }
        );
    }

    #[test]
    fn test_blocked_ignores_other_tasks_history() {
        let history = [event("T-2", Some("todo"), Some("in_progress"), 1)];
        let placement = place(&Task::new("T-1", TaskStatus::Blocked), &history, &[]);
        assert_eq!(placement.lane, Lane::Todo);
    }

    #[test]
    fn test_repeated_block_cycles_use_latest_event() {
        // blocked from doing, unblocked into review, blocked again
        let history = [
            event("T-1", Some("in_progress"), Some("blocked"), 1),
            event("T-1", Some("blocked"), Some("in_progress"), 2),
            event("T-1", Some("in_progress"), Some("review"), 3),
            event("T-1", Some("review"), Some("blocked"), 4),
        ];
        let placement = place(&Task::new("T-1", TaskStatus::Blocked), &history, &[]);
        assert_eq!(placement.lane, Lane::WaitingReview);
    }

    #[test]
    fn test_history_order_of_input_does_not_matter() {
        let history = [
            event("T-1", Some("review"), Some("blocked"), 4),
            event("T-1", Some("todo"), Some("backlog"), 1),
            event("T-1", Some("backlog"), Some("in_progress"), 3),
        ];
        let placement = place(&Task::new("T-1", TaskStatus::Blocked), &history, &[]);
        assert_eq!(placement.lane, Lane::Doing);
    }

    #[test]
    fn test_old_status_branch_skips_events_without_old_status() {
        let history = [
            event("T-1", Some("backlog"), Some("blocked"), 1),
            event("T-1", None, Some("blocked"), 2),
        ];
        let placement = place(&Task::new("T-1", TaskStatus::Blocked), &history, &[]);
        assert_eq!(placement.lane, Lane::Backlog);
    }

    #[test]
    fn test_equal_timestamps_prefer_later_recorded_event() {
        let history = [
            event("T-1", Some("todo"), Some("backlog"), 5),
            event("T-1", Some("backlog"), Some("in_progress"), 5),
        ];
        let placement = place(&Task::new("T-1", TaskStatus::Blocked), &history, &[]);
        assert_eq!(placement.lane, Lane::Doing);
    }

    #[test]
    fn test_reviewer_set_only_counts_active_agents() {
        let mut active = Agent::new("a1", "Alice", AgentStatus::Active);
        active.current_task_id = Some(TaskId::from("T-1"));
        let mut idle = Agent::new("a2", "Bob", AgentStatus::Idle);
        idle.current_task_id = Some(TaskId::from("T-2"));

        let reviewers = ActiveReviewers::from_agents(&[active, idle]);
        let index = HistoryIndex::default();

        let reviewed = classify(&Task::new("T-1", TaskStatus::Review), &index, &reviewers);
        let waiting = classify(&Task::new("T-2", TaskStatus::Review), &index, &reviewers);

        assert_eq!(reviewed.lane, Lane::Reviewing);
        assert_eq!(waiting.lane, Lane::WaitingReview);
        assert_eq!(reviewers.agent_name(&TaskId::from("T-1")), Some("Alice"));
        assert_eq!(reviewers.agent_name(&TaskId::from("T-2")), None);
    }
}
