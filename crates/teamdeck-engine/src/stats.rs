use serde::Serialize;
use std::collections::HashMap;
use teamdeck_types::{AgentId, Task, TaskStatus};

use crate::fairness::round1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentDuration {
    pub agent_id: AgentId,
    pub agent_name: String,
    pub completed: u64,
    pub avg_minutes: f64,
}

/// Recorded durations of finished work
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DurationStats {
    pub count: u64,
    pub avg_minutes: f64,
    pub min_minutes: f64,
    pub max_minutes: f64,
    pub top_agents: Vec<AgentDuration>,
}

/// Only done tasks with a positive `actual_duration_minutes` count. The
/// `top` busiest assignees are listed with their own average; ties go by
/// name.
pub fn duration_stats(tasks: &[Task], top: usize) -> DurationStats {
    let timed: Vec<(&Task, f64)> = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Done)
        .filter_map(|task| {
            task.actual_duration_minutes
                .filter(|m| *m > 0.0)
                .map(|m| (task, m))
        })
        .collect();

    if timed.is_empty() {
        return DurationStats::default();
    }

    let total: f64 = timed.iter().map(|(_, m)| m).sum();
    let min = timed.iter().map(|(_, m)| *m).fold(f64::INFINITY, f64::min);
    let max = timed.iter().map(|(_, m)| *m).fold(f64::NEG_INFINITY, f64::max);

    let mut per_agent: HashMap<&AgentId, (String, u64, f64)> = HashMap::new();
    for (task, minutes) in &timed {
        let Some(agent_id) = task.assignee_id.as_ref() else {
            continue;
        };
        let name = task
            .assignee_name
            .clone()
            .unwrap_or_else(|| agent_id.to_string());
        let entry = per_agent.entry(agent_id).or_insert((name, 0, 0.0));
        entry.1 += 1;
        entry.2 += minutes;
    }

    let mut top_agents: Vec<AgentDuration> = per_agent
        .into_iter()
        .map(|(agent_id, (agent_name, completed, minutes))| AgentDuration {
            agent_id: agent_id.clone(),
            agent_name,
            completed,
            avg_minutes: round1(minutes / completed as f64),
        })
        .collect();
    top_agents.sort_by(|a, b| {
        b.completed
            .cmp(&a.completed)
            .then_with(|| a.agent_name.cmp(&b.agent_name))
    });
    top_agents.truncate(top);

    DurationStats {
        count: timed.len() as u64,
        avg_minutes: round1(total / timed.len() as f64),
        min_minutes: min,
        max_minutes: max,
        top_agents,
    }
}
