use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AgentId;

/// What happened in one activity-feed row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ShiftAssigned,
    SwapRequested,
    SwapApproved,
    SwapRejected,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 4] = [
        ActivityKind::ShiftAssigned,
        ActivityKind::SwapRequested,
        ActivityKind::SwapApproved,
        ActivityKind::SwapRejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::ShiftAssigned => "shift_assigned",
            ActivityKind::SwapRequested => "swap_requested",
            ActivityKind::SwapApproved => "swap_approved",
            ActivityKind::SwapRejected => "swap_rejected",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the activity feed: a shift on the schedule, a swap request
/// filed, or a swap answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    pub agent_id: AgentId,
    pub agent_name: String,
    #[serde(rename = "activity_type")]
    pub kind: ActivityKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
}

impl ActivityRecord {
    pub fn shift_assigned(
        date: NaiveDate,
        agent_id: AgentId,
        agent_name: String,
        shift_type: String,
        hours: f64,
    ) -> Self {
        Self {
            date,
            agent_id,
            agent_name,
            kind: ActivityKind::ShiftAssigned,
            description: format!("Shift assigned: {}", shift_type),
            shift_type: Some(shift_type),
            hours: Some((hours * 100.0).round() / 100.0),
        }
    }

    /// Filed by the requestor
    pub fn swap_requested(
        date: NaiveDate,
        agent_id: AgentId,
        agent_name: String,
        reason: Option<&str>,
    ) -> Self {
        Self {
            date,
            agent_id,
            agent_name,
            kind: ActivityKind::SwapRequested,
            description: format!("Swap requested: {}", reason.unwrap_or("No reason given")),
            shift_type: None,
            hours: None,
        }
    }

    /// Answered by the target
    pub fn swap_answered(
        date: NaiveDate,
        agent_id: AgentId,
        agent_name: String,
        approved: bool,
        notes: Option<&str>,
    ) -> Self {
        let (kind, verb) = if approved {
            (ActivityKind::SwapApproved, "approved")
        } else {
            (ActivityKind::SwapRejected, "rejected")
        };
        Self {
            date,
            agent_id,
            agent_name,
            kind,
            description: format!("Swap {}: {}", verb, notes.unwrap_or("No notes")),
            shift_type: None,
            hours: None,
        }
    }
}

/// Active shifts of one type in a report window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTypeCount {
    pub shift_type: String,
    pub shifts: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()
    }

    #[test]
    fn test_descriptions_fill_missing_text() {
        let request = ActivityRecord::swap_requested(day(), AgentId::from("a1"), "Alice".into(), None);
        assert_eq!(request.description, "Swap requested: No reason given");

        let answer =
            ActivityRecord::swap_answered(day(), AgentId::from("a2"), "Bob".into(), false, None);
        assert_eq!(answer.kind, ActivityKind::SwapRejected);
        assert_eq!(answer.description, "Swap rejected: No notes");

        let answer = ActivityRecord::swap_answered(
            day(),
            AgentId::from("a2"),
            "Bob".into(),
            true,
            Some("happy to help"),
        );
        assert_eq!(answer.description, "Swap approved: happy to help");
    }

    #[test]
    fn test_shift_hours_round_to_two_places() {
        let shift = ActivityRecord::shift_assigned(
            day(),
            AgentId::from("a1"),
            "Alice".into(),
            "overtime".into(),
            7.0 / 3.0,
        );
        assert_eq!(shift.hours, Some(2.33));
        assert_eq!(shift.description, "Shift assigned: overtime");
    }

    #[test]
    fn test_serializes_kind_as_activity_type() {
        let shift = ActivityRecord::shift_assigned(
            day(),
            AgentId::from("a1"),
            "Alice".into(),
            "regular".into(),
            8.0,
        );
        let json = serde_json::to_value(&shift).unwrap();
        assert_eq!(json["activity_type"], "shift_assigned");
        assert_eq!(json["date"], "2026-03-04");
        assert_eq!(json["hours"], 8.0);
    }
}
