use std::collections::BTreeSet;
use teamdeck_types::{ActivityKind, ActivityRecord};

/// Which activity kinds to keep; empty keeps everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    kinds: BTreeSet<ActivityKind>,
}

impl ActivityFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn only(kinds: impl IntoIterator<Item = ActivityKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    pub fn includes(&self, kind: ActivityKind) -> bool {
        self.kinds.is_empty() || self.kinds.contains(&kind)
    }

    pub fn wants_shifts(&self) -> bool {
        self.includes(ActivityKind::ShiftAssigned)
    }

    pub fn wants_requests(&self) -> bool {
        self.includes(ActivityKind::SwapRequested)
    }

    pub fn wants_answers(&self) -> bool {
        self.includes(ActivityKind::SwapApproved) || self.includes(ActivityKind::SwapRejected)
    }

    pub fn kinds(&self) -> Vec<ActivityKind> {
        if self.kinds.is_empty() {
            ActivityKind::ALL.to_vec()
        } else {
            self.kinds.iter().copied().collect()
        }
    }
}

/// Merge per-source feeds into one, newest day first, keeping at most
/// `limit` rows. Rows on the same day keep source order: shifts, then
/// requests, then answers.
pub fn merge_activity(
    sources: Vec<Vec<ActivityRecord>>,
    filter: &ActivityFilter,
    limit: usize,
) -> Vec<ActivityRecord> {
    let mut feed: Vec<ActivityRecord> = sources
        .into_iter()
        .flatten()
        .filter(|record| filter.includes(record.kind))
        .collect();

    // sort_by is stable
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(limit);
    feed
}
