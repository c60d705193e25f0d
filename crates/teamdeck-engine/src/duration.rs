use chrono::{DateTime, Duration, Utc};
use teamdeck_types::{Task, TaskStatus};

/// Human-readable time spent on (or waiting for) a task.
///
/// - done: recorded `actual_duration_minutes`, else completed - started,
///   else completed - created, else "Done"
/// - in progress: now - started
/// - anything else: now - created
/// - no usable timestamps: "N/A"
pub fn task_duration(task: &Task, now: DateTime<Utc>) -> String {
    if task.status == TaskStatus::Done {
        return done_duration(task);
    }

    if task.status == TaskStatus::InProgress
        && let Some(started) = task.started_at
    {
        return format_elapsed(now - started);
    }

    match task.created_at {
        Some(created) => format_elapsed(now - created),
        None => "N/A".to_string(),
    }
}

fn done_duration(task: &Task) -> String {
    if let Some(minutes) = task.actual_duration_minutes.filter(|m| *m > 0.0) {
        return format_whole_minutes(minutes.round() as i64);
    }

    if let (Some(started), Some(completed)) = (task.started_at, task.completed_at) {
        return format_elapsed(completed - started);
    }

    if let (Some(created), Some(completed)) = (task.created_at, task.completed_at) {
        return format_elapsed(completed - created);
    }

    "Done".to_string()
}

/// Format an interval as "2d 3h", "3h 15m" or "15m". Negative intervals
/// (clock skew between writers) read as zero.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_minutes = elapsed.num_minutes().max(0);
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes % (24 * 60)) / 60;
    let minutes = total_minutes % 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Format a minute count as "2h 5m" or "45m"; absent or non-positive is "N/A"
pub fn format_minutes(minutes: Option<f64>) -> String {
    match minutes.filter(|m| *m > 0.0) {
        Some(m) => format_whole_minutes(m.round() as i64),
        None => "N/A".to_string(),
    }
}

fn format_whole_minutes(total: i64) -> String {
    let hours = total / 60;
    let minutes = total % 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
