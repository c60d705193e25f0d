use chrono::{DateTime, Utc};
use serde::Serialize;
use teamdeck_types::DateRange;

/// JSON envelope shared by every command
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    pub generated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,

    pub content: T,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            date_range: None,
            content,
        }
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }
}
