use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::id::TaskId;
use crate::urgency::Urgency;

/// A single entry of the task list.
///
/// Serialized field names match the persisted layout: `id`, `text`,
/// `completed`, `dateTime` (RFC 3339) and `dateDue` (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable identifier.
    pub id: TaskId,
    /// Description, trimmed and non-empty.
    pub text: String,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Creation or last-edit instant.
    #[serde(with = "rfc3339")]
    pub date_time: OffsetDateTime,
    /// Deadline.
    #[serde(with = "due_date")]
    pub date_due: Date,
}

impl Task {
    /// Create an open task stamped with `now`.
    #[must_use]
    pub fn new(text: impl Into<String>, date_due: Date, now: OffsetDateTime) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            completed: false,
            date_time: now,
            date_due,
        }
    }

    /// Urgency of this task on `today`.
    #[must_use]
    pub fn urgency(&self, today: Date) -> Urgency {
        Urgency::classify(self.date_due, today)
    }

    /// True when this task has the same text and deadline as the given pair.
    #[must_use]
    pub fn is_duplicate_of(&self, text: &str, date_due: Date) -> bool {
        self.text == text && self.date_due == date_due
    }
}

/// Persisted shape of a [`Task`] as read back from storage.
///
/// Records written before ids existed carry none.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Identifier, if the record has one.
    #[serde(default)]
    pub id: Option<TaskId>,
    /// Description.
    pub text: String,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Creation or last-edit instant.
    #[serde(with = "rfc3339")]
    pub date_time: OffsetDateTime,
    /// Deadline.
    #[serde(with = "due_date")]
    pub date_due: Date,
}

impl TaskRecord {
    /// Convert into a task, assigning a fresh id when the record has none.
    #[must_use]
    pub fn into_task(self) -> Task {
        Task {
            id: self.id.unwrap_or_else(TaskId::new),
            text: self.text,
            completed: self.completed,
            date_time: self.date_time,
            date_due: self.date_due,
        }
    }
}

/// Sort ascending by due date.
///
/// The sort is stable, so tasks sharing a deadline keep their relative order.
pub fn sort_by_due(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| task.date_due);
}

/// Returns true when `tasks` is ordered ascending by due date.
#[must_use]
pub fn is_sorted_by_due(tasks: &[Task]) -> bool {
    tasks.windows(2).all(|pair| pair[0].date_due <= pair[1].date_due)
}

mod rfc3339 {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    pub(super) fn serialize<S>(value: &OffsetDateTime, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = value.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
        s.serialize_str(&text)
    }

    pub(super) fn deserialize<'de, D>(d: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        OffsetDateTime::parse(raw.trim(), &Rfc3339).map_err(serde::de::Error::custom)
    }
}

mod due_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    use crate::locale::{format_due_date, parse_due_date};

    pub(super) fn serialize<S>(value: &Date, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&format_due_date(*value))
    }

    pub(super) fn deserialize<'de, D>(d: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        parse_due_date(&raw).map_err(serde::de::Error::custom)
    }
}
