use serde::{Serialize, Serializer};
use time::Date;

use crate::color::Rgb;
use crate::locale::format_due_date;
use crate::task::Task;
use crate::urgency::Urgency;

/// Event shape consumed by calendar widgets: `{title, start, color}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    /// Task text.
    pub title: String,
    /// Due date of the task.
    #[serde(serialize_with = "serialize_start")]
    pub start: Date,
    /// Green when completed, red when overdue, amber otherwise.
    pub color: Rgb,
}

impl CalendarEvent {
    /// Project a task onto the calendar as of `today`.
    #[must_use]
    pub fn from_task(task: &Task, today: Date) -> Self {
        let color = if task.completed {
            Rgb::COMPLETED
        } else if task.urgency(today) == Urgency::Due {
            Rgb::OVERDUE
        } else {
            Rgb::AMBER
        };
        Self {
            title: task.text.clone(),
            start: task.date_due,
            color,
        }
    }
}

/// One event per task, in collection order.
#[must_use]
pub fn calendar_events(tasks: &[Task], today: Date) -> Vec<CalendarEvent> {
    tasks
        .iter()
        .map(|task| CalendarEvent::from_task(task, today))
        .collect()
}

fn serialize_start<S>(start: &Date, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&format_due_date(*start))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use serde_json::json;
    use time::macros::{date, datetime};

    #[test]
    fn color_prefers_completion_over_overdue() {
        let today = date!(2025 - 01 - 12);
        let now = datetime!(2025-01-01 09:00 UTC);

        let mut done_late = Task::new("done", date!(2025 - 01 - 02), now);
        done_late.completed = true;
        let late = Task::new("late", date!(2025 - 01 - 02), now);
        let soon = Task::new("soon", date!(2025 - 01 - 12), now);
        let later = Task::new("later", date!(2025 - 02 - 12), now);

        let colors: Vec<_> = calendar_events(&[done_late, late, soon, later], today)
            .into_iter()
            .map(|ev| ev.color)
            .collect();
        assert_eq!(colors, vec![Rgb::COMPLETED, Rgb::OVERDUE, Rgb::AMBER, Rgb::AMBER]);
    }

    #[test]
    fn serializes_widget_shape() {
        let task = Task::new("Rapat", date!(2025 - 01 - 20), datetime!(2025-01-12 09:00 UTC));
        let event = CalendarEvent::from_task(&task, date!(2025 - 01 - 12));
        let value = serde_json::to_value(event).expect("must serialize");
        assert_eq!(
            value,
            json!({"title": "Rapat", "start": "2025-01-20", "color": "#ffc107"})
        );
    }
}
