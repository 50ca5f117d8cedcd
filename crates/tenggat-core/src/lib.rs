//! Domain types for tenggat: tasks, due-date urgency, and calendar projection.

/// Calendar event projection.
pub mod calendar;
/// Clock abstraction.
pub mod clock;
/// Color hints.
pub mod color;
/// Identifier types.
pub mod id;
pub mod locale;
/// Task records and ordering.
pub mod task;
/// Due-date classification.
pub mod urgency;

pub use calendar::{CalendarEvent, calendar_events};
pub use clock::{Clock, FixedClock, SystemClock};
pub use color::Rgb;
pub use id::TaskId;
pub use locale::{DueDateError, format_clock, format_due_date, format_long_date, parse_due_date};
pub use task::{Task, TaskRecord, is_sorted_by_due, sort_by_due};
pub use urgency::{Urgency, WARNING_WINDOW_DAYS};
