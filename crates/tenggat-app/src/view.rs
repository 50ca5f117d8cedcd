//! Render model for the task list and the by-date view.

use std::fmt;

use serde::{Serialize, Serializer};
use tenggat_core::{Rgb, Task, TaskId, Urgency, format_due_date, format_long_date};
use time::Date;

/// Past this many rows the list becomes scrollable.
pub const SCROLL_THRESHOLD: usize = 5;
/// Label of the action leaving the by-date view.
pub const BACK_LABEL: &str = "Kembali ke Daftar Tugas";
/// Question asked before a task is deleted.
pub const DELETE_PROMPT: &str = "tugas sudah selesai?apakah anda akan menghapusnya?";

/// Completed/total counter over the full collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Tasks marked completed.
    pub completed: usize,
    /// All tasks.
    pub total: usize,
}

impl Progress {
    /// Count over `tasks`.
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            completed: tasks.iter().filter(|task| task.completed).count(),
            total: tasks.len(),
        }
    }

    /// Fraction in `0.0..=1.0`; zero for an empty collection.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}

/// Action a row offers, bound to the task id rather than its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "task", rename_all = "snake_case")]
pub enum RowAction {
    /// Open the edit dialog.
    Edit(TaskId),
    /// Ask for confirmation, then delete.
    Delete(TaskId),
    /// Flip the completed flag.
    ToggleCompleted(TaskId),
}

/// One rendered entry of the full list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    /// Task identifier.
    pub id: TaskId,
    /// Raw task text.
    pub text: String,
    /// Text with the urgency annotation appended.
    pub display_text: String,
    /// `DEADLINE: ...  CREATED: ...` line.
    pub details: String,
    /// Urgency as of render time.
    pub urgency: Urgency,
    /// Background hint; `None` for tasks outside the warning window.
    pub background: Option<Rgb>,
    /// Completion flag.
    pub completed: bool,
    /// Edit, delete and toggle affordances.
    pub actions: [RowAction; 3],
}

impl TaskRow {
    fn from_task(task: &Task, today: Date) -> Self {
        let urgency = task.urgency(today);
        let display_text = urgency.suffix().map_or_else(
            || task.text.clone(),
            |suffix| format!("{} {suffix}", task.text),
        );
        Self {
            id: task.id,
            text: task.text.clone(),
            display_text,
            details: details_line(task),
            urgency,
            background: urgency.background(),
            completed: task.completed,
            actions: [
                RowAction::Edit(task.id),
                RowAction::Delete(task.id),
                RowAction::ToggleCompleted(task.id),
            ],
        }
    }
}

/// Full list, sorted by due date, with the progress counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListView {
    /// Rows in due-date order.
    pub rows: Vec<TaskRow>,
    /// Counter over the same collection.
    pub progress: Progress,
}

impl TaskListView {
    /// True once the list holds more rows than [`SCROLL_THRESHOLD`].
    #[must_use]
    pub const fn scrolls(&self) -> bool {
        self.rows.len() > SCROLL_THRESHOLD
    }
}

/// Entry of the by-date view. Read-only, so no annotations or actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredRow {
    /// Task identifier.
    pub id: TaskId,
    /// Raw task text.
    pub text: String,
    /// `DEADLINE: ...  CREATED: ...` line.
    pub details: String,
}

/// Tasks due on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredView {
    /// The selected date.
    #[serde(serialize_with = "serialize_date")]
    pub date: Date,
    /// Matching tasks in collection order.
    pub rows: Vec<FilteredRow>,
    /// Message shown instead of rows when nothing matches.
    pub placeholder: Option<String>,
    /// Label of the back action.
    pub back_label: &'static str,
}

/// Render the full list as of `today`.
///
/// Rows are ordered by due date whatever the order of `tasks`.
#[must_use]
pub fn render_list(tasks: &[Task], today: Date) -> TaskListView {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by_key(|task| task.date_due);
    TaskListView {
        rows: ordered
            .into_iter()
            .map(|task| TaskRow::from_task(task, today))
            .collect(),
        progress: Progress::of(tasks),
    }
}

/// Render the tasks due exactly on `date`.
#[must_use]
pub fn render_filtered(tasks: &[Task], date: Date) -> FilteredView {
    let rows: Vec<FilteredRow> = tasks
        .iter()
        .filter(|task| task.date_due == date)
        .map(|task| FilteredRow {
            id: task.id,
            text: task.text.clone(),
            details: details_line(task),
        })
        .collect();
    let placeholder = rows
        .is_empty()
        .then(|| format!("No tasks due on {}", format_long_date(date)));
    FilteredView {
        date,
        rows,
        placeholder,
        back_label: BACK_LABEL,
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_date<S: Serializer>(date: &Date, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_due_date(*date))
}

/// Deadline and creation dates in long form.
#[must_use]
pub fn details_line(task: &Task) -> String {
    format!(
        "DEADLINE: {}  CREATED: {}",
        format_long_date(task.date_due),
        format_long_date(task.date_time.date())
    )
}
