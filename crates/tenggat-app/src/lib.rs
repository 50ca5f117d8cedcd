//! Application layer for tenggat.
//!
//! Owns the task collection through [`TaskBoard`], renders the list and by-date
//! views, mirrors tasks onto a calendar, and loads user configuration. Shared
//! by the CLI and the terminal UI.

pub mod board;
pub mod calendar;
/// User configuration.
pub mod config;
/// Board error types.
pub mod error;
pub mod view;

// Re-exports for convenience
pub use board::{BoardView, Decision, EditOutcome, TaskBoard, ViewMode};
pub use calendar::{CalendarSink, EventList, sync_calendar};
pub use config::{AppConfig, StorageConfig, TuiConfig};
pub use error::{BoardError, BoardResult};
pub use view::{
    BACK_LABEL, DELETE_PROMPT, FilteredRow, FilteredView, Progress, RowAction, SCROLL_THRESHOLD, TaskListView, TaskRow,
    details_line, render_filtered, render_list,
};
