//! Shared constants for the TUI to keep layout and timing in sync.

/// Interval in milliseconds between UI ticks/redraws.
pub const TUI_TICK_RATE_MS: u64 = 200;
/// Highlight symbol shown beside selected list entries.
pub const TASK_LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Title shown in the header.
pub const APP_TITLE: &str = "To-Do List";
/// Height of the header row (title, progress, clock).
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the selected-task details pane.
pub const DETAILS_HEIGHT: u16 = 4;
/// Height of the status footer (instructions and message).
pub const STATUS_HEIGHT: u16 = 4;
/// Width of the month calendar column.
pub const CALENDAR_WIDTH: u16 = 26;
/// Width percentage for form and picker popups before clamping.
pub const POPUP_WIDTH_PERCENT: u16 = 60;
/// Minimum width for popups.
pub const POPUP_MIN_WIDTH: u16 = 36;
/// Height of the add/edit form popup.
pub const FORM_POPUP_HEIGHT: u16 = 9;
/// Height of the delete confirmation popup.
pub const CONFIRM_POPUP_HEIGHT: u16 = 6;
/// Height of the date picker popup.
pub const PICKER_POPUP_HEIGHT: u16 = 14;
/// Task text longer than this is truncated in the list.
pub const TASK_TEXT_MAX_GRAPHEMES: usize = 60;
