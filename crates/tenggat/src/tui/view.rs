use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
};
use tenggat_app::{EventList, TaskBoard, TuiConfig, ViewMode};
use tenggat_core::{Clock, Task, TaskId};
use tenggat_store::KeyValueStore;
use time::Date;

use super::constants::{CALENDAR_WIDTH, DETAILS_HEIGHT, HEADER_HEIGHT, STATUS_HEIGHT};
use super::dialog::Dialog;

pub(super) struct Ui<S, C> {
    pub(super) board: TaskBoard<S, C, EventList>,
    /// Index into the full list; ignored in the by-date view.
    pub(super) selected: usize,
    pub(super) dialog: Option<Dialog>,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
    pub(super) show_calendar: bool,
    message_ttl: Duration,
}

impl<S: KeyValueStore, C: Clock> Ui<S, C> {
    pub(super) const MAIN_MIN_HEIGHT: u16 = 5;

    pub(super) const fn new(board: TaskBoard<S, C, EventList>, config: &TuiConfig) -> Self {
        Self {
            board,
            selected: 0,
            dialog: None,
            message: None,
            should_quit: false,
            show_calendar: config.show_calendar,
            message_ttl: Duration::from_secs(config.message_ttl_secs),
        }
    }

    pub(super) fn today(&self) -> Date {
        self.board.clock().today()
    }

    pub(super) fn selected_task(&self) -> Option<&Task> {
        match self.board.mode() {
            ViewMode::All => self.board.tasks().get(self.selected),
            ViewMode::ByDate(_) => None,
        }
    }

    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|task| task.id)
    }

    pub(super) fn select_next(&mut self) {
        let len = self.board.tasks().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub(super) const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection onto `id`, e.g. after an add re-sorted the list.
    pub(super) fn select_task(&mut self, id: TaskId) {
        if let Some(index) = self.board.tasks().iter().position(|task| task.id == id) {
            self.selected = index;
        }
        self.clamp_selection();
    }

    pub(super) fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.board.tasks().len().saturating_sub(1));
    }

    /// Date the month calendar centers on.
    pub(super) fn calendar_focus(&self) -> Date {
        if let Some(Dialog::PickDate(picker)) = &self.dialog {
            return picker.cursor();
        }
        match self.board.mode() {
            ViewMode::ByDate(date) => date,
            ViewMode::All => self
                .selected_task()
                .map_or_else(|| self.today(), |task| task.date_due),
        }
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(Self::MAIN_MIN_HEIGHT),
                Constraint::Length(DETAILS_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(f.area());

        self.draw_header(f, chunks[0]);
        self.draw_main(f, chunks[1]);
        self.draw_task_details(f, chunks[2]);
        self.draw_status(f, chunks[3]);

        match &self.dialog {
            Some(Dialog::AddTask(form)) => Self::draw_form_popup(f, "Tambah Tugas", form),
            Some(Dialog::EditTask { form, .. }) => Self::draw_form_popup(f, "Edit Tugas", form),
            Some(Dialog::ConfirmDelete { text, .. }) => Self::draw_confirm_popup(f, text),
            Some(Dialog::PickDate(picker)) => self.draw_date_picker_popup(f, picker),
            None => {}
        }
    }

    fn draw_main(&self, f: &mut Frame<'_>, area: Rect) {
        if !self.show_calendar {
            self.draw_task_list(f, area);
            return;
        }
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(CALENDAR_WIDTH)])
            .split(area);
        self.draw_task_list(f, columns[0]);
        self.draw_calendar(f, columns[1]);
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
    }

    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(self.message_ttl)
        {
            self.message = None;
        }
    }
}

pub(super) struct Message {
    pub(super) text: String,
    pub(super) level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MessageLevel {
    Info,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
            created_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
            created_at: Instant::now(),
        }
    }

    pub(super) fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
