use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tenggat_app::ViewMode;
use tenggat_core::Clock;
use tenggat_store::KeyValueStore;

use super::super::date_picker::DatePicker;
use super::super::dialog::{Dialog, TaskForm};
use super::super::view::Ui;

const READ_ONLY_MESSAGE: &str = "Tampilan per tanggal hanya untuk dibaca. Tekan b untuk kembali.";
const NO_SELECTION_MESSAGE: &str = "Tidak ada tugas yang dipilih.";

impl<S: KeyValueStore, C: Clock> Ui<S, C> {
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.dialog.is_some() {
            self.handle_dialog_key(key);
        } else {
            self.handle_task_list_key(key);
        }
    }

    fn handle_task_list_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Char('a') => {
                self.dialog = Some(Dialog::AddTask(TaskForm::blank(self.today())));
            }
            KeyCode::Char('e') => self.open_edit(),
            KeyCode::Char('d') => self.open_delete(),
            KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('f') => {
                self.dialog = Some(Dialog::PickDate(DatePicker::new(self.calendar_focus())));
            }
            KeyCode::Char('b') | KeyCode::Esc => {
                if matches!(self.board.mode(), ViewMode::ByDate(_)) {
                    self.board.show_all();
                    self.clamp_selection();
                }
            }
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
    }

    fn open_edit(&mut self) {
        if self.blocked_by_read_only_view() {
            return;
        }
        match self.selected_task() {
            Some(task) => {
                let dialog = Dialog::EditTask {
                    task: task.id,
                    form: TaskForm::for_task(task),
                };
                self.dialog = Some(dialog);
            }
            None => self.error(NO_SELECTION_MESSAGE),
        }
    }

    fn open_delete(&mut self) {
        if self.blocked_by_read_only_view() {
            return;
        }
        match self.selected_task() {
            Some(task) => {
                let dialog = Dialog::ConfirmDelete {
                    task: task.id,
                    text: task.text.clone(),
                };
                self.dialog = Some(dialog);
            }
            None => self.error(NO_SELECTION_MESSAGE),
        }
    }

    fn toggle_selected(&mut self) {
        if self.blocked_by_read_only_view() {
            return;
        }
        let Some(id) = self.selected_task_id() else {
            self.error(NO_SELECTION_MESSAGE);
            return;
        };
        match self.board.toggle_completed(id) {
            Ok(true) => self.info("Tugas ditandai selesai"),
            Ok(false) => self.info("Tugas dibuka kembali"),
            Err(err) => self.error(err.to_string()),
        }
        self.select_task(id);
    }

    fn reload(&mut self) {
        match self.board.reload() {
            Ok(()) => {
                self.clamp_selection();
                self.info("Tugas dimuat ulang");
            }
            Err(err) => self.error(err.to_string()),
        }
    }

    fn blocked_by_read_only_view(&mut self) -> bool {
        let read_only = matches!(self.board.mode(), ViewMode::ByDate(_));
        if read_only {
            self.error(READ_ONLY_MESSAGE);
        }
        read_only
    }
}
