use crossterm::event::{KeyCode, KeyEvent};
use tenggat_app::{BoardError, Decision, EditOutcome};
use tenggat_core::{Clock, TaskId};
use tenggat_store::KeyValueStore;

use super::super::date_picker::DatePicker;
use super::super::dialog::{Dialog, FormEvent, TaskForm};
use super::super::view::Ui;

impl<S: KeyValueStore, C: Clock> Ui<S, C> {
    /// Route a key to the open dialog; the dialog stays open only if its handler returns it.
    pub(in crate::tui) fn handle_dialog_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };
        self.dialog = match dialog {
            Dialog::AddTask(form) => self.handle_add_form_key(form, key),
            Dialog::EditTask { task, form } => self.handle_edit_form_key(task, form, key),
            Dialog::ConfirmDelete { task, text } => self.handle_confirm_key(task, text, key),
            Dialog::PickDate(picker) => self.handle_date_picker_key(picker, key),
        };
    }

    fn handle_add_form_key(&mut self, mut form: TaskForm, key: KeyEvent) -> Option<Dialog> {
        match form.handle_key(key, self.today()) {
            FormEvent::Continue => Some(Dialog::AddTask(form)),
            FormEvent::Cancel => None,
            FormEvent::Submit => match self.board.add(form.text.value(), form.due.value()) {
                Ok(id) => {
                    self.select_task(id);
                    self.info("Tugas ditambahkan");
                    None
                }
                Err(err) => self.keep_form_on_validation(err, Dialog::AddTask(form)),
            },
        }
    }

    fn handle_edit_form_key(&mut self, task: TaskId, mut form: TaskForm, key: KeyEvent) -> Option<Dialog> {
        let result = match form.handle_key(key, self.today()) {
            FormEvent::Continue => return Some(Dialog::EditTask { task, form }),
            FormEvent::Cancel => self.board.edit(task, None, None),
            FormEvent::Submit => self
                .board
                .edit(task, Some(form.text.value()), Some(form.due.value())),
        };
        match result {
            Ok(EditOutcome::Updated) => {
                self.select_task(task);
                self.info("Tugas diperbarui");
                None
            }
            Ok(EditOutcome::Aborted) => {
                self.info("Edit dibatalkan");
                None
            }
            Err(err) => self.keep_form_on_validation(err, Dialog::EditTask { task, form }),
        }
    }

    fn handle_confirm_key(&mut self, task: TaskId, text: String, key: KeyEvent) -> Option<Dialog> {
        let decision = match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Decision::Confirm,
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Decision::Decline,
            _ => return Some(Dialog::ConfirmDelete { task, text }),
        };
        match self.board.delete(task, decision) {
            Ok(true) => {
                self.clamp_selection();
                self.info(format!("Tugas dihapus: {text}"));
            }
            Ok(false) => self.info("Penghapusan dibatalkan"),
            Err(err) => self.error(err.to_string()),
        }
        None
    }

    fn handle_date_picker_key(&mut self, mut picker: DatePicker, key: KeyEvent) -> Option<Dialog> {
        match key.code {
            KeyCode::Esc => return None,
            KeyCode::Enter => {
                let result = picker.submit(|date| self.board.filter_by_date(date));
                if let Err(err) = result {
                    self.error(err.to_string());
                }
                return None;
            }
            KeyCode::Left | KeyCode::Char('h') => picker.shift_days(-1),
            KeyCode::Right | KeyCode::Char('l') => picker.shift_days(1),
            KeyCode::Up | KeyCode::Char('k') => picker.shift_days(-7),
            KeyCode::Down | KeyCode::Char('j') => picker.shift_days(7),
            KeyCode::PageUp => picker.shift_months(-1),
            KeyCode::PageDown => picker.shift_months(1),
            KeyCode::Char('t') => picker.jump_to(self.today()),
            _ => {}
        }
        Some(Dialog::PickDate(picker))
    }

    /// Validation failures keep the form open with its input; anything else closes it.
    fn keep_form_on_validation(&mut self, err: BoardError, dialog: Dialog) -> Option<Dialog> {
        let keep = err.is_validation();
        self.error(err.to_string());
        keep.then_some(dialog)
    }
}
