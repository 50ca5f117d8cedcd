use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tenggat_core::{Task, TaskId, format_due_date, parse_due_date};
use time::{Date, Duration};
use unicode_segmentation::UnicodeSegmentation;

use super::date_picker::DatePicker;

/// Modal surface capturing keys until confirmed or dismissed.
#[derive(Debug, Clone)]
pub(super) enum Dialog {
    AddTask(TaskForm),
    EditTask { task: TaskId, form: TaskForm },
    ConfirmDelete { task: TaskId, text: String },
    PickDate(DatePicker),
}

/// Single-line text field with a grapheme-aware cursor.
#[derive(Debug, Clone, Default)]
pub(super) struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub(super) fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
            cursor: value.len(),
        }
    }

    pub(super) fn value(&self) -> &str {
        &self.value
    }

    pub(super) fn set(&mut self, value: String) {
        self.cursor = value.len();
        self.value = value;
    }

    pub(super) fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub(super) fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub(super) fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub(super) fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub(super) fn with_caret(&self) -> String {
        let mut text = self.value.clone();
        text.insert(self.cursor, '▌');
        text
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value
            .get(..self.cursor)?
            .grapheme_indices(true)
            .next_back()
            .map(|(index, _)| index)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value
            .get(self.cursor..)?
            .graphemes(true)
            .next()
            .map(|grapheme| self.cursor + grapheme.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FormField {
    Text,
    Due,
}

/// What a key did to a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FormEvent {
    Continue,
    Submit,
    Cancel,
}

/// Text and due-date fields shared by the add and edit dialogs.
#[derive(Debug, Clone)]
pub(super) struct TaskForm {
    pub(super) text: TextInput,
    pub(super) due: TextInput,
    pub(super) field: FormField,
}

impl TaskForm {
    /// Empty text, due date prefilled with the day after `today`, the earliest
    /// date an add accepts outside midnight.
    pub(super) fn blank(today: Date) -> Self {
        let tomorrow = today.next_day().unwrap_or(today);
        Self {
            text: TextInput::default(),
            due: TextInput::new(&format_due_date(tomorrow)),
            field: FormField::Text,
        }
    }

    pub(super) fn for_task(task: &Task) -> Self {
        Self {
            text: TextInput::new(&task.text),
            due: TextInput::new(&format_due_date(task.date_due)),
            field: FormField::Text,
        }
    }

    pub(super) const fn next_field(&mut self) {
        self.field = match self.field {
            FormField::Text => FormField::Due,
            FormField::Due => FormField::Text,
        };
    }

    const fn active_mut(&mut self) -> &mut TextInput {
        match self.field {
            FormField::Text => &mut self.text,
            FormField::Due => &mut self.due,
        }
    }

    /// Step the due date by `days`, starting from `today` when the field does not parse.
    pub(super) fn step_due(&mut self, days: i64, today: Date) {
        let base = parse_due_date(self.due.value()).unwrap_or(today);
        if let Some(date) = base.checked_add(Duration::days(days)) {
            self.due.set(format_due_date(date));
        }
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent, today: Date) -> FormEvent {
        match key.code {
            KeyCode::Esc => return FormEvent::Cancel,
            KeyCode::Enter => return FormEvent::Submit,
            KeyCode::Tab | KeyCode::BackTab => self.next_field(),
            KeyCode::Up if self.field == FormField::Due => self.step_due(-1, today),
            KeyCode::Down if self.field == FormField::Due => self.step_due(1, today),
            KeyCode::Left => self.active_mut().move_left(),
            KeyCode::Right => self.active_mut().move_right(),
            KeyCode::Backspace => self.active_mut().backspace(),
            KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.active_mut().insert_char(ch);
            }
            _ => {}
        }
        FormEvent::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn backspace_removes_whole_graphemes() {
        let mut input = TextInput::new("cafe\u{301}");
        input.backspace();
        assert_eq!(input.value(), "caf");
        input.move_left();
        input.insert_char('X');
        assert_eq!(input.value(), "caXf");
        assert_eq!(input.with_caret(), "caX▌f");
    }

    #[test]
    fn cursor_stays_within_bounds() {
        let mut input = TextInput::new("ab");
        input.move_right();
        input.move_left();
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.with_caret(), "▌ab");
    }

    #[test]
    fn typing_targets_the_active_field() {
        let today = date!(2025 - 01 - 12);
        let mut form = TaskForm::blank(today);
        for ch in "Beli".chars() {
            assert_eq!(form.handle_key(press(KeyCode::Char(ch)), today), FormEvent::Continue);
        }
        form.handle_key(press(KeyCode::Tab), today);
        form.handle_key(press(KeyCode::Down), today);
        form.handle_key(press(KeyCode::Down), today);

        assert_eq!(form.text.value(), "Beli");
        assert_eq!(form.due.value(), "2025-01-15");
        assert_eq!(form.handle_key(press(KeyCode::Enter), today), FormEvent::Submit);
        assert_eq!(form.handle_key(press(KeyCode::Esc), today), FormEvent::Cancel);
    }

    #[test]
    fn stepping_an_unparsable_date_restarts_from_today() {
        let today = date!(2025 - 01 - 12);
        let mut form = TaskForm::blank(today);
        form.due.set("kemarin".to_owned());
        form.step_due(-1, today);
        assert_eq!(form.due.value(), "2025-01-11");
    }

    #[test]
    fn control_chords_are_not_typed() {
        let today = date!(2025 - 01 - 12);
        let mut form = TaskForm::blank(today);
        form.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), today);
        assert_eq!(form.text.value(), "");
    }
}
