use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tenggat_app::DELETE_PROMPT;
use tenggat_core::Clock;
use tenggat_store::KeyValueStore;

use super::super::constants::{CONFIRM_POPUP_HEIGHT, FORM_POPUP_HEIGHT, PICKER_POPUP_HEIGHT};
use super::super::date_picker::DatePicker;
use super::super::dialog::{FormField, TaskForm, TextInput};
use super::super::view::Ui;
use super::calendar::month_lines;
use super::util::centered_popup;

impl<S: KeyValueStore, C: Clock> Ui<S, C> {
    pub(in crate::tui) fn draw_form_popup(f: &mut Frame<'_>, title: &str, form: &TaskForm) {
        let lines = vec![
            field_line("Tugas", &form.text, form.field == FormField::Text),
            Line::from(""),
            field_line("Tanggal", &form.due, form.field == FormField::Due),
            Line::from(""),
            hint_line("Enter simpan  Esc batal  Tab pindah kolom  ↑/↓ ubah tanggal"),
        ];
        render_popup(f, title, FORM_POPUP_HEIGHT, lines);
    }

    pub(in crate::tui) fn draw_confirm_popup(f: &mut Frame<'_>, text: &str) {
        let lines = vec![
            Line::from(DELETE_PROMPT),
            Line::from(Span::styled(text.to_owned(), Style::default().add_modifier(Modifier::BOLD))),
            hint_line("y/Enter: hapus  n/Esc: batal"),
        ];
        render_popup(f, "Hapus Tugas", CONFIRM_POPUP_HEIGHT, lines);
    }

    pub(in crate::tui) fn draw_date_picker_popup(&self, f: &mut Frame<'_>, picker: &DatePicker) {
        let mut lines = month_lines(picker.cursor(), self.today(), Some(picker.cursor()), self.board.calendar());
        lines.push(Line::from(Span::styled(
            picker.formatted(),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(hint_line("←/→ hari  ↑/↓ minggu  PgUp/PgDn bulan  t hari ini"));
        lines.push(hint_line("Enter pilih  Esc batal"));
        render_popup(f, "Pilih Tanggal", PICKER_POPUP_HEIGHT, lines);
    }
}

fn render_popup(f: &mut Frame<'_>, title: &str, height: u16, lines: Vec<Line<'_>>) {
    let area: Rect = centered_popup(f.area(), height);
    let block = Block::default()
        .title(title.to_owned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));
    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn field_line(label: &str, input: &TextInput, active: bool) -> Line<'static> {
    let (value, style) = if active {
        (input.with_caret(), Style::default().fg(Color::Yellow))
    } else {
        (input.value().to_owned(), Style::default())
    };
    Line::from(vec![Span::raw(format!("{label:<8}: ")), Span::styled(value, style)])
}

fn hint_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}
