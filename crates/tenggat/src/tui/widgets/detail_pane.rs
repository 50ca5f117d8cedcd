use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use tenggat_app::{ViewMode, details_line};
use tenggat_core::{Clock, Urgency, format_clock};
use tenggat_store::KeyValueStore;

use super::super::constants::APP_TITLE;
use super::super::view::Ui;
use super::util::background_style;

const INSTRUCTIONS: &str =
    "a:tambah  e:edit  d:hapus  spasi:selesai  f:filter tanggal  b:kembali  r:muat ulang  q:keluar";

impl<S: KeyValueStore, C: Clock> Ui<S, C> {
    pub(in crate::tui) fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(14), Constraint::Min(10), Constraint::Length(10)])
            .split(inner);

        let title = Paragraph::new(Span::styled(APP_TITLE, Style::default().add_modifier(Modifier::BOLD)));
        f.render_widget(title, columns[0]);

        let progress = self.board.progress();
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(progress.ratio())
            .label(format!("Selesai {progress}"));
        f.render_widget(gauge, columns[1]);

        // Read fresh on every draw.
        let clock = Paragraph::new(format!(" {}", format_clock(self.board.clock().now())));
        f.render_widget(clock, columns[2]);
    }

    pub(in crate::tui) fn draw_task_details(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default().title("Detail").borders(Borders::ALL);
        let lines = match (self.board.mode(), self.selected_task()) {
            (ViewMode::ByDate(_), _) => vec![Line::from(Span::styled(
                "Tampilan per tanggal hanya untuk dibaca.",
                Style::default().fg(Color::DarkGray),
            ))],
            (ViewMode::All, Some(task)) => {
                let urgency = task.urgency(self.today());
                let label = match urgency {
                    Urgency::Due => "Terlambat",
                    Urgency::Today => "Hari ini",
                    Urgency::Warning => "Segera",
                    Urgency::Normal => "Normal",
                };
                let status = if task.completed { "selesai" } else { "belum selesai" };
                vec![
                    Line::from(vec![
                        Span::styled(label, background_style(urgency.background())),
                        Span::raw(format!("  {status}  ")),
                        Span::styled(task.id.to_string(), Style::default().fg(Color::DarkGray)),
                    ]),
                    Line::from(details_line(task)),
                ]
            }
            (ViewMode::All, None) => vec![Line::from("Tidak ada tugas yang dipilih.")],
        };
        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    pub(in crate::tui) fn draw_status(&self, f: &mut Frame<'_>, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(INSTRUCTIONS, Style::default().fg(Color::DarkGray)))];
        if let Some(message) = &self.message {
            lines.push(Line::from(Span::styled(message.text.clone(), message.style())));
        }
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Status").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}
