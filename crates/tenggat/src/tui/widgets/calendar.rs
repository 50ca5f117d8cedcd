use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tenggat_app::EventList;
use tenggat_core::locale::month_name;
use tenggat_core::{Clock, Rgb};
use tenggat_store::KeyValueStore;
use time::Date;
use time::util::days_in_year_month;

use super::super::view::Ui;
use super::util::rgb_color;

const WEEKDAY_HEADINGS: [&str; 7] = ["Sn", "Sl", "Rb", "Km", "Jm", "Sb", "Mg"];

impl<S: KeyValueStore, C: Clock> Ui<S, C> {
    pub(in crate::tui) fn draw_calendar(&self, f: &mut Frame<'_>, area: Rect) {
        let focus = self.calendar_focus();
        let lines = month_lines(focus, self.today(), Some(focus), self.board.calendar());
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .block(Block::default().title("Kalender").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

/// Month grid containing `month_of`, weeks starting on Monday.
///
/// Days with events take the most pressing event color; `today` is
/// underlined and `highlight` is shown reversed.
pub(super) fn month_lines(
    month_of: Date,
    today: Date,
    highlight: Option<Date>,
    events: &EventList,
) -> Vec<Line<'static>> {
    let year = month_of.year();
    let month = month_of.month();
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {year}", month_name(month)),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(WEEKDAY_HEADINGS.join(" "), Style::default().fg(Color::Gray))),
    ];

    let Ok(first) = Date::from_calendar_date(year, month, 1) else {
        return lines;
    };
    let offset = usize::from(first.weekday().number_days_from_monday());
    let days = usize::from(days_in_year_month(year, month));

    let mut spans = vec![Span::raw("   "); offset];
    for day in 1..=days {
        let date = u8::try_from(day)
            .ok()
            .and_then(|day| Date::from_calendar_date(year, month, day).ok());
        let Some(date) = date else { continue };

        let mut style = day_color(events, date).map_or_else(Style::default, |rgb| {
            Style::default().fg(Color::Black).bg(rgb_color(rgb))
        });
        if date == today {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        if highlight == Some(date) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("{day:>2}"), style));
        spans.push(Span::raw(" "));

        if (offset + day) % 7 == 0 {
            lines.push(Line::from(std::mem::take(&mut spans)));
        }
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

fn day_color(events: &EventList, date: Date) -> Option<Rgb> {
    const PRIORITY: [Rgb; 3] = [Rgb::OVERDUE, Rgb::AMBER, Rgb::COMPLETED];
    PRIORITY
        .into_iter()
        .find(|color| events.on(date).any(|event| event.color == *color))
}
