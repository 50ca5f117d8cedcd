use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use tenggat_app::{BoardView, FilteredView, TaskListView};
use tenggat_core::{Clock, format_long_date};
use tenggat_store::KeyValueStore;

use super::super::constants::{TASK_LIST_HIGHLIGHT_SYMBOL, TASK_TEXT_MAX_GRAPHEMES};
use super::super::view::Ui;
use super::util::{background_style, truncate_with_ellipsis};

impl<S: KeyValueStore, C: Clock> Ui<S, C> {
    pub(in crate::tui) fn draw_task_list(&self, f: &mut Frame<'_>, area: Rect) {
        match self.board.current_view() {
            BoardView::All(view) => self.draw_full_list(f, area, &view),
            BoardView::ByDate(view) => Self::draw_filtered_list(f, area, &view),
        }
    }

    fn draw_full_list(&self, f: &mut Frame<'_>, area: Rect, view: &TaskListView) {
        let items: Vec<ListItem<'_>> = if view.rows.is_empty() {
            vec![ListItem::new(Line::from("Belum ada tugas"))]
        } else {
            view.rows
                .iter()
                .map(|row| {
                    let marker = if row.completed { "[x] " } else { "[ ] " };
                    let mut title_style = background_style(row.background).add_modifier(Modifier::BOLD);
                    if row.completed {
                        title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
                    }
                    let title = Span::styled(
                        truncate_with_ellipsis(&row.display_text, TASK_TEXT_MAX_GRAPHEMES).into_owned(),
                        title_style,
                    );
                    let details = Span::styled(row.details.clone(), Style::default().fg(Color::DarkGray));
                    ListItem::new(vec![
                        Line::from(vec![Span::raw(marker), title]),
                        Line::from(vec![Span::raw("    "), details]),
                    ])
                })
                .collect()
        };

        let title = if view.scrolls() {
            format!("Daftar Tugas ({}, j/k untuk gulir)", view.rows.len())
        } else {
            format!("Daftar Tugas ({})", view.rows.len())
        };
        let list = List::new(items)
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(TASK_LIST_HIGHLIGHT_SYMBOL);
        let mut state = ListState::default();
        if !view.rows.is_empty() {
            state.select(Some(self.selected.min(view.rows.len() - 1)));
        }
        f.render_stateful_widget(list, area, &mut state);
    }

    fn draw_filtered_list(f: &mut Frame<'_>, area: Rect, view: &FilteredView) {
        let mut items = vec![ListItem::new(Line::from(Span::styled(
            format!("← {} (b)", view.back_label),
            Style::default().fg(Color::Cyan),
        )))];
        if let Some(placeholder) = &view.placeholder {
            items.push(ListItem::new(Line::from(Span::styled(
                placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ))));
        }
        for row in &view.rows {
            items.push(ListItem::new(vec![
                Line::from(Span::styled(
                    truncate_with_ellipsis(&row.text, TASK_TEXT_MAX_GRAPHEMES).into_owned(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(row.details.clone(), Style::default().fg(Color::DarkGray))),
            ]));
        }

        let title = format!("Jatuh Tempo {}", format_long_date(view.date));
        let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(list, area);
    }
}
