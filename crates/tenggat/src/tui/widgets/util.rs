use std::borrow::Cow;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
};
use tenggat_core::Rgb;
use unicode_segmentation::UnicodeSegmentation;

use super::super::constants::{POPUP_MIN_WIDTH, POPUP_WIDTH_PERCENT};

pub(super) fn truncate_with_ellipsis(input: &str, max_graphemes: usize) -> Cow<'_, str> {
    const ELLIPSIS: &str = "...";
    const ELLIPSIS_GRAPHEMES: usize = 3;

    if max_graphemes == 0 {
        return Cow::Owned(String::new());
    }

    let grapheme_count = input.graphemes(true).count();
    if grapheme_count <= max_graphemes {
        return Cow::Borrowed(input);
    }

    if max_graphemes <= ELLIPSIS_GRAPHEMES {
        return Cow::Owned(input.graphemes(true).take(max_graphemes).collect());
    }

    let mut truncated: String = input.graphemes(true).take(max_graphemes - ELLIPSIS_GRAPHEMES).collect();
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}

pub(super) const fn rgb_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Row style for an urgency background; dark text on amber, light text elsewhere.
pub(super) fn background_style(background: Option<Rgb>) -> Style {
    match background {
        Some(rgb) if rgb == Rgb::AMBER => Style::default().bg(rgb_color(rgb)).fg(Color::Black),
        Some(rgb) => Style::default().bg(rgb_color(rgb)).fg(Color::White),
        None => Style::default(),
    }
}

/// Horizontally centered popup of fixed `height`, clamped to `area`.
pub(super) fn centered_popup(area: Rect, height: u16) -> Rect {
    let scaled = u32::from(area.width) * u32::from(POPUP_WIDTH_PERCENT) / 100;
    let width = u16::try_from(scaled)
        .unwrap_or(u16::MAX)
        .max(POPUP_MIN_WIDTH)
        .min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
