//! One renderer per screen, each with the [`Renderer`](crate::screens::Renderer)
//! signature so the screen registry can dispatch to it.
//!
//! A renderer draws nothing when the mounted state belongs to another
//! screen, which only happens for a registry fallback.

pub mod appointments;
pub mod dashboard;
pub mod lab_results;
pub mod messages;
pub mod prescriptions;
pub mod profile;
pub mod records;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
    Frame,
};

use super::theme::Theme;

/// Block with side padding used by every screen body.
pub(crate) fn body_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .padding(Padding::horizontal(1))
        .style(theme.base())
}

/// Bold section heading.
pub(crate) fn section(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(title.to_string(), theme.heading()))
}

/// `▶` for the selected row, padding otherwise.
pub(crate) fn marker(selected: bool, theme: &Theme) -> Span<'static> {
    if selected {
        Span::styled("▶ ", theme.accent())
    } else {
        Span::raw("  ")
    }
}

/// First line to show so that `focus` stays inside `height` rows.
pub(crate) fn scroll_offset(focus: usize, height: u16) -> usize {
    let height = height as usize;
    if height == 0 || focus < height {
        0
    } else {
        focus + 1 - height
    }
}

/// Draw `lines` inside the body block, scrolled to keep line `focus` visible.
pub(crate) fn render_lines(
    frame: &mut Frame,
    area: Rect,
    lines: Vec<Line<'static>>,
    focus: usize,
    theme: &Theme,
) {
    let block = body_block(theme);
    let inner = block.inner(area);
    let offset = scroll_offset(focus, inner.height).min(u16::MAX as usize) as u16;
    frame.render_widget(Paragraph::new(lines).block(block).scroll((offset, 0)), area);
}
