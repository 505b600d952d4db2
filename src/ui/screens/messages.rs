//! Secure messages: the conversation with the care team and a compose box.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    Frame,
};

use super::render_lines;
use crate::app::App;
use crate::models::ChatMessage;
use crate::state::ScreenState;
use crate::ui::components::{render_status_indicator, resource_status};
use crate::ui::theme::Theme;
use crate::widgets::InputBoxWidget;

pub const CARE_TEAM: &str = "Dr. Sarah Mohamed";

fn bubble(message: &ChatMessage, theme: &Theme) -> Vec<Line<'static>> {
    let (align, style) = if message.is_from_patient() {
        (Alignment::Right, theme.accent())
    } else {
        (Alignment::Left, theme.text())
    };
    vec![
        Line::from(Span::styled(message.text.clone(), style)).alignment(align),
        Line::from(Span::styled(message.timestamp.clone(), theme.dim())).alignment(align),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(ScreenState::Messages(state)) = app.screen.as_ref() else {
        return;
    };
    let theme = Theme::for_view(&app.view);
    let [chat_area, compose_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(area);

    frame.render_widget(
        InputBoxWidget::new(&state.compose, "Message", true).style(theme.input()),
        compose_area,
    );

    if !state.is_seeded() {
        if let Some(status) = resource_status(
            &state.chat,
            "Loading messages...",
            "No messages found.",
            app.tick_count,
        ) {
            render_lines(frame, chat_area, render_status_indicator(&status, &theme), 0, &theme);
            return;
        }
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(CARE_TEAM, theme.heading()),
            Span::styled("  ● online", theme.success()),
        ]),
        Line::default(),
    ];
    for message in &state.messages {
        lines.extend(bubble(message, &theme));
        theme.push_gap(&mut lines);
    }
    // newest at the bottom
    let focus = lines.len().saturating_sub(1);
    render_lines(frame, chat_area, lines, focus, &theme);
}
