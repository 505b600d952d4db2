//! The sign-in surface, the only thing drawn while signed out.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::centered_rect;
use super::theme::Theme;
use crate::app::App;
use crate::state::{AuthField, AuthMode};
use crate::widgets::InputBoxWidget;

const CARD_WIDTH: u16 = 52;
const FIELD_HEIGHT: u16 = 3;

/// Demo hint under a login field.
fn field_hint(mode: AuthMode, field: AuthField) -> Option<&'static str> {
    match (mode, field) {
        (AuthMode::Login, AuthField::PatientId) => Some("use 'patient'"),
        (AuthMode::Login, AuthField::Password) => Some("use 'password123'"),
        _ => None,
    }
}

fn field_rows(mode: AuthMode, field: AuthField) -> u16 {
    FIELD_HEIGHT + u16::from(field_hint(mode, field).is_some())
}

pub fn render_auth(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.base()), area);

    let form = &app.auth_form;
    let mode = form.mode();
    let fields_height: u16 = form.fields().iter().map(|f| field_rows(mode, *f)).sum();
    // title + subtitle + gap, fields, error, gap + two hint rows, borders
    let card_height = 3 + fields_height + 1 + 3 + 2;
    let card = centered_rect(CARD_WIDTH, card_height, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border(false))
        .style(theme.base());
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let (title, subtitle) = match mode {
        AuthMode::Login => ("Welcome Back", "Sign in to your patient portal"),
        AuthMode::Signup => ("Create Account", "Register for the patient portal"),
    };

    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(form.fields().iter().map(|f| Constraint::Length(field_rows(mode, *f))));
    constraints.extend([Constraint::Length(1), Constraint::Length(3), Constraint::Min(0)]);
    let rows = Layout::vertical(constraints).split(inner);

    let heading = vec![
        Line::from(Span::styled(
            title,
            theme.accent().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme.dim())),
    ];
    frame.render_widget(Paragraph::new(heading).alignment(Alignment::Center), rows[0]);

    for (i, field) in form.fields().iter().enumerate() {
        let row = rows[i + 1];
        let input_area = Rect { height: FIELD_HEIGHT.min(row.height), ..row };
        let focused = form.focus() == *field;
        frame.render_widget(
            InputBoxWidget::new(form.field(*field), field.label(), focused).style(theme.input()),
            input_area,
        );
        if let Some(hint) = field_hint(mode, *field) {
            if row.height > FIELD_HEIGHT {
                let hint_area = Rect {
                    y: row.y + FIELD_HEIGHT,
                    height: 1,
                    ..row
                };
                frame.render_widget(
                    Paragraph::new(Span::styled(format!(" {}", hint), theme.dim())),
                    hint_area,
                );
            }
        }
    }

    let n = form.fields().len();
    if let Some(error) = form.error() {
        frame.render_widget(
            Paragraph::new(Span::styled(error.user_message(), theme.error()))
                .alignment(Alignment::Center),
            rows[n + 1],
        );
    }

    let visibility = if form.show_password() { "hide" } else { "show" };
    let switch = match mode {
        AuthMode::Login => "Don't have an account? Ctrl+S to sign up",
        AuthMode::Signup => "Already have an account? Ctrl+S to sign in",
    };
    let hints = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("Tab next  Enter submit  Ctrl+R {} password", visibility),
            theme.dim(),
        )),
        Line::from(Span::styled(switch, theme.dim())),
    ];
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), rows[n + 2]);
}
