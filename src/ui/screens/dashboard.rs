//! Home: greeting, quick actions and recent activity.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use super::{marker, render_lines, section};
use crate::app::App;
use crate::data::RECENT_ACTIVITY;
use crate::models::AdmissionStatus;
use crate::state::screens::QUICK_ACTIONS;
use crate::state::ScreenState;
use crate::ui::components::{render_status_indicator, resource_status};
use crate::ui::shell::activity_marker;
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(ScreenState::Dashboard(state)) = app.screen.as_ref() else {
        return;
    };
    let theme = Theme::for_view(&app.view);

    if let Some(status) = resource_status(&state.patient, "Loading...", "No patient data found.", app.tick_count) {
        render_lines(frame, area, render_status_indicator(&status, &theme), 0, &theme);
        return;
    }
    let Some(patient) = state.patient.value() else {
        return;
    };

    let badge = match patient.status {
        AdmissionStatus::Admitted => theme.warning(),
        AdmissionStatus::Discharged => theme.success(),
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("Welcome back, {}!", patient.first_name()), theme.heading()),
            Span::raw("  "),
            Span::styled(format!("[{}]", patient.status.label()), badge),
        ]),
        Line::from(Span::styled(format!("Patient ID: {}", patient.id), theme.dim())),
    ];
    theme.push_gap(&mut lines);

    lines.push(section("Quick Actions", &theme));
    let mut focus = lines.len();
    for (i, (label, _)) in QUICK_ACTIONS.iter().enumerate() {
        let selected = i == state.selected;
        if selected {
            focus = lines.len();
        }
        let style = if selected { theme.selected() } else { theme.text() };
        lines.push(Line::from(vec![
            marker(selected, &theme),
            Span::styled(label.to_string(), style),
        ]));
    }
    theme.push_gap(&mut lines);

    lines.push(section("Recent Activity", &theme));
    for item in RECENT_ACTIVITY.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", activity_marker(item.kind)), theme.accent()),
            Span::styled(item.text, theme.text()),
            Span::styled(format!("  {}", item.age), theme.dim()),
        ]));
    }

    render_lines(frame, area, lines, focus, &theme);
}
