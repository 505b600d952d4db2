//! Profile: accessibility settings, personal and contact details, logout.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use super::{marker, render_lines, section};
use crate::app::App;
use crate::state::screens::ProfileRow;
use crate::state::ScreenState;
use crate::ui::components::{render_status_indicator, resource_status};
use crate::ui::theme::Theme;

fn row_label(row: ProfileRow, app: &App) -> String {
    let radio = |on: bool| if on { "(•)" } else { "( )" };
    match row {
        ProfileRow::HighContrast => {
            let state = if app.view.is_dark_mode() { "on" } else { "off" };
            format!("High contrast (dark mode)  [{}]", state)
        }
        ProfileRow::Font(size) => format!(
            "{} Font size: {}",
            radio(app.view.font_size() == size),
            size.label()
        ),
        ProfileRow::Logout => "Log out".to_string(),
    }
}

fn field(name: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", name), theme.dim()),
        Span::styled(value, theme.text()),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(ScreenState::Profile(state)) = app.screen.as_ref() else {
        return;
    };
    let theme = Theme::for_view(&app.view);

    if let Some(status) = resource_status(&state.patient, "Loading...", "No profile found.", app.tick_count) {
        render_lines(frame, area, render_status_indicator(&status, &theme), 0, &theme);
        return;
    }
    let Some(patient) = state.patient.value() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(patient.name.clone(), theme.heading())),
        Line::from(Span::styled(format!("Patient ID: {}", patient.id), theme.dim())),
    ];
    theme.push_gap(&mut lines);

    lines.push(section("Accessibility", &theme));
    let mut focus = 0;
    for (i, row) in ProfileRow::ALL.iter().enumerate() {
        let selected = i == state.selected;
        if selected {
            focus = lines.len();
        }
        let style = match (selected, row) {
            (true, _) => theme.selected(),
            (false, ProfileRow::Logout) => theme.error(),
            (false, _) => theme.text(),
        };
        lines.push(Line::from(vec![
            marker(selected, &theme),
            Span::styled(row_label(*row, app), style),
        ]));
    }
    theme.push_gap(&mut lines);

    lines.push(section("Personal Information", &theme));
    lines.push(field("Date of Birth", patient.dob.to_string(), &theme));
    lines.push(field("Gender", patient.gender.clone(), &theme));
    theme.push_gap(&mut lines);

    lines.push(section("Contact Information", &theme));
    lines.push(field("Email", patient.contact.email.clone(), &theme));
    lines.push(field("Phone", patient.contact.phone.clone(), &theme));
    if theme.shows_detail() {
        lines.push(field(
            "Emergency",
            format!(
                "{} ({})",
                patient.emergency_contact.name, patient.emergency_contact.phone
            ),
            &theme,
        ));
        lines.push(field(
            "Insurance",
            format!(
                "{} / {}",
                patient.insurance.provider, patient.insurance.policy_number
            ),
            &theme,
        ));
    }

    render_lines(frame, area, lines, focus, &theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::ScreenId;
    use crate::state::FontSize;
    use crate::ui::screens::test_support::{draw, loaded_app};

    #[tokio::test(start_paused = true)]
    async fn test_profile_sections() {
        let app = loaded_app(ScreenId::Profile).await;
        let text = draw(&app, 100, 40);
        assert!(text.contains("John Doe"));
        assert!(text.contains("High contrast (dark mode)  [off]"));
        assert!(text.contains("(•) Font size: Base"));
        assert!(text.contains("1985-05-15"));
        assert!(text.contains("Log out"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_row_labels_follow_view() {
        let mut app = loaded_app(ScreenId::Profile).await;
        app.view.toggle_theme();
        app.view.set_font_size(FontSize::Large);
        assert_eq!(row_label(ProfileRow::HighContrast, &app), "High contrast (dark mode)  [on]");
        assert!(row_label(ProfileRow::Font(FontSize::Large), &app).starts_with("(•)"));
        assert!(row_label(ProfileRow::Font(FontSize::Small), &app).starts_with("( )"));
    }
}
