//! Medical records list.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use super::{marker, render_lines};
use crate::app::App;
use crate::state::ScreenState;
use crate::ui::components::{render_status_indicator, resource_status};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(ScreenState::Records(state)) = app.screen.as_ref() else {
        return;
    };
    let theme = Theme::for_view(&app.view);

    if let Some(status) = resource_status(
        &state.records,
        "Loading medical records...",
        "No medical records found.",
        app.tick_count,
    ) {
        render_lines(frame, area, render_status_indicator(&status, &theme), 0, &theme);
        return;
    }
    let records = state.records.value().map(Vec::as_slice).unwrap_or_default();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("[d] ", theme.dim()),
            Span::styled("Download Records (PDF)", theme.accent()),
        ]),
        Line::default(),
    ];
    let mut focus = 0;
    for (i, record) in records.iter().enumerate() {
        let selected = i == state.scroll;
        if selected {
            focus = lines.len();
        }
        lines.push(Line::from(vec![
            marker(selected, &theme),
            Span::styled(format!("{} ", record.kind.marker()), theme.accent()),
            Span::styled(record.title.clone(), theme.heading()),
            Span::styled(format!("  {}", record.kind.label()), theme.dim()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}  ·  {}", record.date, record.doctor),
            theme.dim(),
        )));
        if theme.shows_detail() {
            lines.push(Line::from(Span::styled(
                format!("    {}", record.details),
                theme.text(),
            )));
        }
        theme.push_gap(&mut lines);
        if selected {
            // keep the whole card in view
            focus = lines.len().saturating_sub(1);
        }
    }

    render_lines(frame, area, lines, focus, &theme);
}

#[cfg(test)]
mod tests {
    use crate::screens::ScreenId;
    use crate::ui::screens::test_support::{draw, loaded_app};

    #[tokio::test(start_paused = true)]
    async fn test_records_listed() {
        let app = loaded_app(ScreenId::Records).await;
        let text = draw(&app, 120, 40);
        assert!(text.contains("Download Records (PDF)"));
        assert!(text.contains("diagnosis"));
        assert!(text.contains("immunization"));
    }

    #[test]
    fn test_failed_load_shows_empty_text() {
        // Without a runtime every load fails immediately.
        let mut app = crate::app::App::default();
        let request = crate::auth::LoginRequest {
            patient_id: "patient",
            password: "password123",
        };
        app.view
            .login(&request, &mut app.notifications)
            .expect("login");
        app.navigate(ScreenId::Records).expect("navigate");
        let text = draw(&app, 100, 30);
        assert!(text.contains("No medical records found."));
        assert!(text.contains("Failed to fetch data"));
    }
}
