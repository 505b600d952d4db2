//! Prescriptions: reminder banner and expandable medication cards.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use super::{marker, render_lines};
use crate::app::App;
use crate::models::{Prescription, PrescriptionStatus};
use crate::state::ScreenState;
use crate::ui::components::{render_status_indicator, resource_status};
use crate::ui::theme::Theme;

fn status_style(status: PrescriptionStatus, theme: &Theme) -> ratatui::style::Style {
    match status {
        PrescriptionStatus::Active => theme.success(),
        PrescriptionStatus::Completed => theme.dim(),
        PrescriptionStatus::Cancelled => theme.error(),
    }
}

fn detail_lines(p: &Prescription, theme: &Theme) -> Vec<Line<'static>> {
    let label = |name: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("    {}: ", name), theme.dim()),
            Span::styled(value, theme.text()),
        ])
    };
    let mut lines = vec![
        label("Instructions", p.instructions.clone()),
        label("Duration", p.duration.clone()),
        label(
            "Prescribed by",
            format!("{} on {}", p.prescribed_by, p.prescribed_date),
        ),
    ];
    if p.has_schedule() {
        lines.push(label("Schedule", p.schedule.join(", ")));
    }
    lines.push(Line::from(vec![
        Span::styled("    [r] ", theme.dim()),
        Span::styled("Request Refill", theme.accent()),
        Span::styled("   [t] ", theme.dim()),
        Span::styled("Mark as Taken", theme.accent()),
    ]));
    lines
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(ScreenState::Prescriptions(state)) = app.screen.as_ref() else {
        return;
    };
    let theme = Theme::for_view(&app.view);

    if let Some(status) = resource_status(
        &state.prescriptions,
        "Loading prescriptions...",
        "No prescriptions found.",
        app.tick_count,
    ) {
        render_lines(frame, area, render_status_indicator(&status, &theme), 0, &theme);
        return;
    }
    let prescriptions = state.prescriptions.value().map(Vec::as_slice).unwrap_or_default();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("⏰ Medication Reminder  ", theme.warning()),
            Span::styled("Take your medications on time as prescribed.", theme.text()),
        ]),
        Line::default(),
    ];
    let mut focus = 0;
    for (i, p) in prescriptions.iter().enumerate() {
        let selected = i == state.selected;
        let expanded = state.is_expanded(p.id);
        let name_style = if selected { theme.selected() } else { theme.heading() };
        lines.push(Line::from(vec![
            marker(selected, &theme),
            Span::styled(p.medication_name.clone(), name_style),
            Span::styled(format!("  {}", p.status.label()), status_style(p.status, &theme)),
            Span::styled(if expanded { "  ▾" } else { "  ▸" }, theme.dim()),
        ]));
        lines.push(Line::from(Span::styled(format!("    {}", p.summary()), theme.text())));
        if expanded {
            lines.extend(detail_lines(p, &theme));
        }
        if selected {
            focus = lines.len() - 1;
        }
        theme.push_gap(&mut lines);
    }

    render_lines(frame, area, lines, focus, &theme);
}

#[cfg(test)]
mod tests {
    use crate::screens::ScreenId;
    use crate::state::ScreenState;
    use crate::ui::screens::test_support::{draw, loaded_app};

    #[tokio::test(start_paused = true)]
    async fn test_expand_shows_details() {
        let mut app = loaded_app(ScreenId::Prescriptions).await;
        let collapsed = draw(&app, 120, 40);
        assert!(collapsed.contains("Medication Reminder"));
        assert!(!collapsed.contains("Instructions:"));

        if let Some(ScreenState::Prescriptions(s)) = app.screen.as_mut() {
            s.toggle_selected();
        }
        let expanded = draw(&app, 120, 40);
        assert!(expanded.contains("Instructions:"));
        assert!(expanded.contains("Request Refill"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_text() {
        let mut app = loaded_app(ScreenId::Home).await;
        app.navigate(ScreenId::Prescriptions).expect("navigate");
        assert!(draw(&app, 100, 30).contains("Loading prescriptions..."));
    }
}
