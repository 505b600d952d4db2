//! Appointments: upcoming and past sections, plus the booking modal.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{marker, render_lines, section};
use crate::app::App;
use crate::models::{partition_upcoming, Appointment};
use crate::state::screens::{BookingField, BookingForm};
use crate::state::ScreenState;
use crate::ui::components::{
    render_dialog_frame, render_status_indicator, resource_status, DialogFrameConfig,
};
use crate::ui::theme::Theme;
use crate::widgets::InputBoxWidget;

pub const NO_UPCOMING: &str = "No upcoming appointments.";
pub const NO_PAST: &str = "No past appointments.";

fn card(a: &Appointment, selected: bool, theme: &Theme) -> Vec<Line<'static>> {
    let name_style = if selected { theme.selected() } else { theme.heading() };
    let mut lines = vec![
        Line::from(vec![
            marker(selected, theme),
            Span::styled(a.doctor.clone(), name_style),
            Span::styled(format!("  {}", a.specialization), theme.dim()),
        ]),
        Line::from(Span::styled(format!("    {}", a.when()), theme.text())),
    ];
    if theme.shows_detail() {
        lines.push(Line::from(Span::styled(
            format!("    {}  ·  {}", a.department, a.purpose),
            theme.dim(),
        )));
    }
    lines
}

fn render_booking(frame: &mut Frame, area: Rect, form: &BookingForm, theme: &Theme) {
    let inner = render_dialog_frame(
        frame,
        area,
        theme,
        &DialogFrameConfig::new("Book New Appointment", 8).min_width(40),
    );
    let [dept_label, dept_row, date_row, hint_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let dept_focused = form.focus == BookingField::Department;
    frame.render_widget(
        Paragraph::new(Span::styled(" Department", theme.dim())),
        dept_label,
    );
    let choice_style = if dept_focused { theme.selected() } else { theme.text() };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ◀ ", theme.accent()),
            Span::styled(form.department_name(), choice_style),
            Span::styled(" ▶", theme.accent()),
        ])),
        dept_row,
    );
    frame.render_widget(
        InputBoxWidget::new(&form.date, "Preferred Date", form.focus == BookingField::Date)
            .style(theme.input()),
        date_row,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(" Enter confirm  Esc cancel", theme.dim())),
        hint_row,
    );
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(ScreenState::Appointments(state)) = app.screen.as_ref() else {
        return;
    };
    let theme = Theme::for_view(&app.view);

    if let Some(status) = resource_status(
        &state.appointments,
        "Loading appointments...",
        "No appointments found.",
        app.tick_count,
    ) {
        render_lines(frame, area, render_status_indicator(&status, &theme), 0, &theme);
        return;
    }
    let all = state.appointments.value().map(Vec::as_slice).unwrap_or_default();
    let (upcoming, past) = partition_upcoming(all);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("[b] ", theme.dim()),
            Span::styled("Book New Appointment", theme.accent()),
            Span::styled("   [c] ", theme.dim()),
            Span::styled("Cancel selected", theme.accent()),
        ]),
        Line::default(),
        section("Upcoming", &theme),
    ];
    let mut focus = 0;
    if upcoming.is_empty() {
        lines.push(Line::from(Span::styled(format!("  {}", NO_UPCOMING), theme.dim())));
    }
    for (i, a) in upcoming.iter().enumerate() {
        let selected = i == state.selected;
        lines.extend(card(a, selected, &theme));
        if selected {
            focus = lines.len() - 1;
        }
        theme.push_gap(&mut lines);
    }

    lines.push(Line::default());
    lines.push(section("Past", &theme));
    if past.is_empty() {
        lines.push(Line::from(Span::styled(format!("  {}", NO_PAST), theme.dim())));
    }
    for a in &past {
        lines.extend(card(a, false, &theme));
        lines.push(Line::from(Span::styled(
            format!("    {:?}", a.status).to_lowercase(),
            theme.dim(),
        )));
        theme.push_gap(&mut lines);
    }

    render_lines(frame, area, lines, focus, &theme);

    if let Some(form) = state.booking.as_ref() {
        render_booking(frame, area, form, &theme);
    }
}
