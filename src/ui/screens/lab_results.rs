//! Lab results: hemoglobin trend chart above expandable result cards.
//!
//! The chart and the list load independently, so either can still be
//! loading while the other is drawn.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use super::{marker, render_lines};
use crate::app::App;
use crate::models::{LabResult, ParameterStatus, TrendPoint};
use crate::state::ScreenState;
use crate::ui::components::{render_status_indicator, resource_status};
use crate::ui::theme::Theme;

const CHART_HEIGHT: u16 = 10;
pub const PENDING_TEXT: &str = "Results are not yet available for this test.";

fn parameter_style(status: ParameterStatus, theme: &Theme) -> Style {
    match status {
        ParameterStatus::Normal => theme.success(),
        ParameterStatus::High => theme.error(),
        ParameterStatus::Low => theme.warning(),
    }
}

/// Y bounds padded by half a unit around the data.
fn y_bounds(points: &[TrendPoint]) -> [f64; 2] {
    let (min, max) = points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
        (lo.min(p.hemoglobin), hi.max(p.hemoglobin))
    });
    if points.is_empty() {
        [0.0, 1.0]
    } else {
        [(min - 0.5).floor(), (max + 0.5).ceil()]
    }
}

fn render_trend(frame: &mut Frame, area: Rect, points: &[TrendPoint], theme: &Theme) {
    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.hemoglobin))
        .collect();
    let [lo, hi] = y_bounds(points);
    let x_labels: Vec<Span> = points
        .iter()
        .map(|p| Span::styled(p.date.format("%b %y").to_string(), theme.dim()))
        .collect();

    let dataset = Dataset::default()
        .name("Hemoglobin")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme.accent())
        .data(&data);
    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(Span::styled(" Hemoglobin Trend (g/dL) ", theme.heading()))
                .borders(Borders::ALL)
                .border_style(theme.border(false)),
        )
        .style(theme.base())
        .x_axis(
            Axis::default()
                .style(theme.dim())
                .bounds([0.0, data.len().saturating_sub(1).max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme.dim())
                .bounds([lo, hi])
                .labels(vec![
                    Span::styled(format!("{:.0}", lo), theme.dim()),
                    Span::styled(format!("{:.0}", hi), theme.dim()),
                ]),
        );
    frame.render_widget(chart, area);
}

fn result_lines(result: &LabResult, expanded: bool, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!("    {}  ·  ordered by {}", result.test_date, result.ordered_by),
        theme.dim(),
    ))];
    if !expanded {
        return lines;
    }
    if !result.is_completed() {
        lines.push(Line::from(Span::styled(format!("    {}", PENDING_TEXT), theme.dim())));
        return lines;
    }
    for p in &result.results {
        lines.push(Line::from(vec![
            Span::styled(format!("    {:<18}", p.parameter), theme.text()),
            Span::styled(
                format!("{:>6} {:<8}", p.value, p.unit),
                parameter_style(p.status, theme),
            ),
            Span::styled(format!("ref {}", p.reference_range), theme.dim()),
        ]));
    }
    lines
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(ScreenState::LabResults(state)) = app.screen.as_ref() else {
        return;
    };
    let theme = Theme::for_view(&app.view);
    let [chart_area, list_area] =
        Layout::vertical([Constraint::Length(CHART_HEIGHT), Constraint::Min(0)]).areas(area);

    match resource_status(&state.trend, "Loading trend...", "No trend data found.", app.tick_count) {
        Some(status) => frame.render_widget(
            Paragraph::new(render_status_indicator(&status, &theme)).style(theme.base()),
            chart_area,
        ),
        None => {
            let points = state.trend.value().map(Vec::as_slice).unwrap_or_default();
            render_trend(frame, chart_area, points, &theme);
        }
    }

    if let Some(status) = resource_status(
        &state.results,
        "Loading lab results...",
        "No lab results found.",
        app.tick_count,
    ) {
        render_lines(frame, list_area, render_status_indicator(&status, &theme), 0, &theme);
        return;
    }
    let results = state.results.value().map(Vec::as_slice).unwrap_or_default();

    let mut lines = vec![Line::default()];
    let mut focus = 0;
    for (i, result) in results.iter().enumerate() {
        let selected = i == state.selected;
        let expanded = state.is_expanded(result.id);
        let status_style = if result.is_completed() {
            theme.success()
        } else {
            theme.warning()
        };
        let flagged = result.flagged().count();
        let mut header = vec![
            marker(selected, &theme),
            Span::styled(
                result.test_name.clone(),
                if selected { theme.selected() } else { theme.heading() },
            ),
            Span::styled(format!("  {}", result.status.label()), status_style),
        ];
        if flagged > 0 {
            header.push(Span::styled(format!("  {} flagged", flagged), theme.error()));
        }
        lines.push(Line::from(header));
        lines.extend(result_lines(result, expanded, &theme));
        if selected {
            focus = lines.len() - 1;
        }
        theme.push_gap(&mut lines);
    }

    render_lines(frame, list_area, lines, focus, &theme);
}
