//! The signed-in shell: header, footer navigation, toast and the
//! notification panel.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::components::{render_tab_selector, TabItem};
use super::helpers::{display_width, LayoutContext};
use super::theme::Theme;
use crate::app::App;
use crate::data::PANEL_NOTIFICATIONS;
use crate::input::ModalType;
use crate::models::ActivityKind;
use crate::screens::{ScreenId, NAV_ITEMS};

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

/// Split the frame into header, body and footer.
pub fn shell_areas(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area)
}

pub fn activity_marker(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Lab => "⚗",
        ActivityKind::Appointment => "▣",
        ActivityKind::Message => "✉",
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled(" ✚ Patient Portal", theme.accent().add_modifier(Modifier::BOLD)),
        Span::styled("  ›  ", theme.dim()),
        Span::styled(app.title(), theme.heading()),
    ]);
    frame.render_widget(Paragraph::new(title), inner);

    let mode = if app.view.is_dark_mode() { "☾ dark" } else { "☀ light" };
    let bell_style = if app.notification_panel_open {
        theme.selected()
    } else {
        theme.text()
    };
    let status = Line::from(vec![
        Span::styled(format!("{}  ", mode), theme.dim()),
        Span::styled(format!("🔔 {} ", PANEL_NOTIFICATIONS.len()), bell_style),
        Span::styled("[n] ", theme.dim()),
    ]);
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Right), inner);
}

/// Key hints for the current input context.
pub fn footer_hints(app: &App) -> &'static str {
    let ctx = app.build_input_context();
    match ctx.modal {
        ModalType::NotificationPanel => return "Esc close  n toggle",
        ModalType::Booking => {
            return "←/→ department  Tab field  Enter confirm  Esc cancel";
        }
        ModalType::None => {}
    }
    match ctx.screen() {
        Some(ScreenId::Home) => "↑/↓ select  Enter open  Ctrl+T theme  Ctrl+L logout  q quit",
        Some(ScreenId::Records) => "↑/↓ scroll  d download  Esc back  q quit",
        Some(ScreenId::Prescriptions) => {
            "↑/↓ select  Space expand  r refill  t taken  Esc back"
        }
        Some(ScreenId::LabResults) => "↑/↓ select  Space expand  Esc back  q quit",
        Some(ScreenId::Appointments) => "↑/↓ select  b book  c cancel  Esc back",
        Some(ScreenId::Messages) => "Enter send  Esc back",
        Some(ScreenId::Profile) => "↑/↓ select  Enter apply  Esc back  q quit",
        None => "",
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items: Vec<TabItem> = NAV_ITEMS
        .iter()
        .map(|(_, label, key)| TabItem::new(*key, label))
        .collect();
    let active = app.view.active_screen();
    let selected = NAV_ITEMS.iter().position(|(screen, _, _)| *screen == active);
    let ctx = LayoutContext::from_rect(frame.area());

    let [nav_area, hint_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
    frame.render_widget(
        Paragraph::new(render_tab_selector(&items, selected, theme, &ctx)),
        nav_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", footer_hints(app)), theme.dim())),
        hint_area,
    );
}

/// The current toast, centered just above `anchor`'s bottom edge.
pub fn render_toast(frame: &mut Frame, anchor: Rect, app: &App, theme: &Theme) {
    let Some(notification) = app.notifications.current() else {
        return;
    };
    let width = (display_width(&notification.message) + 4).min(anchor.width);
    let height = 3.min(anchor.height);
    let area = Rect {
        x: anchor.x + (anchor.width - width) / 2,
        y: anchor.y + anchor.height - height,
        width,
        height,
    };
    frame.render_widget(Clear, area);
    let toast = Paragraph::new(notification.message.as_str())
        .alignment(Alignment::Center)
        .style(theme.toast())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.toast()),
        );
    frame.render_widget(toast, area);
}

/// Drop-down under the bell listing the fixed notifications.
pub fn render_notification_panel(frame: &mut Frame, area: Rect, theme: &Theme) {
    let width = 52.min(area.width);
    let height = (PANEL_NOTIFICATIONS.len() as u16 * 2 + 2).min(area.height);
    let panel = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    };
    frame.render_widget(Clear, panel);

    let lines: Vec<Line> = PANEL_NOTIFICATIONS
        .iter()
        .flat_map(|item| {
            [
                Line::from(vec![
                    Span::styled(format!("{} ", activity_marker(item.kind)), theme.accent()),
                    Span::styled(item.text, theme.text()),
                ]),
                Line::from(Span::styled(format!("  {}", item.age), theme.dim())),
            ]
        })
        .collect();
    let block = Block::default()
        .title(Span::styled(" Notifications ", theme.heading()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border(true))
        .style(theme.base());
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        panel,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_areas_split() {
        let [header, body, footer] = shell_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, HEADER_HEIGHT);
        assert_eq!(footer.height, FOOTER_HEIGHT);
        assert_eq!(body.height, 24 - HEADER_HEIGHT - FOOTER_HEIGHT);
    }

    #[test]
    fn test_activity_markers_distinct() {
        assert_ne!(activity_marker(ActivityKind::Lab), activity_marker(ActivityKind::Message));
    }
}
