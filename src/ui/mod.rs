//! UI rendering for the patient portal
//!
//! Everything is drawn from `&App` on each frame; rendering never mutates
//! state.
//!
//! - Signed out: the auth card only
//! - Signed in: header, the active screen's body (via the screen registry),
//!   footer navigation, then overlays (toast, notification panel)
//!
//! Colors and spacing come from [`Theme`], derived from the view state's
//! dark mode flag and font size.

mod auth;
pub mod components;
pub mod helpers;
pub mod screens;
mod shell;
pub mod theme;

pub use helpers::{centered_rect, LayoutContext};
pub use theme::{Density, Palette, Theme};

use ratatui::{widgets::Block, Frame};

use crate::app::App;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole UI for the current state.
pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::for_view(&app.view);
    let area = frame.area();

    if !app.view.is_authenticated() {
        auth::render_auth(frame, app, &theme);
        shell::render_toast(frame, area, app, &theme);
        return;
    }

    frame.render_widget(Block::default().style(theme.base()), area);
    let [header, body, footer] = shell::shell_areas(area);

    shell::render_header(frame, header, app, &theme);
    let renderer = app.registry.renderer_for(app.view.active_screen());
    renderer(frame, body, app);
    shell::render_footer(frame, footer, app, &theme);

    shell::render_toast(frame, body, app, &theme);
    if app.notification_panel_open {
        shell::render_notification_panel(frame, body, &theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::ScreenId;
    use crate::state::LOGOUT_MESSAGE;
    use crate::ui::screens::test_support::{draw, loaded_app};

    #[test]
    fn test_signed_out_renders_only_auth() {
        let app = App::default();
        let text = draw(&app, 80, 30);
        assert!(text.contains("Welcome Back"));
        assert!(!text.contains("Patient Portal"));
        assert!(!text.contains("[1] Home"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_header_shows_registry_title() {
        let mut app = loaded_app(ScreenId::Home).await;
        assert!(draw(&app, 100, 30).contains("Dashboard"));
        app.navigate(ScreenId::LabResults).expect("navigate");
        assert!(draw(&app, 100, 30).contains("Lab Results"));
        app.navigate(ScreenId::Appointments).expect("navigate");
        assert!(draw(&app, 100, 30).contains("My Appointments"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_footer_navigation_items() {
        let app = loaded_app(ScreenId::Home).await;
        let text = draw(&app, 100, 30);
        for label in ["Home", "Records", "Meds", "Visits", "Profile"] {
            assert!(text.contains(label), "missing nav item {}", label);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_drawn_while_present() {
        let mut app = loaded_app(ScreenId::Records).await;
        app.download_records();
        assert!(draw(&app, 100, 30).contains("Downloading records..."));
        app.notifications.dismiss();
        assert!(!draw(&app, 100, 30).contains("Downloading records..."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_toast_on_auth_screen() {
        let mut app = loaded_app(ScreenId::Profile).await;
        app.logout();
        let text = draw(&app, 80, 30);
        assert!(text.contains("Welcome Back"));
        assert!(text.contains(LOGOUT_MESSAGE));
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_panel_overlay() {
        let mut app = loaded_app(ScreenId::Home).await;
        app.toggle_notification_panel();
        let text = draw(&app, 100, 30);
        assert!(text.contains("Notifications"));
        assert!(text.contains("New message from Dr. Sarah Mohamed."));
    }
}
