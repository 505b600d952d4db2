//! Navigation, authentication and mounting.

use super::App;
use crate::error::NavigationError;
use crate::screens::ScreenId;
use crate::state::{AuthSubmit, ScreenState};

impl App {
    /// Mount the active screen, replacing (and so unmounting) whatever was
    /// mounted before.
    fn mount_active(&mut self) {
        let screen = self.view.active_screen();
        self.screen = Some(ScreenState::mount(screen, self.config.load_delay));
        self.mark_dirty();
    }

    /// Switch to `screen`.
    ///
    /// Navigating to the screen that is already showing keeps it mounted.
    pub fn navigate(&mut self, screen: ScreenId) -> Result<(), NavigationError> {
        let previous = self.view.active_screen();
        self.view.navigate(screen)?;
        self.notification_panel_open = false;
        let mounted = self.screen.as_ref().map(ScreenState::screen_id);
        if previous != screen || mounted != Some(screen) {
            self.mount_active();
        }
        self.mark_dirty();
        Ok(())
    }

    /// Esc: back to home from any other screen.
    pub fn back(&mut self) {
        if self.view.active_screen() != ScreenId::Home {
            if let Err(e) = self.navigate(ScreenId::Home) {
                tracing::warn!("back: {}", e);
            }
        }
    }

    /// Submit the auth form in its current mode.
    ///
    /// Success mounts home; failure leaves the error on the form.
    pub fn submit_auth(&mut self) {
        let outcome = match self.auth_form.submit() {
            AuthSubmit::Login(request) => self.view.login(&request, &mut self.notifications),
            AuthSubmit::Signup(request) => self.view.signup(&request, &mut self.notifications),
        };
        match outcome {
            Ok(()) => {
                self.auth_form.reset();
                self.notification_panel_open = false;
                self.mount_active();
            }
            Err(e) => {
                self.auth_form.set_error(e);
                self.mark_dirty();
            }
        }
    }

    /// Sign out, unmounting the current screen.
    pub fn logout(&mut self) {
        self.view.logout(&mut self.notifications);
        self.screen = None;
        self.notification_panel_open = false;
        self.auth_form.reset();
        self.mark_dirty();
    }

    pub fn toggle_notification_panel(&mut self) {
        self.notification_panel_open = !self.notification_panel_open;
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use crate::startup::PortalConfig;
    use crate::state::LOGIN_SUCCESS_MESSAGE;

    fn sign_in(app: &mut App) {
        for c in "patient".chars() {
            app.auth_form.focused_mut().insert_char(c);
        }
        app.auth_form.focus_next();
        for c in "password123".chars() {
            app.auth_form.focused_mut().insert_char(c);
        }
        app.submit_auth();
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_auth_mounts_home() {
        let mut app = App::new(PortalConfig::default());
        sign_in(&mut app);
        assert!(app.view.is_authenticated());
        assert_eq!(app.screen.as_ref().map(ScreenState::screen_id), Some(ScreenId::Home));
        assert_eq!(
            app.notifications.current().map(|n| n.message.as_str()),
            Some(LOGIN_SUCCESS_MESSAGE)
        );
        assert!(app.auth_form.field(crate::state::AuthField::PatientId).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_login_sets_inline_error() {
        let mut app = App::default();
        app.submit_auth();
        assert!(!app.view.is_authenticated());
        assert!(app.screen.is_none());
        assert_eq!(app.auth_form.error(), Some(AuthError::InvalidCredentials));
        assert!(app.notifications.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigate_remounts_only_on_change() {
        let mut app = App::default();
        sign_in(&mut app);
        app.navigate(ScreenId::Records).expect("navigate");
        assert_eq!(app.screen.as_ref().map(ScreenState::screen_id), Some(ScreenId::Records));

        if let Some(ScreenState::Records(records)) = app.screen.as_mut() {
            records.scroll = 3;
        }
        app.navigate(ScreenId::Records).expect("navigate");
        match app.screen.as_ref() {
            Some(ScreenState::Records(records)) => assert_eq!(records.scroll, 3),
            other => panic!("unexpected screen: {:?}", other.map(ScreenState::screen_id)),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigate_signed_out_is_rejected() {
        let mut app = App::default();
        assert!(app.navigate(ScreenId::Profile).is_err());
        assert!(app.screen.is_none());
        assert_eq!(app.view.active_screen(), ScreenId::Home);
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_unmounts() {
        let mut app = App::default();
        sign_in(&mut app);
        app.navigate(ScreenId::Messages).expect("navigate");
        app.toggle_notification_panel();
        app.logout();
        assert!(!app.view.is_authenticated());
        assert!(app.screen.is_none());
        assert!(!app.notification_panel_open);
        assert_eq!(app.view.active_screen(), ScreenId::Home);
    }

    #[tokio::test(start_paused = true)]
    async fn test_back_goes_home() {
        let mut app = App::default();
        sign_in(&mut app);
        app.navigate(ScreenId::LabResults).expect("navigate");
        app.back();
        assert_eq!(app.view.active_screen(), ScreenId::Home);
        assert_eq!(app.screen.as_ref().map(ScreenState::screen_id), Some(ScreenId::Home));
    }
}
