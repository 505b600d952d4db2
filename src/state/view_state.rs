//! Authentication, navigation and presentation preferences.
//!
//! `ViewState` is a two-level state machine. While signed out the only
//! surface is the auth form; while signed in the active screen can be any
//! [`ScreenId`]. Every mutation goes through a named transition.

use crate::auth::{self, LoginRequest, SignupRequest};
use crate::error::{AuthError, NavigationError};
use crate::screens::ScreenId;
use crate::state::NotificationCenter;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const LOGOUT_MESSAGE: &str = "You have been logged out.";

/// Text size preference. In the terminal it controls content density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FontSize {
    Small,
    #[default]
    Base,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Base, FontSize::Large];

    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Base => "Base",
            FontSize::Large => "Large",
        }
    }

    /// Parse `sm`/`small`, `base`, `lg`/`large`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "sm" | "small" => Some(FontSize::Small),
            "base" | "normal" => Some(FontSize::Base),
            "lg" | "large" => Some(FontSize::Large),
            _ => None,
        }
    }
}

/// The process-wide UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    authenticated: bool,
    active_screen: ScreenId,
    dark_mode: bool,
    font_size: FontSize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Signed out, on home, light theme, base font.
    pub fn new() -> Self {
        Self {
            authenticated: false,
            active_screen: ScreenId::Home,
            dark_mode: false,
            font_size: FontSize::Base,
        }
    }

    /// Start with the given presentation preferences.
    pub fn with_preferences(dark_mode: bool, font_size: FontSize) -> Self {
        Self {
            dark_mode,
            font_size,
            ..Self::new()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn active_screen(&self) -> ScreenId {
        self.active_screen
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    /// Sign in with the demo credentials.
    ///
    /// On success the active screen resets to home and a toast is posted.
    /// On failure nothing changes; the error is for the form to display.
    pub fn login(
        &mut self,
        request: &LoginRequest<'_>,
        notifications: &mut NotificationCenter,
    ) -> Result<(), AuthError> {
        if let Err(err) = auth::verify_login(request) {
            tracing::info!("login rejected for {:?}: {}", request.patient_id, err.error_code());
            return Err(err);
        }
        tracing::info!("login accepted for {:?}", request.patient_id);
        self.enter(notifications);
        Ok(())
    }

    /// Validate a signup form and, if it passes, sign in as with `login`.
    /// No account is stored.
    pub fn signup(
        &mut self,
        request: &SignupRequest<'_>,
        notifications: &mut NotificationCenter,
    ) -> Result<(), AuthError> {
        if let Err(err) = auth::validate_signup(request) {
            tracing::info!("signup rejected: {}", err.error_code());
            return Err(err);
        }
        tracing::info!("signup accepted for {:?}", request.patient_id);
        self.enter(notifications);
        Ok(())
    }

    fn enter(&mut self, notifications: &mut NotificationCenter) {
        self.authenticated = true;
        self.active_screen = ScreenId::Home;
        notifications.post(LOGIN_SUCCESS_MESSAGE);
    }

    /// Sign out. Always ends signed out on home, even if already signed out.
    pub fn logout(&mut self, notifications: &mut NotificationCenter) {
        if self.authenticated {
            tracing::info!("logged out");
        } else {
            tracing::debug!("logout while already signed out");
        }
        self.authenticated = false;
        self.active_screen = ScreenId::Home;
        notifications.post(LOGOUT_MESSAGE);
    }

    /// Switch the active screen. Only legal while signed in.
    pub fn navigate(&mut self, screen: ScreenId) -> Result<(), NavigationError> {
        if !self.authenticated {
            tracing::warn!("navigate({}) rejected: not signed in", screen);
            return Err(NavigationError::NotAuthenticated { requested: screen });
        }
        if self.active_screen != screen {
            tracing::debug!("navigate {} -> {}", self.active_screen, screen);
        }
        self.active_screen = screen;
        Ok(())
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        tracing::debug!("dark mode {}", if self.dark_mode { "on" } else { "off" });
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.font_size = size;
        tracing::debug!("font size {}", size.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn center() -> NotificationCenter {
        NotificationCenter::detached(Duration::from_millis(3000))
    }

    fn valid_login() -> LoginRequest<'static> {
        LoginRequest {
            patient_id: "patient",
            password: "password123",
        }
    }

    #[test]
    fn test_initial_state() {
        let view = ViewState::new();
        assert!(!view.is_authenticated());
        assert_eq!(view.active_screen(), ScreenId::Home);
        assert!(!view.is_dark_mode());
        assert_eq!(view.font_size(), FontSize::Base);
    }

    #[test]
    fn test_login_success() {
        let mut view = ViewState::new();
        let mut notes = center();
        assert_eq!(view.login(&valid_login(), &mut notes), Ok(()));
        assert!(view.is_authenticated());
        assert_eq!(view.active_screen(), ScreenId::Home);
        assert_eq!(notes.current().map(|n| n.message.as_str()), Some(LOGIN_SUCCESS_MESSAGE));
    }

    #[test]
    fn test_login_failure_is_inline_only() {
        let mut view = ViewState::new();
        let mut notes = center();
        let bad = LoginRequest {
            patient_id: "patient",
            password: "nope",
        };
        assert_eq!(view.login(&bad, &mut notes), Err(AuthError::InvalidCredentials));
        assert!(!view.is_authenticated());
        assert!(notes.current().is_none());
    }

    #[test]
    fn test_signup_order_of_checks() {
        let mut view = ViewState::new();
        let mut notes = center();
        let request = SignupRequest {
            patient_id: "",
            phone: "",
            password: "a",
            confirm_password: "b",
        };
        assert_eq!(view.signup(&request, &mut notes), Err(AuthError::PasswordMismatch));
        assert!(!view.is_authenticated());
        assert!(notes.current().is_none());
    }

    #[test]
    fn test_signup_success_behaves_like_login() {
        let mut view = ViewState::new();
        let mut notes = center();
        let request = SignupRequest {
            patient_id: "jdoe",
            phone: "555",
            password: "pw",
            confirm_password: "pw",
        };
        assert_eq!(view.signup(&request, &mut notes), Ok(()));
        assert!(view.is_authenticated());
        assert_eq!(view.active_screen(), ScreenId::Home);
        assert_eq!(notes.current().map(|n| n.message.as_str()), Some(LOGIN_SUCCESS_MESSAGE));
    }

    #[test]
    fn test_login_resets_screen_to_home() {
        let mut view = ViewState::new();
        let mut notes = center();
        view.login(&valid_login(), &mut notes).expect("login");
        view.navigate(ScreenId::Messages).expect("navigate");
        view.logout(&mut notes);
        view.login(&valid_login(), &mut notes).expect("login again");
        assert_eq!(view.active_screen(), ScreenId::Home);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut view = ViewState::new();
        let mut notes = center();
        view.login(&valid_login(), &mut notes).expect("login");
        view.navigate(ScreenId::Profile).expect("navigate");

        view.logout(&mut notes);
        assert!(!view.is_authenticated());
        assert_eq!(view.active_screen(), ScreenId::Home);
        assert_eq!(notes.current().map(|n| n.message.as_str()), Some(LOGOUT_MESSAGE));

        view.logout(&mut notes);
        assert!(!view.is_authenticated());
        assert_eq!(view.active_screen(), ScreenId::Home);
    }

    #[test]
    fn test_navigate_rejected_while_signed_out() {
        let mut view = ViewState::new();
        for screen in ScreenId::ALL {
            assert_eq!(
                view.navigate(screen),
                Err(NavigationError::NotAuthenticated { requested: screen })
            );
            assert_eq!(view.active_screen(), ScreenId::Home);
        }
    }

    #[test]
    fn test_navigate_while_signed_in() {
        let mut view = ViewState::new();
        let mut notes = center();
        view.login(&valid_login(), &mut notes).expect("login");
        for screen in ScreenId::ALL {
            view.navigate(screen).expect("navigate");
            assert_eq!(view.active_screen(), screen);
        }
    }

    #[test]
    fn test_presentation_transitions_always_legal() {
        let mut view = ViewState::new();
        view.toggle_theme();
        assert!(view.is_dark_mode());
        view.set_font_size(FontSize::Large);
        assert_eq!(view.font_size(), FontSize::Large);
        view.toggle_theme();
        assert!(!view.is_dark_mode());
        assert!(!view.is_authenticated());
    }

    #[test]
    fn test_font_size_parse() {
        assert_eq!(FontSize::parse("sm"), Some(FontSize::Small));
        assert_eq!(FontSize::parse("LARGE"), Some(FontSize::Large));
        assert_eq!(FontSize::parse("base"), Some(FontSize::Base));
        assert_eq!(FontSize::parse("huge"), None);
    }
}
