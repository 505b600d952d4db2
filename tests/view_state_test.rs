//! View state transitions: login, signup, logout, navigation and
//! presentation preferences.

use std::time::Duration;

use portal::auth::{LoginRequest, SignupRequest};
use portal::error::{AuthError, NavigationError};
use portal::screens::ScreenId;
use portal::state::{
    FontSize, NotificationCenter, ViewState, LOGIN_SUCCESS_MESSAGE, LOGOUT_MESSAGE,
};

fn center() -> NotificationCenter {
    NotificationCenter::detached(Duration::from_millis(3000))
}

fn login(view: &mut ViewState, toasts: &mut NotificationCenter, id: &str, pw: &str) -> Result<(), AuthError> {
    view.login(
        &LoginRequest {
            patient_id: id,
            password: pw,
        },
        toasts,
    )
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
fn test_login_with_demo_account() {
    let mut view = ViewState::new();
    let mut toasts = center();
    login(&mut view, &mut toasts, "patient", "password123").expect("demo login");

    assert!(view.is_authenticated());
    assert_eq!(view.active_screen(), ScreenId::Home);
    assert_eq!(
        toasts.current().map(|n| n.message.as_str()),
        Some(LOGIN_SUCCESS_MESSAGE)
    );
}

#[test]
fn test_failed_login_changes_nothing() {
    let mut view = ViewState::new();
    let mut toasts = center();
    let err = login(&mut view, &mut toasts, "patient", "wrong").expect_err("bad password");

    assert_eq!(err, AuthError::InvalidCredentials);
    assert_eq!(err.user_message(), "Invalid Patient ID or password.");
    assert!(!view.is_authenticated());
    assert!(toasts.current().is_none(), "auth errors are never toasts");
}

#[test]
fn test_login_resets_active_screen() {
    let mut view = ViewState::new();
    let mut toasts = center();
    login(&mut view, &mut toasts, "patient", "password123").expect("login");
    view.navigate(ScreenId::Profile).expect("navigate");
    view.logout(&mut toasts);
    login(&mut view, &mut toasts, "patient", "password123").expect("login again");
    assert_eq!(view.active_screen(), ScreenId::Home);
}

#[test]
fn test_signup_checks_mismatch_before_missing_fields() {
    let mut view = ViewState::new();
    let mut toasts = center();
    let err = view
        .signup(
            &SignupRequest {
                patient_id: "",
                phone: "",
                password: "a",
                confirm_password: "b",
            },
            &mut toasts,
        )
        .expect_err("mismatch");
    assert_eq!(err, AuthError::PasswordMismatch);

    let err = view
        .signup(
            &SignupRequest {
                patient_id: "new",
                phone: "",
                password: "pw",
                confirm_password: "pw",
            },
            &mut toasts,
        )
        .expect_err("missing phone");
    assert_eq!(err, AuthError::MissingFields);
    assert!(!view.is_authenticated());
}

#[test]
fn test_signup_success_signs_in() {
    let mut view = ViewState::new();
    let mut toasts = center();
    view.signup(
        &SignupRequest {
            patient_id: "someone",
            phone: "555-0100",
            password: "pw",
            confirm_password: "pw",
        },
        &mut toasts,
    )
    .expect("signup");
    assert!(view.is_authenticated());
    assert_eq!(
        toasts.current().map(|n| n.message.as_str()),
        Some(LOGIN_SUCCESS_MESSAGE)
    );
}

#[test]
fn test_logout_is_total() {
    let mut view = ViewState::new();
    let mut toasts = center();

    view.logout(&mut toasts);
    assert!(!view.is_authenticated());
    assert_eq!(toasts.current().map(|n| n.message.as_str()), Some(LOGOUT_MESSAGE));

    login(&mut view, &mut toasts, "patient", "password123").expect("login");
    view.navigate(ScreenId::LabResults).expect("navigate");
    view.logout(&mut toasts);
    assert!(!view.is_authenticated());
    assert_eq!(view.active_screen(), ScreenId::Home);
}

#[test]
fn test_navigate_requires_authentication() {
    let mut view = ViewState::new();
    let err = view.navigate(ScreenId::Records).expect_err("signed out");
    assert!(matches!(
        err,
        NavigationError::NotAuthenticated {
            requested: ScreenId::Records
        }
    ));
    assert_eq!(view.active_screen(), ScreenId::Home);
}

#[test]
fn test_preferences_survive_logout() {
    let mut view = ViewState::new();
    let mut toasts = center();
    view.toggle_theme();
    view.set_font_size(FontSize::Large);
    login(&mut view, &mut toasts, "patient", "password123").expect("login");
    view.logout(&mut toasts);

    assert!(view.is_dark_mode());
    assert_eq!(view.font_size(), FontSize::Large);
    view.toggle_theme();
    assert!(!view.is_dark_mode());
}
