//! End-to-end flows driven through key events, checked against the
//! rendered terminal buffer.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use portal::app::App;
use portal::screens::ScreenId;
use portal::state::{FontSize, LOGIN_SUCCESS_MESSAGE, LOGOUT_MESSAGE};
use ratatui::{backend::TestBackend, Terminal};

fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(app: &mut App, c: char) -> bool {
    app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn draw(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|f| portal::ui::render(f, app))
        .expect("draw");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

async fn settle(app: &mut App) {
    tokio::time::sleep(app.config.load_delay + Duration::from_millis(1)).await;
    app.tick();
    app.drain_messages();
}

async fn signed_in() -> App {
    let mut app = App::default();
    type_str(&mut app, "patient");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "password123");
    press(&mut app, KeyCode::Enter);
    assert!(app.view.is_authenticated());
    app
}

#[tokio::test(start_paused = true)]
async fn test_login_shows_dashboard_after_load() {
    let mut app = signed_in().await;
    let text = draw(&app, 100, 30);
    assert!(text.contains("Loading..."));
    assert!(text.contains(LOGIN_SUCCESS_MESSAGE));

    settle(&mut app).await;
    let text = draw(&app, 100, 30);
    assert!(text.contains("Welcome back, John!"));
    assert!(!text.contains("Loading..."));
}

#[tokio::test(start_paused = true)]
async fn test_wrong_password_shows_inline_error() {
    let mut app = App::default();
    type_str(&mut app, "patient");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "nope");
    press(&mut app, KeyCode::Enter);

    assert!(!app.view.is_authenticated());
    assert!(app.notifications.current().is_none());
    assert!(draw(&app, 80, 30).contains("Invalid Patient ID or password."));
}

#[tokio::test(start_paused = true)]
async fn test_footer_navigation_by_number() {
    let mut app = signed_in().await;
    settle(&mut app).await;

    press(&mut app, KeyCode::Char('3'));
    assert!(app.is_showing(ScreenId::Prescriptions));
    assert!(draw(&app, 100, 30).contains("Loading prescriptions..."));

    settle(&mut app).await;
    assert!(draw(&app, 100, 30).contains("Medication Reminder"));

    press(&mut app, KeyCode::Esc);
    assert!(app.is_showing(ScreenId::Home));
}

#[tokio::test(start_paused = true)]
async fn test_download_records_toast_expires() {
    let mut app = signed_in().await;
    press(&mut app, KeyCode::Char('2'));
    settle(&mut app).await;

    press(&mut app, KeyCode::Char('d'));
    assert!(draw(&app, 100, 30).contains("Downloading records..."));

    tokio::time::sleep(Duration::from_millis(3001)).await;
    app.drain_messages();
    assert!(!draw(&app, 100, 30).contains("Downloading records..."));
}

#[tokio::test(start_paused = true)]
async fn test_booking_flow() {
    let mut app = signed_in().await;
    press(&mut app, KeyCode::Char('4'));
    settle(&mut app).await;

    press(&mut app, KeyCode::Char('b'));
    assert!(draw(&app, 100, 30).contains("Book New Appointment"));
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "2025-03-01");
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.notifications.current().map(|n| n.message.as_str()),
        Some("Appointment booked successfully!")
    );
    assert!(!draw(&app, 100, 30).contains("Preferred Date"));
}

#[tokio::test(start_paused = true)]
async fn test_profile_settings_change_view() {
    let mut app = signed_in().await;
    press(&mut app, KeyCode::Char('5'));
    settle(&mut app).await;

    // High contrast row is selected first
    press(&mut app, KeyCode::Enter);
    assert!(app.view.is_dark_mode());

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view.font_size(), FontSize::Small);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view.font_size(), FontSize::Large);
    assert!(draw(&app, 100, 40).contains("High contrast (dark mode)  [on]"));
}

#[tokio::test(start_paused = true)]
async fn test_ctrl_t_toggles_theme_anywhere() {
    let mut app = App::default();
    ctrl(&mut app, 't');
    assert!(app.view.is_dark_mode());

    let mut app = signed_in().await;
    ctrl(&mut app, 't');
    assert!(app.view.is_dark_mode());
    ctrl(&mut app, 't');
    assert!(!app.view.is_dark_mode());
}

#[tokio::test(start_paused = true)]
async fn test_logout_returns_to_auth() {
    let mut app = signed_in().await;
    press(&mut app, KeyCode::Char('2'));
    ctrl(&mut app, 'l');

    assert!(!app.view.is_authenticated());
    assert!(app.screen.is_none());
    let text = draw(&app, 80, 30);
    assert!(text.contains("Welcome Back"));
    assert!(text.contains(LOGOUT_MESSAGE));

    // Digits are text again while signed out
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.view.active_screen(), ScreenId::Home);
}

#[tokio::test(start_paused = true)]
async fn test_messages_compose_and_send() {
    let mut app = signed_in().await;
    app.navigate(ScreenId::Messages).expect("navigate");
    settle(&mut app).await;

    type_str(&mut app, "Thanks, doctor");
    press(&mut app, KeyCode::Enter);
    let text = draw(&app, 100, 40);
    assert!(text.contains("Thanks, doctor"));
}

#[tokio::test(start_paused = true)]
async fn test_quit() {
    let mut app = signed_in().await;
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
