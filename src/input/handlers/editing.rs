//! Editing command handlers.

use crate::app::App;
use crate::input::Command;
use crate::widgets::InputBox;

/// Apply an editing command to `input`.
pub fn apply_edit(input: &mut InputBox, cmd: &Command) -> bool {
    match cmd {
        Command::InsertChar(c) => input.insert_char(*c),
        Command::Backspace => input.backspace(),
        Command::DeleteChar => input.delete_char(),
        Command::MoveCursorLeft => input.move_cursor_left(),
        Command::MoveCursorRight => input.move_cursor_right(),
        Command::MoveCursorHome => input.move_cursor_home(),
        Command::MoveCursorEnd => input.move_cursor_end(),
        _ => return false,
    }
    true
}

/// Handles editing commands against whichever field has focus.
pub fn handle_editing_command(app: &mut App, cmd: &Command) -> bool {
    if !cmd.is_editing() {
        return false;
    }
    match app.focused_input_mut() {
        Some(input) => apply_edit(input, cmd),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_edit() {
        let mut input = InputBox::new();
        assert!(apply_edit(&mut input, &Command::InsertChar('a')));
        assert!(apply_edit(&mut input, &Command::InsertChar('b')));
        assert!(apply_edit(&mut input, &Command::MoveCursorHome));
        assert!(apply_edit(&mut input, &Command::DeleteChar));
        assert_eq!(input.content(), "b");
        assert!(!apply_edit(&mut input, &Command::SubmitAuth));
    }

    #[test]
    fn test_auth_form_always_has_focus() {
        let mut app = App::default();
        assert!(handle_editing_command(&mut app, &Command::InsertChar('x')));
        assert_eq!(app.auth_form.focused_mut().content(), "x");
    }

    #[tokio::test(start_paused = true)]
    async fn test_editing_without_focus_is_unhandled() {
        let mut app = App::default();
        let request = crate::auth::LoginRequest {
            patient_id: "patient",
            password: "password123",
        };
        app.view
            .login(&request, &mut app.notifications)
            .expect("login");
        app.navigate(crate::screens::ScreenId::Records).expect("navigate");
        assert!(app.focused_input_mut().is_none());
        assert!(!handle_editing_command(&mut app, &Command::InsertChar('x')));
    }
}
