//! Auth form command handlers.

use super::editing::handle_editing_command;
use crate::app::App;
use crate::input::Command;

/// Handles commands while signed out.
pub fn handle_auth_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::NextField => app.auth_form.focus_next(),
        Command::PrevField => app.auth_form.focus_prev(),
        Command::SubmitAuth => {
            if app.auth_form.on_last_field() {
                app.submit_auth();
            } else {
                app.auth_form.focus_next();
            }
        }
        Command::ToggleAuthMode => app.auth_form.toggle_mode(),
        Command::TogglePasswordVisibility => app.auth_form.toggle_password_visibility(),
        _ => return handle_editing_command(app, cmd),
    }
    true
}
