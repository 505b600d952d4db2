//! Global and navigation command handlers.

use crate::app::App;
use crate::input::Command;

/// Commands that work on every surface.
pub fn handle_global_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::Quit => app.quit(),
        Command::ToggleTheme => app.view.toggle_theme(),
        Command::DismissToast => app.notifications.dismiss(),
        Command::Noop => {}
        _ => return false,
    }
    true
}

/// Screen-to-screen movement and list selection while signed in.
pub fn handle_navigation_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::NavigateTo(screen) => {
            if let Err(e) = app.navigate(*screen) {
                tracing::warn!("{}: {}", e.error_code(), e);
            }
        }
        Command::Back => app.back(),
        Command::Logout => app.logout(),
        Command::ToggleNotificationPanel => app.toggle_notification_panel(),
        Command::MoveUp => app.move_selection(-1),
        Command::MoveDown => app.move_selection(1),
        Command::Activate => app.activate(),
        _ => return false,
    }
    true
}
