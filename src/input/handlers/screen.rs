//! Screen action command handlers.

use crate::app::App;
use crate::input::Command;

/// Handles actions of the mounted screen. Actions for another screen are
/// ignored by the app methods themselves.
pub fn handle_screen_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::DownloadRecords => app.download_records(),
        Command::RequestRefill => app.request_refill(),
        Command::MarkTaken => app.mark_taken(),
        Command::CancelAppointment => app.cancel_appointment(),
        Command::OpenBooking => app.open_booking(),
        Command::SendMessage => app.send_message(),
        Command::ApplyProfileRow => app.apply_profile_row(),
        _ => return false,
    }
    true
}
