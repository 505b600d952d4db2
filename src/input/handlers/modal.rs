//! Modal command handlers.

use crate::app::App;
use crate::input::{Command, ModalType};

/// Handles commands for the open modal, if any.
pub fn handle_modal_command(app: &mut App, cmd: &Command) -> bool {
    match app.build_input_context().modal {
        ModalType::None => false,
        ModalType::NotificationPanel => match cmd {
            Command::CloseModal => {
                app.close_modal();
                true
            }
            Command::ToggleNotificationPanel => {
                app.toggle_notification_panel();
                true
            }
            _ => false,
        },
        ModalType::Booking => match cmd {
            Command::CloseModal => {
                app.close_modal();
                true
            }
            Command::ConfirmBooking => {
                app.confirm_booking();
                true
            }
            Command::ToggleBookingFocus => {
                app.toggle_booking_focus();
                true
            }
            Command::CycleDepartment(delta) => {
                app.cycle_department(*delta);
                true
            }
            _ => false,
        },
    }
}
