//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum is the single vocabulary of user actions. Key
//! bindings map to commands; handlers apply commands to the [`App`](crate::app::App).

use crate::screens::ScreenId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (Ctrl+C, q)
    Quit,
    /// Switch the active screen (1-5 footer keys)
    NavigateTo(ScreenId),
    /// Leave the current screen for home (Esc)
    Back,
    /// Light/dark palette (Ctrl+T)
    ToggleTheme,
    /// Open or close the header notification panel (n)
    ToggleNotificationPanel,
    /// Hide the current toast (Ctrl+D)
    DismissToast,
    /// Sign out (Ctrl+L)
    Logout,

    // =========================================================================
    // Lists
    // =========================================================================
    MoveUp,
    MoveDown,
    /// Enter on the selected item
    Activate,

    // =========================================================================
    // Text editing
    // =========================================================================
    InsertChar(char),
    Backspace,
    DeleteChar,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,

    // =========================================================================
    // Auth form
    // =========================================================================
    NextField,
    PrevField,
    SubmitAuth,
    /// Switch between Login and Sign Up (Ctrl+S)
    ToggleAuthMode,
    /// Show or hide password characters (Ctrl+R)
    TogglePasswordVisibility,

    // =========================================================================
    // Screen actions
    // =========================================================================
    /// Records: Download Records (PDF)
    DownloadRecords,
    /// Prescriptions: Request Refill on the selected card
    RequestRefill,
    /// Prescriptions: Mark as Taken on the selected card
    MarkTaken,
    /// Appointments: cancel the selected upcoming appointment
    CancelAppointment,
    /// Appointments: open the booking modal
    OpenBooking,
    /// Messages: send the compose box
    SendMessage,
    /// Profile: apply the selected accessibility row
    ApplyProfileRow,

    // =========================================================================
    // Modals
    // =========================================================================
    /// Close whatever modal is open (Esc)
    CloseModal,
    /// Booking modal: confirm (Enter)
    ConfirmBooking,
    /// Booking modal: move between department and date (Tab)
    ToggleBookingFocus,
    /// Booking modal: previous/next department
    CycleDepartment(i8),

    /// Consume the key without doing anything
    Noop,
}

impl Command {
    /// Whether running this command can change what is drawn.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }

    /// Commands that edit text in the focused field.
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::Backspace
                | Command::DeleteChar
                | Command::MoveCursorLeft
                | Command::MoveCursorRight
                | Command::MoveCursorHome
                | Command::MoveCursorEnd
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_does_not_mark_dirty() {
        assert!(!Command::Noop.marks_dirty());
        assert!(Command::MoveUp.marks_dirty());
        assert!(Command::NavigateTo(ScreenId::Profile).marks_dirty());
    }

    #[test]
    fn test_editing_commands() {
        assert!(Command::InsertChar('a').is_editing());
        assert!(Command::Backspace.is_editing());
        assert!(!Command::SubmitAuth.is_editing());
        assert!(!Command::SendMessage.is_editing());
    }
}
