//! Input context for determining which commands are available.
//!
//! The [`InputContext`] is a snapshot of the app state that decides how a
//! key is interpreted: which surface is showing, which modal is open, and
//! whether a text field has focus.

use crate::screens::ScreenId;

/// What fills the body of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Surface {
    /// Signed out: the login/signup form
    #[default]
    Auth,
    /// Signed in: one of the portal screens
    Screen(ScreenId),
}

/// The modal currently layered over the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    /// Header bell panel
    NotificationPanel,
    /// Appointments "Book New Appointment"
    Booking,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputContext {
    pub surface: Surface,
    pub modal: ModalType,
    /// A text field has focus, so printable keys are text
    pub editing: bool,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    pub fn with_screen(self, screen: ScreenId) -> Self {
        self.with_surface(Surface::Screen(screen))
    }

    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn with_editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.surface, Surface::Screen(_))
    }

    pub fn screen(&self) -> Option<ScreenId> {
        match self.surface {
            Surface::Screen(screen) => Some(screen),
            Surface::Auth => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_auth_surface() {
        let ctx = InputContext::new();
        assert_eq!(ctx.surface, Surface::Auth);
        assert!(!ctx.is_signed_in());
        assert!(!ctx.is_modal_active());
        assert_eq!(ctx.screen(), None);
    }

    #[test]
    fn test_builders() {
        let ctx = InputContext::new()
            .with_screen(ScreenId::Appointments)
            .with_modal(ModalType::Booking)
            .with_editing(true);
        assert!(ctx.is_signed_in());
        assert!(ctx.is_modal_active());
        assert!(ctx.editing);
        assert_eq!(ctx.screen(), Some(ScreenId::Appointments));
    }
}
