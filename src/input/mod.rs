//! Keyboard input handling.
//!
//! All input goes through a command pattern:
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> handler -> App mutation
//! ```
//!
//! - [`command`] - the [`Command`] enum
//! - [`context`] - [`InputContext`], the state that decides how keys are read
//! - [`registry`] - [`CommandRegistry`], key to command mapping
//! - [`keybindings`] - default bindings
//! - [`handlers`] - command execution

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType, Surface};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crossterm::event::KeyEvent;

use crate::app::App;
use crate::state::screens::BookingField;
use crate::state::ScreenState;

impl App {
    /// Snapshot of the state the registry needs to interpret a key.
    pub fn build_input_context(&self) -> InputContext {
        if !self.view.is_authenticated() {
            return InputContext::new().with_surface(Surface::Auth).with_editing(true);
        }

        let booking = match self.screen.as_ref() {
            Some(ScreenState::Appointments(s)) => s.booking.as_ref(),
            _ => None,
        };
        let modal = if self.notification_panel_open {
            ModalType::NotificationPanel
        } else if booking.is_some() {
            ModalType::Booking
        } else {
            ModalType::None
        };
        let editing = match modal {
            ModalType::Booking => booking.is_some_and(|b| b.focus == BookingField::Date),
            ModalType::NotificationPanel => false,
            ModalType::None => self.screen.as_ref().is_some_and(ScreenState::is_editing),
        };

        InputContext::new()
            .with_screen(self.view.active_screen())
            .with_modal(modal)
            .with_editing(editing)
    }

    /// Translate a key press and execute the resulting command.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        let context = self.build_input_context();
        match self.commands.dispatch(key, &context) {
            Some(cmd) => self.execute_command(cmd),
            None => false,
        }
    }

    /// Insert pasted text into the focused field. Line breaks are dropped.
    pub fn handle_paste(&mut self, text: &str) -> bool {
        let Some(input) = self.focused_input_mut() else {
            return false;
        };
        for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
            input.insert_char(c);
        }
        self.mark_dirty();
        true
    }

    /// Execute a command, trying handlers from most to least specific.
    ///
    /// Returns `true` if the command was handled.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        tracing::debug!("execute_command: {:?}", cmd);
        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        if handlers::handle_global_command(self, &cmd) {
            return true;
        }
        if !self.view.is_authenticated() {
            return handlers::handle_auth_command(self, &cmd);
        }
        if handlers::handle_modal_command(self, &cmd) {
            return true;
        }
        if handlers::handle_editing_command(self, &cmd) {
            return true;
        }
        if handlers::handle_navigation_command(self, &cmd) {
            return true;
        }
        handlers::handle_screen_command(self, &cmd)
    }
}
