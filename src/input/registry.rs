//! Command registry for dispatching keyboard input to commands.
//!
//! Priority order:
//! 1. Ctrl+C, always
//! 2. The auth form, while signed out
//! 3. The open modal, which swallows every key it does not bind
//! 4. A focused text field, where printable keys are text
//! 5. Screen bindings, then global bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, ModalType, Surface};
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::screens::ScreenId;

#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Map a key event to a command in `context`, or `None` to ignore it.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }
        let combo = KeyCombo::new(key.code, key.modifiers);

        match context.surface {
            Surface::Auth => self.dispatch_auth(&combo),
            Surface::Screen(screen) => {
                if context.is_modal_active() {
                    return Some(self.dispatch_modal(&combo, context));
                }
                if context.editing {
                    return self.dispatch_editing(screen, &combo);
                }
                self.config
                    .get_screen(screen, &combo)
                    .or_else(|| self.config.get_global(&combo))
                    .cloned()
            }
        }
    }

    /// Auth bindings, then text, then Ctrl-modified globals (theme, toast).
    fn dispatch_auth(&self, combo: &KeyCombo) -> Option<Command> {
        if let Some(cmd) = self.config.get_auth(combo) {
            return Some(cmd.clone());
        }
        if let Some(cmd) = self.text_command(combo) {
            return Some(cmd);
        }
        if combo.modifiers.contains(KeyModifiers::CONTROL) {
            return self.config.get_global(combo).cloned();
        }
        None
    }

    fn dispatch_modal(&self, combo: &KeyCombo, context: &InputContext) -> Command {
        if let Some(cmd) = self.config.get_modal(context.modal, combo) {
            return cmd.clone();
        }
        match context.modal {
            ModalType::Booking if context.editing => {
                self.text_command(combo).unwrap_or(Command::Noop)
            }
            ModalType::Booking => match combo.code {
                KeyCode::Left | KeyCode::Up => Command::CycleDepartment(-1),
                KeyCode::Right | KeyCode::Down => Command::CycleDepartment(1),
                _ => Command::Noop,
            },
            ModalType::NotificationPanel | ModalType::None => Command::Noop,
        }
    }

    /// A text field has focus: screen bindings (e.g. Enter to send), then
    /// editing keys and text, then non-text globals such as Esc.
    fn dispatch_editing(&self, screen: ScreenId, combo: &KeyCombo) -> Option<Command> {
        if let Some(cmd) = self.config.get_screen(screen, combo) {
            return Some(cmd.clone());
        }
        if let Some(cmd) = self.text_command(combo) {
            return Some(cmd);
        }
        self.config.get_global(combo).cloned()
    }

    /// Editing keys and printable characters.
    fn text_command(&self, combo: &KeyCombo) -> Option<Command> {
        if let Some(cmd) = self.config.get_editing(combo) {
            return Some(cmd.clone());
        }
        match combo.code {
            KeyCode::Char(c) if combo.is_text() => Some(Command::InsertChar(c)),
            _ => None,
        }
    }
}
