//! Default keybindings for the portal.
//!
//! Bindings are grouped by where they apply: globally while signed in, on
//! the auth form, per modal, per screen, and while a text field has focus.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::screens::{ScreenId, NAV_ITEMS};

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Whether this combo produces printable text.
    pub fn is_text(&self) -> bool {
        matches!(self.code, KeyCode::Char(_))
            && !self
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active on every signed-in screen
    pub global: HashMap<KeyCombo, Command>,
    /// Auth form
    pub auth: HashMap<KeyCombo, Command>,
    /// Per modal
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Per screen
    pub screen: HashMap<ScreenId, HashMap<KeyCombo, Command>>,
    /// While a text field has focus
    pub editing: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            auth: HashMap::new(),
            modal: HashMap::new(),
            screen: HashMap::new(),
            editing: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_auth_bindings();
        config.setup_modal_bindings();
        config.setup_screen_bindings();
        config.setup_editing_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        for (screen, _, key) in NAV_ITEMS {
            self.global
                .insert(KeyCombo::plain(KeyCode::Char(key)), Command::NavigateTo(screen));
        }
        self.global
            .insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.global.insert(
            KeyCombo::plain(KeyCode::Char('n')),
            Command::ToggleNotificationPanel,
        );
        self.global.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('t')), Command::ToggleTheme);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('d')), Command::DismissToast);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('l')), Command::Logout);
        self.global.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        self.global
            .insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        self.global
            .insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
    }

    fn setup_auth_bindings(&mut self) {
        self.auth.insert(KeyCombo::plain(KeyCode::Tab), Command::NextField);
        self.auth.insert(KeyCombo::plain(KeyCode::Down), Command::NextField);
        self.auth
            .insert(KeyCombo::shift(KeyCode::BackTab), Command::PrevField);
        self.auth.insert(KeyCombo::plain(KeyCode::BackTab), Command::PrevField);
        self.auth.insert(KeyCombo::plain(KeyCode::Up), Command::PrevField);
        self.auth
            .insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitAuth);
        self.auth
            .insert(KeyCombo::ctrl(KeyCode::Char('s')), Command::ToggleAuthMode);
        self.auth.insert(
            KeyCombo::ctrl(KeyCode::Char('r')),
            Command::TogglePasswordVisibility,
        );
        self.auth.insert(KeyCombo::plain(KeyCode::Esc), Command::Quit);
    }

    fn setup_modal_bindings(&mut self) {
        let mut panel = HashMap::new();
        panel.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseModal);
        panel.insert(
            KeyCombo::plain(KeyCode::Char('n')),
            Command::ToggleNotificationPanel,
        );
        panel.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.modal.insert(ModalType::NotificationPanel, panel);

        let mut booking = HashMap::new();
        booking.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseModal);
        booking.insert(KeyCombo::plain(KeyCode::Enter), Command::ConfirmBooking);
        booking.insert(KeyCombo::plain(KeyCode::Tab), Command::ToggleBookingFocus);
        booking.insert(
            KeyCombo::plain(KeyCode::BackTab),
            Command::ToggleBookingFocus,
        );
        booking.insert(
            KeyCombo::shift(KeyCode::BackTab),
            Command::ToggleBookingFocus,
        );
        self.modal.insert(ModalType::Booking, booking);
    }

    fn setup_screen_bindings(&mut self) {
        let mut records = HashMap::new();
        records.insert(KeyCombo::plain(KeyCode::Char('d')), Command::DownloadRecords);
        self.screen.insert(ScreenId::Records, records);

        let mut prescriptions = HashMap::new();
        prescriptions.insert(KeyCombo::plain(KeyCode::Char('r')), Command::RequestRefill);
        prescriptions.insert(KeyCombo::plain(KeyCode::Char('t')), Command::MarkTaken);
        prescriptions.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::Activate);
        self.screen.insert(ScreenId::Prescriptions, prescriptions);

        let mut labs = HashMap::new();
        labs.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::Activate);
        self.screen.insert(ScreenId::LabResults, labs);

        let mut appointments = HashMap::new();
        appointments.insert(
            KeyCombo::plain(KeyCode::Char('c')),
            Command::CancelAppointment,
        );
        appointments.insert(KeyCombo::plain(KeyCode::Char('b')), Command::OpenBooking);
        self.screen.insert(ScreenId::Appointments, appointments);

        let mut messages = HashMap::new();
        messages.insert(KeyCombo::plain(KeyCode::Enter), Command::SendMessage);
        self.screen.insert(ScreenId::Messages, messages);

        let mut profile = HashMap::new();
        profile.insert(KeyCombo::plain(KeyCode::Enter), Command::ApplyProfileRow);
        profile.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::ApplyProfileRow);
        self.screen.insert(ScreenId::Profile, profile);
    }

    fn setup_editing_bindings(&mut self) {
        self.editing
            .insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        self.editing
            .insert(KeyCombo::plain(KeyCode::Delete), Command::DeleteChar);
        self.editing
            .insert(KeyCombo::plain(KeyCode::Left), Command::MoveCursorLeft);
        self.editing
            .insert(KeyCombo::plain(KeyCode::Right), Command::MoveCursorRight);
        self.editing
            .insert(KeyCombo::plain(KeyCode::Home), Command::MoveCursorHome);
        self.editing
            .insert(KeyCombo::plain(KeyCode::End), Command::MoveCursorEnd);
        self.editing
            .insert(KeyCombo::ctrl(KeyCode::Char('a')), Command::MoveCursorHome);
        self.editing
            .insert(KeyCombo::ctrl(KeyCode::Char('e')), Command::MoveCursorEnd);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_auth(&self, combo: &KeyCombo) -> Option<&Command> {
        self.auth.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal)?.get(combo)
    }

    pub fn get_screen(&self, screen: ScreenId, combo: &KeyCombo) -> Option<&Command> {
        self.screen.get(&screen)?.get(combo)
    }

    pub fn get_editing(&self, combo: &KeyCombo) -> Option<&Command> {
        self.editing.get(combo)
    }
}
