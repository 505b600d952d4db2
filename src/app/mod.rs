//! Application state and logic for the portal.
//!
//! [`App`] is the single owner of all UI state. Every mutation happens on
//! the task that owns it: key presses arrive through
//! [`execute_command`](App::execute_command), timer callbacks arrive as
//! [`AppMessage`]s, and finished loads are picked up on [`tick`](App::tick).

mod actions;
mod handlers;
mod messages;
mod navigation;

pub use messages::AppMessage;

use tokio::sync::mpsc;

use crate::input::CommandRegistry;
use crate::screens::ScreenRegistry;
use crate::startup::PortalConfig;
use crate::state::{AuthForm, NotificationCenter, ScreenState, ViewState};

/// Main application state
pub struct App {
    /// Authentication, active screen and presentation preferences
    pub view: ViewState,
    /// Single-slot toast
    pub notifications: NotificationCenter,
    /// Screen titles and renderers
    pub registry: ScreenRegistry,
    /// Key to command mapping
    pub commands: CommandRegistry,
    /// Login/signup form, used while signed out
    pub auth_form: AuthForm,
    /// The mounted screen; `None` while signed out
    pub screen: Option<ScreenState>,
    /// Header bell panel visibility
    pub notification_panel_open: bool,
    pub config: PortalConfig,
    /// Sender handed to timers
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub should_quit: bool,
    /// Set whenever something visible changed since the last draw
    pub needs_redraw: bool,
    pub tick_count: u64,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("view", &self.view)
            .field("screen", &self.screen.as_ref().map(ScreenState::screen_id))
            .field("toast", &self.notifications.current())
            .field("notification_panel_open", &self.notification_panel_open)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Create a signed-out app with the given configuration.
    pub fn new(config: PortalConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let notifications = NotificationCenter::new(config.toast_duration, message_tx.clone());
        Self {
            view: ViewState::with_preferences(config.initial_dark_mode, config.initial_font_size),
            notifications,
            registry: ScreenRegistry::new(),
            commands: CommandRegistry::new(),
            auth_form: AuthForm::new(),
            screen: None,
            notification_panel_open: false,
            config,
            message_tx,
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    /// Title for the header: the registry title of the active screen.
    pub fn title(&self) -> &'static str {
        self.registry.title_for(self.view.active_screen())
    }

    /// Advance one tick and pick up finished loads.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if let Some(screen) = self.screen.as_mut() {
            if screen.poll() {
                self.needs_redraw = true;
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(PortalConfig::default())
    }
}
