//! Terminal management with RAII cleanup.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen and restores it when dropped. [`setup_panic_hook`] restores it on
//! a panic too, before the panic message is printed.

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::UiError;

pub type PortalTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal on drop. Cleanup runs at most once.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the UI.
pub struct TerminalManager {
    terminal: PortalTerminal,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and clear it.
    pub fn new() -> Result<Self, UiError> {
        enable_raw_mode().map_err(UiError::TerminalInitFailed)?;
        // From here on the guard undoes whatever succeeded.
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout).map_err(UiError::TerminalInitFailed)?;

        let mut terminal =
            Terminal::new(CrosstermBackend::new(stdout)).map_err(UiError::TerminalInitFailed)?;
        terminal.clear().map_err(UiError::TerminalInitFailed)?;
        tracing::debug!("terminal initialised");

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut PortalTerminal {
        &mut self.terminal
    }

    /// Restore the terminal now instead of on drop.
    pub fn restore(&mut self) {
        self.guard.cleanup();
        let _ = self.terminal.show_cursor();
    }
}
