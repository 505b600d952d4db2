//! Terminal and event-loop error types.

use thiserror::Error;

use super::ErrorCategory;
use crate::screens::ScreenId;

/// UI-specific error variants.
#[derive(Debug, Error)]
pub enum UiError {
    /// Raw mode, alternate screen or backend creation failed.
    #[error("Terminal initialization failed: {0}")]
    TerminalInitFailed(#[source] std::io::Error),

    /// A frame could not be drawn.
    #[error("Failed to render {component}: {message}")]
    RenderFailed { component: String, message: String },

    /// The app message channel was closed while the loop was still running.
    #[error("App message channel closed")]
    ChannelClosed,
}

impl UiError {
    /// Whether the UI can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, UiError::RenderFailed { .. })
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::TerminalInitFailed(_) => "E_UI_TERM_INIT",
            UiError::RenderFailed { .. } => "E_UI_RENDER",
            UiError::ChannelClosed => "E_UI_CHANNEL",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::System
    }
}

/// Rejected [`ViewState`](crate::state::ViewState) transitions.
///
/// Raised when the shell asks for something the current auth state forbids.
/// The shell never does this on purpose, so seeing one in the log means a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("cannot navigate to {requested:?} while signed out")]
    NotAuthenticated { requested: ScreenId },
}

impl NavigationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            NavigationError::NotAuthenticated { .. } => "E_NAV_UNAUTH",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Client
    }
}
