//! Error category classification.
//!
//! Categories decide where an error is surfaced: inline on a form,
//! as a screen fallback, or on stderr before the terminal is taken over.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The user can fix it by changing input (wrong password, empty field).
    User,

    /// A data source failed to produce a value (fixture decode, loader aborted).
    /// Recovered by remounting the screen.
    Data,

    /// The program asked for a transition that its current state forbids.
    Client,

    /// Terminal or OS failure.
    System,
}

impl ErrorCategory {
    /// Whether the user can recover by trying the same action again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::User | ErrorCategory::Data)
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::User => "user",
            ErrorCategory::Data => "data",
            ErrorCategory::Client => "client",
            ErrorCategory::System => "system",
        }
    }

    /// Suggested recovery action shown next to the error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::User => "Check the highlighted fields and submit again.",
            ErrorCategory::Data => "Leave the screen and open it again to reload.",
            ErrorCategory::Client => "This is a bug. Please report it.",
            ErrorCategory::System => "Check your terminal and restart the portal.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
