//! Unified error type for the portal.
//!
//! `PortalError` consolidates the domain errors so startup code and the
//! event loop can propagate any of them with `?`.

use thiserror::Error;

use super::auth::AuthError;
use super::category::ErrorCategory;
use super::resource::ResourceError;
use super::ui::{NavigationError, UiError};

/// Unified error type for the portal.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Ui(#[from] UiError),

    /// Fixture or config decoding failed.
    #[error("Invalid data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PortalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortalError::Auth(err) => err.category(),
            PortalError::Resource(err) => err.category(),
            PortalError::Navigation(err) => err.category(),
            PortalError::Ui(err) => err.category(),
            PortalError::Decode(_) => ErrorCategory::Data,
            PortalError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// User-facing message.
    pub fn user_message(&self) -> String {
        match self {
            PortalError::Auth(err) => err.user_message(),
            PortalError::Resource(err) => err.user_message(),
            PortalError::Decode(_) => "Failed to fetch data".to_string(),
            other => other.to_string(),
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PortalError::Auth(err) => err.error_code(),
            PortalError::Resource(err) => err.error_code(),
            PortalError::Navigation(err) => err.error_code(),
            PortalError::Ui(err) => err.error_code(),
            PortalError::Decode(_) => "E_DATA_DECODE",
            PortalError::Io(_) => "E_SYS_IO",
        }
    }
}
