//! Error handling for the portal.
//!
//! - **Domain errors**: [`AuthError`] (inline form errors), [`ResourceError`]
//!   (screen load failures), [`NavigationError`] and [`UiError`]
//! - **Unified error**: [`PortalError`] with `#[from]` conversions
//! - **Categories**: [`ErrorCategory`] decides where an error is surfaced
//!
//! | Category | Surfaced as | Retryable |
//! |----------|-------------|-----------|
//! | User | Inline form error | Yes |
//! | Data | Screen fallback text | Yes (remount) |
//! | Client | Log warning | No |
//! | System | stderr before/after the TUI | No |

mod auth;
mod category;
mod portal_error;
mod resource;
mod ui;

pub use auth::AuthError;
pub use category::ErrorCategory;
pub use portal_error::PortalError;
pub use resource::ResourceError;
pub use ui::{NavigationError, UiError};

/// Result alias for fallible portal operations.
pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::screens::ScreenId;

    #[test]
    fn test_error_unification() {
        let auth: PortalError = AuthError::PasswordMismatch.into();
        let res: PortalError = ResourceError::load_failed("records", "boom").into();
        let nav: PortalError = NavigationError::NotAuthenticated {
            requested: ScreenId::Messages,
        }
        .into();
        let ui: PortalError = UiError::ChannelClosed.into();

        assert_eq!(auth.category(), ErrorCategory::User);
        assert_eq!(res.category(), ErrorCategory::Data);
        assert_eq!(nav.category(), ErrorCategory::Client);
        assert_eq!(ui.category(), ErrorCategory::System);

        for err in [&auth, &res, &nav, &ui] {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_auth_message_passes_through() {
        let err: PortalError = AuthError::InvalidCredentials.into();
        assert_eq!(err.user_message(), "Invalid Patient ID or password.");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PortalError = json_err.into();
        assert!(matches!(err, PortalError::Decode(_)));
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.user_message(), "Failed to fetch data");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: PortalError = io_err.into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert!(!err.is_retryable());
    }
}
