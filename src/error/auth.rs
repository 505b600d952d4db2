//! Authentication error types.
//!
//! Auth errors are recovered on the auth form itself: they are rendered
//! inline under the fields and never posted as a toast.

use thiserror::Error;

use super::ErrorCategory;

/// Reasons a login or signup submission is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Patient ID / password pair does not match the demo account.
    #[error("Invalid Patient ID or password.")]
    InvalidCredentials,

    /// Signup password and confirmation differ.
    #[error("Passwords do not match.")]
    PasswordMismatch,

    /// A required signup field is empty.
    #[error("Please fill all fields.")]
    MissingFields,
}

impl AuthError {
    /// Text rendered inline on the auth form.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "E_AUTH_INVALID",
            AuthError::PasswordMismatch => "E_AUTH_MISMATCH",
            AuthError::MissingFields => "E_AUTH_MISSING",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_form_copy() {
        assert_eq!(
            AuthError::InvalidCredentials.user_message(),
            "Invalid Patient ID or password."
        );
        assert_eq!(AuthError::PasswordMismatch.user_message(), "Passwords do not match.");
        assert_eq!(AuthError::MissingFields.user_message(), "Please fill all fields.");
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            AuthError::InvalidCredentials.error_code(),
            AuthError::PasswordMismatch.error_code(),
            AuthError::MissingFields.error_code(),
        ];
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }
}
