//! Credential checks for the demo portal.
//!
//! There is no account store: login accepts one fixed pair and signup only
//! validates the form before behaving like a successful login.

use crate::data::{DEMO_PASSWORD, DEMO_PATIENT_ID};
use crate::error::AuthError;

/// Fields submitted by the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginRequest<'a> {
    pub patient_id: &'a str,
    pub password: &'a str,
}

/// Fields submitted by the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupRequest<'a> {
    pub patient_id: &'a str,
    pub phone: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Accept only the demo account.
pub fn verify_login(request: &LoginRequest<'_>) -> Result<(), AuthError> {
    if request.patient_id == DEMO_PATIENT_ID && request.password == DEMO_PASSWORD {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// Validate a signup form.
///
/// Checks run in a fixed order and the first failure wins: password
/// confirmation first, then field completeness.
pub fn validate_signup(request: &SignupRequest<'_>) -> Result<(), AuthError> {
    if request.password != request.confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    if request.patient_id.is_empty() || request.phone.is_empty() || request.password.is_empty() {
        return Err(AuthError::MissingFields);
    }
    Ok(())
}
