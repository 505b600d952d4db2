//! Login/signup form state.

use crate::auth::{LoginRequest, SignupRequest};
use crate::error::AuthError;
use crate::widgets::InputBox;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Which field has focus. Only the first two exist in login mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    PatientId,
    Password,
    Phone,
    ConfirmPassword,
}

impl AuthField {
    fn order(mode: AuthMode) -> &'static [AuthField] {
        match mode {
            AuthMode::Login => &[AuthField::PatientId, AuthField::Password],
            AuthMode::Signup => &[
                AuthField::PatientId,
                AuthField::Phone,
                AuthField::Password,
                AuthField::ConfirmPassword,
            ],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthField::PatientId => "Patient ID",
            AuthField::Password => "Password",
            AuthField::Phone => "Phone Number",
            AuthField::ConfirmPassword => "Confirm Password",
        }
    }
}

/// What the form asks the app to do after a submit key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSubmit<'a> {
    Login(LoginRequest<'a>),
    Signup(SignupRequest<'a>),
}

#[derive(Debug, Clone)]
pub struct AuthForm {
    mode: AuthMode,
    focus: AuthField,
    patient_id: InputBox,
    phone: InputBox,
    password: InputBox,
    confirm_password: InputBox,
    show_password: bool,
    error: Option<AuthError>,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthForm {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::Login,
            focus: AuthField::PatientId,
            patient_id: InputBox::new().with_placeholder("e.g., patient"),
            phone: InputBox::new().with_placeholder("Phone number"),
            password: InputBox::masked().with_placeholder("e.g., password123"),
            confirm_password: InputBox::masked().with_placeholder("Repeat password"),
            show_password: false,
            error: None,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn focus(&self) -> AuthField {
        self.focus
    }

    pub fn error(&self) -> Option<AuthError> {
        self.error
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn field(&self, field: AuthField) -> &InputBox {
        match field {
            AuthField::PatientId => &self.patient_id,
            AuthField::Password => &self.password,
            AuthField::Phone => &self.phone,
            AuthField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn field_mut(&mut self, field: AuthField) -> &mut InputBox {
        match field {
            AuthField::PatientId => &mut self.patient_id,
            AuthField::Password => &mut self.password,
            AuthField::Phone => &mut self.phone,
            AuthField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Fields shown in the current mode, top to bottom.
    pub fn fields(&self) -> &'static [AuthField] {
        AuthField::order(self.mode)
    }

    pub fn focused_mut(&mut self) -> &mut InputBox {
        self.field_mut(self.focus)
    }

    /// Switch between login and signup. Clears the inline error.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        self.error = None;
        if !self.fields().contains(&self.focus) {
            self.focus = AuthField::PatientId;
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
        let masked = !self.show_password;
        self.password.set_masked(masked);
        self.confirm_password.set_masked(masked);
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + fields.len() - 1) % fields.len()];
    }

    /// Whether Enter on the focused field should submit rather than advance.
    pub fn on_last_field(&self) -> bool {
        self.fields().last() == Some(&self.focus)
    }

    /// Clear the inline error and build the request for the current mode.
    pub fn submit(&mut self) -> AuthSubmit<'_> {
        self.error = None;
        match self.mode {
            AuthMode::Login => AuthSubmit::Login(LoginRequest {
                patient_id: self.patient_id.content(),
                password: self.password.content(),
            }),
            AuthMode::Signup => AuthSubmit::Signup(SignupRequest {
                patient_id: self.patient_id.content(),
                phone: self.phone.content(),
                password: self.password.content(),
                confirm_password: self.confirm_password.content(),
            }),
        }
    }

    pub fn set_error(&mut self, error: AuthError) {
        self.error = Some(error);
    }

    /// Back to an empty login form, e.g. after logout.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut AuthForm, text: &str) {
        for c in text.chars() {
            form.focused_mut().insert_char(c);
        }
    }

    #[test]
    fn test_login_submit_builds_request() {
        let mut form = AuthForm::new();
        type_text(&mut form, "patient");
        form.focus_next();
        type_text(&mut form, "password123");
        assert!(form.on_last_field());
        match form.submit() {
            AuthSubmit::Login(req) => {
                assert_eq!(req.patient_id, "patient");
                assert_eq!(req.password, "password123");
            }
            other => panic!("expected login, got {:?}", other),
        }
    }

    #[test]
    fn test_focus_wraps_in_each_mode() {
        let mut form = AuthForm::new();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), AuthField::PatientId);

        form.toggle_mode();
        form.focus_prev();
        assert_eq!(form.focus(), AuthField::ConfirmPassword);
    }

    #[test]
    fn test_toggle_mode_clears_error_and_fixes_focus() {
        let mut form = AuthForm::new();
        form.toggle_mode();
        form.focus_prev();
        form.set_error(AuthError::PasswordMismatch);
        form.toggle_mode();
        assert_eq!(form.mode(), AuthMode::Login);
        assert_eq!(form.error(), None);
        assert_eq!(form.focus(), AuthField::PatientId);
    }

    #[test]
    fn test_submit_clears_previous_error() {
        let mut form = AuthForm::new();
        form.set_error(AuthError::InvalidCredentials);
        let _ = form.submit();
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_password_visibility_toggles_mask() {
        let mut form = AuthForm::new();
        assert!(form.field(AuthField::Password).is_masked());
        form.toggle_password_visibility();
        assert!(form.show_password());
        assert!(!form.field(AuthField::Password).is_masked());
        assert!(!form.field(AuthField::ConfirmPassword).is_masked());
    }

    #[test]
    fn test_signup_request_fields() {
        let mut form = AuthForm::new();
        form.toggle_mode();
        type_text(&mut form, "new");
        form.focus_next();
        type_text(&mut form, "555");
        form.focus_next();
        type_text(&mut form, "pw");
        form.focus_next();
        type_text(&mut form, "pw");
        match form.submit() {
            AuthSubmit::Signup(req) => {
                assert_eq!(req.phone, "555");
                assert_eq!(req.confirm_password, "pw");
            }
            other => panic!("expected signup, got {:?}", other),
        }
    }
}
