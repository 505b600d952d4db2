//! UI-agnostic application state.

pub mod auth_form;
pub mod notifications;
pub mod resource;
pub mod screens;
pub mod view_state;

pub use auth_form::{AuthField, AuthForm, AuthMode, AuthSubmit};
pub use notifications::{Notification, NotificationCenter, DEFAULT_TOAST_DURATION};
pub use resource::{AsyncResource, LoadState};
pub use screens::ScreenState;
pub use view_state::{FontSize, ViewState, LOGIN_SUCCESS_MESSAGE, LOGOUT_MESSAGE};
