//! Command handlers.
//!
//! Each handler returns `true` if it consumed the command.
//! - [`auth`] - the signed-out form
//! - [`editing`] - text in the focused field
//! - [`modal`] - notification panel and booking modal
//! - [`navigation`] - global and screen-to-screen commands
//! - [`screen`] - actions of the mounted screen

pub mod auth;
pub mod editing;
pub mod modal;
pub mod navigation;
pub mod screen;

pub use auth::*;
pub use editing::*;
pub use modal::*;
pub use navigation::*;
pub use screen::*;
