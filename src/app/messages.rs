//! AppMessage enum for async communication within the application.

/// Messages sent to the UI loop by spawned tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The expiry timer of toast `id` fired
    ToastExpired { id: u64 },
}
