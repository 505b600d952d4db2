//! Resource loading error types.

use thiserror::Error;

use super::ErrorCategory;

/// Failure of an [`AsyncResource`](crate::state::AsyncResource) load.
///
/// The mock producers never fail in practice; the variant exists so screens
/// can render a fallback and so a real data source can report problems later.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// The producer returned an error or its task went away before answering.
    #[error("Failed to fetch data ({resource}): {message}")]
    LoadFailed { resource: String, message: String },
}

impl ResourceError {
    pub fn load_failed(resource: impl Into<String>, message: impl Into<String>) -> Self {
        ResourceError::LoadFailed {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Text rendered by a screen in place of its content.
    pub fn user_message(&self) -> String {
        "Failed to fetch data".to_string()
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ResourceError::LoadFailed { .. } => "E_RES_LOAD",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Data
    }

    /// Name of the resource that failed.
    pub fn resource(&self) -> &str {
        match self {
            ResourceError::LoadFailed { resource, .. } => resource,
        }
    }
}
