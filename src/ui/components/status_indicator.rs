//! Status Indicator Component
//!
//! Renders what a screen shows in place of content whose resource is not
//! ready: a spinner while loading, or the empty text and failure reason.

use ratatui::text::{Line, Span};

use crate::state::{AsyncResource, LoadState};
use crate::ui::helpers::spinner_frame;
use crate::ui::theme::Theme;

/// Status indicator types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Still loading
    Spinner { message: String, tick: u64 },
    /// Load ended without a value
    Empty {
        message: String,
        reason: Option<String>,
        hint: Option<&'static str>,
    },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, tick: u64) -> Self {
        Self::Spinner {
            message: message.into(),
            tick,
        }
    }

    pub fn empty(message: impl Into<String>, reason: Option<String>) -> Self {
        Self::Empty {
            message: message.into(),
            reason,
            hint: None,
        }
    }

    /// Attach a recovery hint to an `Empty` indicator.
    pub fn with_hint(mut self, text: &'static str) -> Self {
        if let Self::Empty { hint, .. } = &mut self {
            *hint = Some(text);
        }
        self
    }
}

/// Indicator for `resource`, or `None` once it holds a value.
pub fn resource_status<T>(
    resource: &AsyncResource<T>,
    loading: &str,
    empty: &str,
    tick: u64,
) -> Option<StatusIndicatorType> {
    match resource.state() {
        LoadState::Ready => None,
        LoadState::Idle | LoadState::Loading => Some(StatusIndicatorType::spinner(loading, tick)),
        LoadState::Failed => {
            let indicator =
                StatusIndicatorType::empty(empty, resource.error().map(|e| e.user_message()));
            Some(match resource.error() {
                Some(e) => indicator.with_hint(e.category().recovery_hint()),
                None => indicator,
            })
        }
    }
}

/// Render a status indicator as lines
pub fn render_status_indicator(indicator: &StatusIndicatorType, theme: &Theme) -> Vec<Line<'static>> {
    match indicator {
        StatusIndicatorType::Spinner { message, tick } => vec![
            Line::default(),
            Line::from(vec![
                Span::styled(format!("  {} ", spinner_frame(*tick)), theme.accent()),
                Span::styled(message.clone(), theme.dim()),
            ]),
        ],
        StatusIndicatorType::Empty {
            message,
            reason,
            hint,
        } => {
            let mut lines = vec![
                Line::default(),
                Line::from(Span::styled(format!("  {}", message), theme.text())),
            ];
            if let Some(reason) = reason {
                lines.push(Line::from(Span::styled(format!("  {}", reason), theme.error())));
            }
            if let Some(hint) = hint {
                lines.push(Line::from(Span::styled(format!("  {}", hint), theme.dim())));
            }
            lines
        }
    }
}
