//! Tab Selector Component
//!
//! A horizontal selector used for the footer navigation. The selected item
//! gets a `▶` marker; every item shows the key that activates it.

use ratatui::text::{Line, Span};

use crate::ui::helpers::LayoutContext;
use crate::ui::theme::Theme;

/// A single tab item in the selector
#[derive(Debug, Clone, Copy)]
pub struct TabItem<'a> {
    /// Key that selects the tab
    pub key: char,
    pub label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(key: char, label: &'a str) -> Self {
        Self { key, label }
    }
}

/// Render a horizontal tab selector.
///
/// `selected` is `None` when the active view has no tab, e.g. lab results.
/// Compact terminals drop the key hints.
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: Option<usize>,
    theme: &Theme,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, item) in items.iter().enumerate() {
        let is_selected = selected == Some(idx);
        let (marker, style) = if is_selected {
            ("▶ ", theme.selected())
        } else {
            ("  ", theme.dim())
        };
        spans.push(Span::styled(marker, theme.accent()));
        if !ctx.is_compact() {
            spans.push(Span::styled(format!("[{}] ", item.key), theme.dim()));
        }
        spans.push(Span::styled(item.label.to_string(), style));

        if idx + 1 < items.len() {
            let spacing = if ctx.is_compact() { " " } else { "   " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}
