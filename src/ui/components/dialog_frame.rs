//! Dialog Frame Component
//!
//! A centered dialog frame with rounded borders. Clears the background and
//! sizes itself to the terminal.

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::helpers::{centered_rect, LayoutContext};
use crate::ui::theme::Theme;

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 60,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

fn dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig) -> u16 {
    if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    }
}

/// Render a dialog frame over `area` and return the inner content area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    config: &DialogFrameConfig,
) -> Rect {
    let ctx = LayoutContext::from_rect(area);
    let dialog_area = centered_rect(dialog_width(&ctx, config), config.content_height + 2, area);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            theme.text().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border(true))
        .style(theme.base());
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}
