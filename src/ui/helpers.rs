//! Helper functions and constants for UI rendering
//!
//! Contains layout math, display widths and the loading spinner.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Spinner frames shown while a resource loads
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for the given tick
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick / 4) as usize % SPINNER_FRAMES.len()]
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Display width of `s` in terminal cells
pub fn display_width(s: &str) -> u16 {
    s.width().min(u16::MAX as usize) as u16
}

// ============================================================================
// Responsive Layout Helpers
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self {
            width: rect.width,
            height: rect.height,
        }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Less than 80 columns
    pub fn is_narrow(&self) -> bool {
        self.width < 80
    }

    /// Less than 24 rows
    pub fn is_short(&self) -> bool {
        self.height < 24
    }

    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 20, 6);
        assert_eq!(centered_rect(40, 10, area), area);
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(4), SPINNER_FRAMES[1]);
        assert_eq!(spinner_frame(40), SPINNER_FRAMES[0]);
    }

    #[test]
    fn test_layout_context_breakpoints() {
        assert!(LayoutContext::new(60, 30).is_narrow());
        assert!(LayoutContext::new(100, 20).is_compact());
        assert!(!LayoutContext::default().is_compact());
        assert_eq!(LayoutContext::new(120, 40).bounded_width(50, 30, 60), 60);
    }
}
