//! Color palettes and content density for the portal UI.
//!
//! The light palette is the default. Dark mode doubles as the high-contrast
//! option on the profile screen. Font size has no meaning in a terminal, so
//! it maps to how densely content is laid out.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

use crate::state::{FontSize, ViewState};
use crate::widgets::InputBoxStyle;

/// One set of colors for every surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub selected_bg: Color,
    pub toast_bg: Color,
    pub toast_fg: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(243, 244, 246),
    text: Color::Rgb(31, 41, 55),
    dim: Color::Rgb(107, 114, 128),
    border: Color::Rgb(209, 213, 219),
    accent: Color::Rgb(37, 99, 235),
    success: Color::Rgb(22, 163, 74),
    warning: Color::Rgb(202, 138, 4),
    error: Color::Rgb(220, 38, 38),
    selected_bg: Color::Rgb(219, 234, 254),
    toast_bg: Color::Rgb(31, 41, 55),
    toast_fg: Color::White,
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),
    text: Color::Rgb(243, 244, 246),
    dim: Color::Rgb(156, 163, 175),
    border: Color::Rgb(75, 85, 99),
    accent: Color::Rgb(96, 165, 250),
    success: Color::Rgb(74, 222, 128),
    warning: Color::Rgb(250, 204, 21),
    error: Color::Rgb(248, 113, 113),
    selected_bg: Color::Rgb(30, 58, 138),
    toast_bg: Color::Rgb(243, 244, 246),
    toast_fg: Color::Rgb(17, 24, 39),
};

/// How much vertical room content gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    Compact,
    Normal,
    Spacious,
}

impl From<FontSize> for Density {
    fn from(size: FontSize) -> Self {
        match size {
            FontSize::Small => Density::Compact,
            FontSize::Base => Density::Normal,
            FontSize::Large => Density::Spacious,
        }
    }
}

/// Palette plus density, derived from the view state on every draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub density: Density,
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_view(&ViewState::new())
    }
}

impl Theme {
    pub fn for_view(view: &ViewState) -> Self {
        Self {
            palette: if view.is_dark_mode() { DARK } else { LIGHT },
            density: view.font_size().into(),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.palette.text).bg(self.palette.background)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.palette.text)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.palette.dim)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.palette.accent)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.palette.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.palette.warning)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.palette.error)
    }

    /// Section headings. Large text also makes them bold and underlined.
    pub fn heading(&self) -> Style {
        let style = Style::default()
            .fg(self.palette.text)
            .add_modifier(Modifier::BOLD);
        match self.density {
            Density::Spacious => style.add_modifier(Modifier::UNDERLINED),
            _ => style,
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.palette.accent)
        } else {
            Style::default().fg(self.palette.border)
        }
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.palette.text)
            .bg(self.palette.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn toast(&self) -> Style {
        Style::default()
            .fg(self.palette.toast_fg)
            .bg(self.palette.toast_bg)
    }

    pub fn input(&self) -> InputBoxStyle {
        InputBoxStyle {
            border: self.palette.border,
            border_focused: self.palette.accent,
            text: self.palette.text,
            placeholder: self.palette.dim,
            cursor_fg: self.palette.background,
            cursor_bg: self.palette.accent,
        }
    }

    /// Blank lines placed between items.
    pub fn item_gap(&self) -> usize {
        match self.density {
            Density::Compact => 0,
            Density::Normal => 1,
            Density::Spacious => 2,
        }
    }

    /// Push `item_gap` blank lines.
    pub fn push_gap(&self, lines: &mut Vec<Line<'static>>) {
        lines.extend((0..self.item_gap()).map(|_| Line::default()));
    }

    /// Whether secondary detail lines fit.
    pub fn shows_detail(&self) -> bool {
        self.density != Density::Compact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_follows_view() {
        let light = Theme::for_view(&ViewState::new());
        assert_eq!(light.palette, LIGHT);
        assert_eq!(light.density, Density::Normal);

        let dark = Theme::for_view(&ViewState::with_preferences(true, FontSize::Large));
        assert_eq!(dark.palette, DARK);
        assert_eq!(dark.density, Density::Spacious);
        assert!(dark.heading().add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_item_gap_grows_with_font_size() {
        let gaps: Vec<usize> = FontSize::ALL
            .iter()
            .map(|size| Theme::for_view(&ViewState::with_preferences(false, *size)).item_gap())
            .collect();
        assert_eq!(gaps, vec![0, 1, 2]);
    }

    #[test]
    fn test_compact_hides_detail() {
        let theme = Theme::for_view(&ViewState::with_preferences(false, FontSize::Small));
        assert!(!theme.shows_detail());
        let mut lines = Vec::new();
        theme.push_gap(&mut lines);
        assert!(lines.is_empty());
    }
}
