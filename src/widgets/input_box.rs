use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

const MASK_CHAR: char = '•';

/// Colors used to draw an [`InputBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBoxStyle {
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub placeholder: Color,
    pub cursor_fg: Color,
    pub cursor_bg: Color,
}

impl Default for InputBoxStyle {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            text: Color::White,
            placeholder: Color::DarkGray,
            cursor_fg: Color::Black,
            cursor_bg: Color::Cyan,
        }
    }
}

/// A single-line text input with cursor handling and horizontal scrolling.
///
/// The cursor is a character index, so multi-byte input is safe. A masked
/// box draws every character as a bullet but stores the real text.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    content: String,
    /// Cursor position in characters
    cursor_position: usize,
    masked: bool,
    placeholder: String,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// A box that hides its content, for passwords.
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, c);
        self.cursor_position += 1;
    }

    /// Delete the character under the cursor (Delete key).
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.char_len() {
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor (Backspace key).
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_len();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Replace the content and put the cursor at the end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor_position = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    /// Take the content out, leaving the box empty.
    pub fn take(&mut self) -> String {
        self.cursor_position = 0;
        std::mem::take(&mut self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Characters as they should be drawn.
    fn display_chars(&self) -> Vec<char> {
        if self.masked {
            vec![MASK_CHAR; self.char_len()]
        } else {
            self.content.chars().collect()
        }
    }

    /// First visible character so the cursor stays inside `width` cells.
    fn scroll_offset(&self, width: usize) -> usize {
        if width == 0 || self.cursor_position < width {
            0
        } else {
            self.cursor_position + 1 - width
        }
    }

    /// Draw the box with a bordered title.
    pub fn render_with_title(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        focused: bool,
        style: InputBoxStyle,
    ) {
        let border_color = if focused {
            style.border_focused
        } else {
            style.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title.to_string());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;
        let y = inner.y;

        if self.content.is_empty() && !self.placeholder.is_empty() && !focused {
            buf.set_stringn(
                inner.x,
                y,
                &self.placeholder,
                width,
                Style::default().fg(style.placeholder),
            );
            return;
        }

        let chars = self.display_chars();
        let offset = self.scroll_offset(width);
        let visible: String = chars.iter().skip(offset).take(width).collect();
        buf.set_stringn(inner.x, y, &visible, width, Style::default().fg(style.text));

        if focused {
            let cursor_x = self.cursor_position - offset;
            if cursor_x < width {
                let under = chars.get(self.cursor_position).copied().unwrap_or(' ');
                buf.set_string(
                    inner.x + cursor_x as u16,
                    y,
                    under.to_string(),
                    Style::default().fg(style.cursor_fg).bg(style.cursor_bg),
                );
            }
        }
    }
}

/// Renderable wrapper implementing [`Widget`].
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    focused: bool,
    style: InputBoxStyle,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str, focused: bool) -> Self {
        Self {
            input_box,
            title,
            focused,
            style: InputBoxStyle::default(),
        }
    }

    pub fn style(mut self, style: InputBoxStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input_box
            .render_with_title(area, buf, self.title, self.focused, self.style);
    }
}
