use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// A single-line text editor with a character cursor. Shared by the
/// autocomplete inputs and the search-name editor.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor: usize, // in chars
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_text(&mut self, text: String) {
        self.cursor = text.chars().count();
        self.text = text;
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.char_len() {
            return false;
        }
        let (byte_start, byte_end) = (self.byte_index(start), self.byte_index(end));
        self.text.drain(byte_start..byte_end);
        self.cursor = start;
        true
    }

    fn prev_word_boundary(&self) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }

    /// Render the text with a block cursor as styled spans.
    pub fn cursor_spans(&self) -> Vec<Span<'_>> {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        if self.cursor >= self.char_len() {
            return vec![
                Span::raw(self.text.clone()),
                Span::styled(" ", cursor_style),
            ];
        }
        let byte_cursor = self.byte_index(self.cursor);
        let before = self.text[..byte_cursor].to_string();
        let rest = &self.text[byte_cursor..];
        let under = rest.chars().next().unwrap_or(' ');
        let after: String = rest.chars().skip(1).collect();

        let mut spans = Vec::new();
        if !before.is_empty() {
            spans.push(Span::raw(before));
        }
        spans.push(Span::styled(under.to_string(), cursor_style));
        if !after.is_empty() {
            spans.push(Span::raw(after));
        }
        spans
    }

    /// Handle a key event; returns true when the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    false
                }
                KeyCode::Char('e') => {
                    self.cursor = self.char_len();
                    false
                }
                KeyCode::Char('b') => {
                    self.cursor = self.cursor.saturating_sub(1);
                    false
                }
                KeyCode::Char('f') => {
                    self.cursor = (self.cursor + 1).min(self.char_len());
                    false
                }
                KeyCode::Char('h') => self.delete_range(self.cursor.saturating_sub(1), self.cursor),
                KeyCode::Char('w') => {
                    let start = self.prev_word_boundary();
                    self.delete_range(start, self.cursor)
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor),
                KeyCode::Char('k') => self.delete_range(self.cursor, self.char_len()),
                _ => false,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_index(self.cursor);
                self.text.insert(byte_pos, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => self.delete_range(self.cursor.saturating_sub(1), self.cursor),
            KeyCode::Delete => self.delete_range(self.cursor, (self.cursor + 1).min(self.char_len())),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                false
            }
            _ => false,
        }
    }
}
