//! # Path Prompt Component
//!
//! One-line overlay for typing the path of a topics file. Opened with `o`,
//! submitted with Enter, dismissed with Esc.
//!
//! The buffer and cursor are internal state; the prompt lives in `TuiState`
//! only while it's open.

use std::path::PathBuf;

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Submit(PathBuf),
    Cancel,
}

pub struct PathPrompt {
    pub buffer: String,
    /// Byte offset into `buffer`, always on a char boundary.
    cursor: usize,
}

impl PathPrompt {
    /// Start with `initial` (e.g. the current file) pre-filled.
    pub fn new(initial: Option<String>) -> Self {
        let buffer = initial.unwrap_or_default();
        Self {
            cursor: buffer.len(),
            buffer,
        }
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map_or(self.cursor, |c| self.cursor + c.len_utf8())
    }

    /// Text to show in a field `width` columns wide, plus the cursor column.
    /// Long paths scroll so the cursor stays visible.
    fn visible(&self, width: u16) -> (&str, u16) {
        let width = width.max(1) as usize;
        let mut start = 0;
        while self.buffer[start..self.cursor].width() >= width {
            start += self.buffer[start..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
        }
        let column = self.buffer[start..self.cursor].width() as u16;
        (&self.buffer[start..], column)
    }
}

impl Component for PathPrompt {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [row] = Layout::vertical([Constraint::Length(3)])
            .flex(Flex::Center)
            .areas(area);
        let [overlay] = Layout::horizontal([Constraint::Percentage(70)])
            .flex(Flex::Center)
            .areas(row);

        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Open topics file ")
            .title_bottom(Line::from(" Enter Open  Esc Cancel ").centered());
        let inner = block.inner(overlay);

        let (text, column) = self.visible(inner.width);
        let input = Paragraph::new(text.to_owned())
            .block(block)
            .style(Style::default().fg(Color::Green));
        frame.render_widget(input, overlay);
        frame.set_cursor_position((inner.x + column, inner.y));
    }
}

impl EventHandler for PathPrompt {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                None
            }
            TuiEvent::Paste(text) => {
                // Paths are single-line; terminals often append a newline.
                let text = text.trim_end_matches(['\n', '\r']);
                self.buffer.insert_str(self.cursor, text);
                self.cursor += text.len();
                None
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::Delete => {
                let next = self.next_boundary();
                self.buffer.drain(self.cursor..next);
                None
            }
            TuiEvent::Left => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::Right => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => {
                let path = self.buffer.trim();
                (!path.is_empty()).then(|| PromptEvent::Submit(PathBuf::from(path)))
            }
            TuiEvent::Escape => Some(PromptEvent::Cancel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(prompt: &mut PathPrompt, s: &str) {
        for c in s.chars() {
            prompt.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_and_submit() {
        let mut prompt = PathPrompt::new(None);
        type_str(&mut prompt, "talk.json");
        assert_eq!(
            prompt.handle_event(&TuiEvent::Submit),
            Some(PromptEvent::Submit(PathBuf::from("talk.json")))
        );
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut prompt = PathPrompt::new(None);
        type_str(&mut prompt, "   ");
        assert_eq!(prompt.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_escape_cancels() {
        let mut prompt = PathPrompt::new(Some("a.json".to_string()));
        assert_eq!(prompt.handle_event(&TuiEvent::Escape), Some(PromptEvent::Cancel));
    }

    #[test]
    fn test_editing_respects_char_boundaries() {
        let mut prompt = PathPrompt::new(Some("café.json".to_string()));
        for _ in 0..5 {
            prompt.handle_event(&TuiEvent::Left);
        }
        prompt.handle_event(&TuiEvent::Backspace);
        assert_eq!(prompt.buffer, "caf.json");
        prompt.handle_event(&TuiEvent::Home);
        prompt.handle_event(&TuiEvent::Delete);
        assert_eq!(prompt.buffer, "af.json");
        prompt.handle_event(&TuiEvent::End);
        prompt.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(prompt.buffer, "af.jsonx");
    }

    #[test]
    fn test_paste_strips_trailing_newline() {
        let mut prompt = PathPrompt::new(None);
        prompt.handle_event(&TuiEvent::Paste("/tmp/deck.json\n".to_string()));
        assert_eq!(prompt.buffer, "/tmp/deck.json");
    }

    #[test]
    fn test_long_path_scrolls_to_cursor() {
        let prompt = PathPrompt::new(Some("abcdefghij".to_string()));
        let (text, column) = prompt.visible(4);
        assert_eq!(text, "hij");
        assert_eq!(column, 3);
    }

    #[test]
    fn test_render_shows_buffer() {
        let backend = TestBackend::new(60, 9);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut prompt = PathPrompt::new(Some("slides.json".to_string()));
        terminal
            .draw(|f| {
                prompt.render(f, f.area());
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Open topics file"));
        assert!(text.contains("slides.json"));
    }
}
