//! # Notice Component
//!
//! Modal error popup for ingestion failures. While it's up the viewer takes
//! no navigation input; Enter or Esc dismisses it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};

use crate::tui::component::Component;

/// Borders (2) + vertical padding (0).
const VERTICAL_OVERHEAD: u16 = 2;
/// Borders (2) + horizontal padding (2).
const HORIZONTAL_OVERHEAD: u16 = 4;

pub struct Notice<'a> {
    pub message: &'a str,
}

impl<'a> Notice<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Wrap the message to `width` columns the same way it'll be drawn.
    fn wrapped(&self, width: u16) -> Vec<String> {
        let options = textwrap::Options::new(width.max(1) as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        textwrap::wrap(self.message, options)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }
}

impl Component for Notice<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [column] = Layout::horizontal([Constraint::Percentage(70)])
            .flex(Flex::Center)
            .areas(area);
        let lines = self.wrapped(column.width.saturating_sub(HORIZONTAL_OVERHEAD));
        let height = (lines.len() as u16 + VERTICAL_OVERHEAD).min(area.height);
        let [overlay] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(column);

        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Red))
            .title(Line::from(" Error ").style(Style::default().add_modifier(Modifier::BOLD)))
            .title_bottom(Line::from(" Enter Dismiss ").centered())
            .padding(Padding::horizontal(1));

        let body: Vec<Line> = lines.into_iter().map(Line::from).collect();
        frame.render_widget(Paragraph::new(body).block(block), overlay);
    }
}
