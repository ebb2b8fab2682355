//! # NavBar Component
//!
//! Bottom line with the previous/next controls. A control is dimmed when the
//! navigator is at the corresponding boundary, the terminal equivalent of a
//! disabled button.
//!
//! ```text
//! ◀ Previous (←)          Topic 1 of 2 · o open · q quit          (→) Next ▶
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const PREVIOUS: &str = "◀ Previous (←)";
const NEXT: &str = "(→) Next ▶";

pub struct NavBar {
    pub can_retreat: bool,
    pub can_advance: bool,
    /// `(topic_index, topic_count)`, None when nothing is loaded
    pub topic: Option<(usize, usize)>,
}

impl NavBar {
    pub fn new(can_retreat: bool, can_advance: bool, topic: Option<(usize, usize)>) -> Self {
        Self {
            can_retreat,
            can_advance,
            topic,
        }
    }

    fn control_style(enabled: bool) -> Style {
        if enabled {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        }
    }

    fn hints(&self) -> String {
        match self.topic {
            Some((index, count)) => {
                format!("Topic {} of {} · o open · r reload · q quit", index + 1, count)
            }
            None => "o open · q quit".to_string(),
        }
    }
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [left, middle, right] = Layout::horizontal([
            Constraint::Length(PREVIOUS.chars().count() as u16),
            Constraint::Min(0),
            Constraint::Length(NEXT.chars().count() as u16),
        ])
        .areas(area);

        frame.render_widget(
            Line::from(Span::styled(PREVIOUS, Self::control_style(self.can_retreat))),
            left,
        );
        frame.render_widget(
            Line::from(Span::styled(self.hints(), Style::default().fg(Color::DarkGray)))
                .centered(),
            middle,
        );
        frame.render_widget(
            Line::from(Span::styled(NEXT, Self::control_style(self.can_advance))),
            right,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn draw(mut nav_bar: NavBar) -> Buffer {
        let backend = TestBackend::new(90, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                nav_bar.render(f, f.area());
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_shows_both_controls_and_topic() {
        let buffer = draw(NavBar::new(true, true, Some((0, 2))));
        let text = text(&buffer);
        assert!(text.contains("Previous"));
        assert!(text.contains("Next"));
        assert!(text.contains("Topic 1 of 2"));
    }

    #[test]
    fn test_boundary_controls_are_dimmed() {
        let buffer = draw(NavBar::new(false, true, Some((0, 1))));
        // First cell is the previous control, last cell the next control.
        assert_eq!(buffer[(0, 0)].fg, Color::DarkGray);
        assert_eq!(buffer[(89, 0)].fg, Color::White);

        let buffer = draw(NavBar::new(true, false, Some((0, 1))));
        assert_eq!(buffer[(0, 0)].fg, Color::White);
        assert_eq!(buffer[(89, 0)].fg, Color::DarkGray);
    }

    #[test]
    fn test_hints_without_document() {
        let nav_bar = NavBar::new(false, false, None);
        assert_eq!(nav_bar.hints(), "o open · q quit");
    }
}
