//! # Landing Page Component
//!
//! Shown while no document is loaded: asks the user to pick a topics file.
//!

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct LandingPage {
    /// A read is in flight; say so instead of prompting.
    pub loading: bool,
}

impl LandingPage {
    pub fn new(loading: bool) -> Self {
        Self { loading }
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let mut text_lines = vec![
            Line::from(Span::styled(
                "Load your topics",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Select a JSON file containing your topics",
                dim,
            )),
            Line::default(),
        ];

        text_lines.push(if self.loading {
            Line::from(Span::styled("Loading...", Style::default().fg(Color::Cyan)))
        } else {
            Line::from(vec![
                Span::styled("Press ", dim),
                Span::styled("o", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::styled(" to open a file", dim),
            ])
        });

        text_lines.push(Line::default());
        text_lines.push(Line::from(Span::styled(
            format!("Deck v{}", env!("CARGO_PKG_VERSION")),
            dim,
        )));

        let [centered] = Layout::vertical([Constraint::Length(text_lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(text_lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(loading: bool) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut landing = LandingPage::new(loading);
        terminal
            .draw(|f| {
                landing.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_prompts_for_file() {
        let text = rendered(false);
        assert!(text.contains("Load your topics"));
        assert!(text.contains("to open a file"));
    }

    #[test]
    fn test_loading_replaces_prompt() {
        let text = rendered(true);
        assert!(text.contains("Loading..."));
        assert!(!text.contains("to open a file"));
    }
}
