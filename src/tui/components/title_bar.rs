//! # TitleBar Component
//!
//! Top status line: which file is open, the status message, and (optionally)
//! overall progress through the flattened slide sequence.
//!
//! Stateless: all three props come from core `App` state and are handed in
//! fresh each frame.
//!
//! ```text
//! Deck | rust.json | 2 topics, 3 slides            2 / 3
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    /// File name of the loaded document, if any
    pub document_name: Option<String>,
    pub status_message: String,
    /// `(flat_index, total_slides)`, zero-based index
    pub progress: Option<(usize, usize)>,
}

impl TitleBar {
    pub fn new(
        document_name: Option<String>,
        status_message: String,
        progress: Option<(usize, usize)>,
    ) -> Self {
        Self {
            document_name,
            status_message,
            progress,
        }
    }

    fn title_text(&self) -> String {
        let mut parts = vec!["Deck".to_string()];
        if let Some(name) = &self.document_name {
            parts.push(name.clone());
        }
        if !self.status_message.is_empty() {
            parts.push(self.status_message.clone());
        }
        parts.join(" | ")
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let progress = self
            .progress
            .map(|(index, total)| format!("{} / {} ", index + 1, total))
            .unwrap_or_default();

        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(progress.chars().count() as u16),
        ])
        .areas(area);

        let title = Line::from(vec![
            Span::styled(
                self.title_text(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(title, left);
        frame.render_widget(
            Line::from(Span::styled(progress, Style::default().fg(Color::DarkGray))),
            right,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut title_bar: TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_document_and_progress() {
        let text = rendered(TitleBar::new(
            Some("rust.json".to_string()),
            "2 topics, 3 slides".to_string(),
            Some((1, 3)),
        ));
        assert!(text.contains("Deck | rust.json | 2 topics, 3 slides"));
        assert!(text.contains("2 / 3"));
    }

    #[test]
    fn test_title_bar_without_document() {
        let text = rendered(TitleBar::new(None, "Press o to open".to_string(), None));
        assert!(text.contains("Deck | Press o to open"));
        assert!(!text.contains(" / "));
    }

    #[test]
    fn test_title_bar_empty_status_has_no_separator() {
        let title_bar = TitleBar::new(None, String::new(), None);
        assert_eq!(title_bar.title_text(), "Deck");
    }
}
