//! # Slide Card Component
//!
//! Renders the current slide: topic title and "Slide n of m" in the border,
//! the slide title, then each content item with its optional description and
//! highlighted example.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SlideCardState` (scroll offset, measured heights) lives in `TuiState`
//! - `SlideCard` is created each frame from the core's `SlideView`
//!
//! Navigation state never lives here. The card only knows how far the
//! *body* of a tall slide is scrolled.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::navigator::SlideView;
use crate::tui::component::Component;
use crate::tui::highlight::Highlighter;

const INDENT: &str = "  ";

#[derive(Default)]
pub struct SlideCardState {
    pub scroll_state: ScrollViewState,
    /// Wrapped height of the slide body, measured on the last render.
    content_height: u16,
    viewport_height: u16,
}

impl SlideCardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_up(&mut self) {
        self.scroll_state.scroll_up();
    }

    pub fn scroll_down(&mut self) {
        self.scroll_state.scroll_down();
        self.clamp_scroll();
    }

    /// Back to the top, e.g. after moving to another slide.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Never scroll past the last line of the body.
    fn clamp_scroll(&mut self) {
        let current = self.scroll_state.offset();
        let max_y = self.max_offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

pub struct SlideCard<'a> {
    pub view: SlideView<'a>,
    pub highlighter: &'a Highlighter,
    pub state: &'a mut SlideCardState,
}

impl<'a> SlideCard<'a> {
    pub fn new(
        view: SlideView<'a>,
        highlighter: &'a Highlighter,
        state: &'a mut SlideCardState,
    ) -> Self {
        Self {
            view,
            highlighter,
            state,
        }
    }
}

impl Component for SlideCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let counter = format!(
            " Slide {} of {} ",
            self.view.slide_index + 1,
            self.view.slide_count
        );
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", self.view.topic_title),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
            .title_top(Line::from(counter).right_aligned())
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width < 2 || inner.height == 0 {
            return;
        }

        // One column is reserved for the scrollbar.
        let content_width = inner.width - 1;
        let paragraph =
            Paragraph::new(slide_lines(&self.view, self.highlighter)).wrap(Wrap { trim: false });
        let content_height = (paragraph.line_count(content_width) as u16).max(1);

        self.state.content_height = content_height;
        self.state.viewport_height = inner.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

/// The slide body as styled lines, before wrapping.
pub fn slide_lines(view: &SlideView<'_>, highlighter: &Highlighter) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            view.slide_title.to_owned(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::default(),
    ];

    for (i, item) in view.content.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                item.point.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        if let Some(description) = &item.description {
            for text in description.lines() {
                lines.push(Line::from(Span::styled(
                    format!("{INDENT}{text}"),
                    Style::default().fg(Color::Gray),
                )));
            }
        }
        if let Some(example) = &item.example {
            for mut line in highlighter.example_lines(example) {
                line.spans.insert(0, Span::raw(INDENT));
                lines.push(line);
            }
        }
    }
    lines
}
