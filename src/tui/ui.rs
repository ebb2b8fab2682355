use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{LandingPage, NavBar, Notice, SlideCard, TitleBar};

/// Render one frame. Reads core state, never mutates it.
///
/// ```text
/// ┌ title bar ─────────────────────────────┐  Length(1)
/// │ slide card / landing page              │  Min(0)
/// └ nav bar ───────────────────────────────┘  Length(1)
/// ```
/// The path prompt and error notice are drawn on top, notice last.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area, nav_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let view = app.view();

    let progress = view
        .filter(|_| tui.show_progress)
        .map(|v| (v.flat_index, v.total_slides));
    TitleBar::new(app.source_name(), app.status_message.clone(), progress)
        .render(frame, title_area);

    match view {
        Some(view) => {
            SlideCard::new(view, &tui.highlighter, &mut tui.slide_card).render(frame, main_area);
        }
        None => LandingPage::new(app.pending_load.is_some()).render(frame, main_area),
    }

    let mut nav_bar = match view {
        Some(v) => NavBar::new(!v.at_start, !v.at_end, Some((v.topic_index, v.topic_count))),
        None => NavBar::new(false, false, None),
    };
    nav_bar.render(frame, nav_area);

    if let Some(prompt) = tui.prompt.as_mut() {
        prompt.render(frame, frame.area());
    }

    if let Some(message) = app.notification.as_deref() {
        Notice::new(message).render(frame, frame.area());
    }
}
