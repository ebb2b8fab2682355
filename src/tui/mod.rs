//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Input goes to exactly one layer, topmost first:
//!
//! 1. **Notice** (error popup): Enter/Esc dismiss, everything else is swallowed.
//! 2. **Path prompt**: text editing, Enter opens, Esc cancels.
//! 3. **Viewer**: navigation, body scrolling, `o`/`r`/`q`.
//!
//! Ctrl+C quits from any layer.
//!
//! ## File Reads
//!
//! `Effect::ReadFile` spawns a tokio task that reads the file and sends
//! `Action::FileRead` back over a channel. The loop keeps drawing and
//! navigating the current document until the result arrives.

mod component;
mod components;
mod event;
pub mod highlight;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{PathPrompt, PromptEvent, SlideCardState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::highlight::Highlighter;

/// Idle poll timeout. Nothing animates, so the loop only wakes for input or
/// a finished file read.
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub slide_card: SlideCardState,
    /// Open-file overlay (None = hidden)
    pub prompt: Option<PathPrompt>,
    pub highlighter: Highlighter,
    pub show_progress: bool,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            slide_card: SlideCardState::new(),
            prompt: None,
            highlighter: Highlighter::new(&config.theme),
            show_progress: config.show_progress,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            slide_card: SlideCardState::new(),
            prompt: None,
            highlighter: Highlighter::default(),
            show_progress: true,
        }
    }
}

/// What a key means while the viewer has focus.
#[derive(Debug)]
enum ViewerCommand {
    Core(Action),
    ScrollUp,
    ScrollDown,
    OpenPrompt,
}

fn viewer_command(event: &TuiEvent) -> Option<ViewerCommand> {
    use ViewerCommand::*;
    match event {
        TuiEvent::Right
        | TuiEvent::PageDown
        | TuiEvent::InputChar(' ' | 'l' | 'n') => Some(Core(Action::Next)),
        TuiEvent::Left | TuiEvent::PageUp | TuiEvent::InputChar('h' | 'p') => {
            Some(Core(Action::Previous))
        }
        TuiEvent::Home | TuiEvent::InputChar('g') => Some(Core(Action::First)),
        TuiEvent::End | TuiEvent::InputChar('G') => Some(Core(Action::Last)),
        TuiEvent::Up | TuiEvent::ScrollUp | TuiEvent::InputChar('k') => Some(ScrollUp),
        TuiEvent::Down | TuiEvent::ScrollDown | TuiEvent::InputChar('j') => Some(ScrollDown),
        TuiEvent::InputChar('o') => Some(OpenPrompt),
        TuiEvent::InputChar('r') => Some(Core(Action::Reload)),
        TuiEvent::InputChar('q') | TuiEvent::Escape => Some(Core(Action::Quit)),
        _ => None,
    }
}

/// Route one event to whichever layer has focus. Returns the effect of any
/// core action it produced.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if event == TuiEvent::ForceQuit {
        return update(app, Action::Quit);
    }

    if app.notification.is_some() {
        if matches!(event, TuiEvent::Submit | TuiEvent::Escape) {
            return update(app, Action::DismissNotification);
        }
        return Effect::None;
    }

    if let Some(prompt) = tui.prompt.as_mut() {
        return match prompt.handle_event(&event) {
            Some(PromptEvent::Submit(path)) => {
                tui.prompt = None;
                update(app, Action::OpenFile(path))
            }
            Some(PromptEvent::Cancel) => {
                tui.prompt = None;
                Effect::None
            }
            None => Effect::None,
        };
    }

    match viewer_command(&event) {
        Some(ViewerCommand::Core(action)) => {
            let before = app.navigator.as_ref().map(|n| n.position());
            let effect = update(app, action);
            if app.navigator.as_ref().map(|n| n.position()) != before {
                tui.slide_card.reset();
            }
            effect
        }
        Some(ViewerCommand::ScrollUp) => {
            tui.slide_card.scroll_up();
            Effect::None
        }
        Some(ViewerCommand::ScrollDown) => {
            tui.slide_card.scroll_down();
            Effect::None
        }
        Some(ViewerCommand::OpenPrompt) => {
            let current = app.source.as_ref().map(|p| p.display().to_string());
            tui.prompt = Some(PathPrompt::new(current));
            Effect::None
        }
        None => Effect::None,
    }
}

/// Apply an action delivered by a background task. A freshly installed
/// document always starts with the card scrolled to the top, even when it
/// replaces the same file at the same position.
fn handle_background(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let installs = matches!(
        &action,
        Action::FileRead { path, result: Ok(_) } if app.pending_load.as_ref() == Some(path)
    );
    let effect = update(app, action);
    if installs && app.notification.is_none() {
        tui.slide_card.reset();
    }
    effect
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste, Hide)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Show);
    }
}

/// Run the viewer until the user quits. `initial_file` is opened right away.
pub fn run(config: ResolvedConfig, initial_file: Option<PathBuf>) -> io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new(&config);

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    if let Some(path) = initial_file
        && let Effect::ReadFile(path) = update(&mut app, Action::OpenFile(path))
    {
        spawn_read(path, tx.clone());
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    let result = event_loop(&mut terminal, &mut app, &mut tui, &tx, &rx);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
    rx: &mpsc::Receiver<Action>,
) -> io::Result<()> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let mut effects = Vec::new();
        let mut next = poll_event_timeout(POLL_TIMEOUT)?;
        while let Some(event) = next {
            needs_redraw = true;
            effects.push(handle_event(app, tui, event));
            next = poll_event_immediate()?;
        }

        // Handle background task actions (finished file reads)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            effects.push(handle_background(app, tui, action));
        }

        for effect in effects {
            match effect {
                Effect::Quit => {
                    info!("Quit requested");
                    return Ok(());
                }
                Effect::ReadFile(path) => spawn_read(path, tx.clone()),
                Effect::None => {}
            }
        }
    }
}

fn spawn_read(path: PathBuf, tx: mpsc::Sender<Action>) {
    debug!("Spawning read of {}", path.display());
    tokio::spawn(async move {
        let result = tokio::fs::read_to_string(&path).await;
        if let Err(e) = &result {
            warn!("Read of {} failed: {}", path.display(), e);
        }
        if tx.send(Action::FileRead { path, result }).is_err() {
            warn!("Failed to deliver file read: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigator::Position;
    use crate::test_support::{loaded_app, scenario_document};

    fn position(app: &App) -> Position {
        app.navigator.as_ref().unwrap().position()
    }

    #[test]
    fn test_viewer_keymap() {
        assert!(matches!(viewer_command(&TuiEvent::Right), Some(ViewerCommand::Core(Action::Next))));
        assert!(matches!(viewer_command(&TuiEvent::InputChar(' ')), Some(ViewerCommand::Core(Action::Next))));
        assert!(matches!(viewer_command(&TuiEvent::Left), Some(ViewerCommand::Core(Action::Previous))));
        assert!(matches!(viewer_command(&TuiEvent::InputChar('G')), Some(ViewerCommand::Core(Action::Last))));
        assert!(matches!(viewer_command(&TuiEvent::Home), Some(ViewerCommand::Core(Action::First))));
        assert!(matches!(viewer_command(&TuiEvent::InputChar('o')), Some(ViewerCommand::OpenPrompt)));
        assert!(matches!(viewer_command(&TuiEvent::ScrollDown), Some(ViewerCommand::ScrollDown)));
        assert!(matches!(viewer_command(&TuiEvent::InputChar('q')), Some(ViewerCommand::Core(Action::Quit))));
        assert!(viewer_command(&TuiEvent::InputChar('z')).is_none());
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let mut app = loaded_app(scenario_document());
        let mut tui = TuiState::default();
        handle_event(&mut app, &mut tui, TuiEvent::Right);
        handle_event(&mut app, &mut tui, TuiEvent::Right);
        assert_eq!(position(&app), Position::new(1, 0));
        handle_event(&mut app, &mut tui, TuiEvent::Left);
        assert_eq!(position(&app), Position::new(0, 1));
    }

    #[test]
    fn test_notice_swallows_navigation() {
        let mut app = loaded_app(scenario_document());
        app.notification = Some("bad file".to_string());
        let mut tui = TuiState::default();

        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Right), Effect::None);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::InputChar('q')), Effect::None);
        assert_eq!(position(&app), Position::START);

        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_force_quit_works_under_notice() {
        let mut app = App::new();
        app.notification = Some("bad file".to_string());
        let mut tui = TuiState::default();
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_prompt_flow_requests_read() {
        let mut app = App::new();
        let mut tui = TuiState::default();

        handle_event(&mut app, &mut tui, TuiEvent::InputChar('o'));
        assert!(tui.prompt.is_some());

        // Keys go to the prompt, not the viewer.
        for c in "q.json".chars() {
            assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::InputChar(c)), Effect::None);
        }
        let effect = handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(effect, Effect::ReadFile(PathBuf::from("q.json")));
        assert!(tui.prompt.is_none());
    }

    #[test]
    fn test_reload_resets_scroll_even_at_same_position() {
        let mut app = loaded_app(scenario_document());
        app.source = Some(PathBuf::from("talk.json"));
        let mut tui = TuiState::default();
        tui.slide_card.scroll_state.set_offset(ratatui::layout::Position { x: 0, y: 4 });
        assert_eq!(tui.slide_card.offset(), 4);

        let effect = handle_event(&mut app, &mut tui, TuiEvent::InputChar('r'));
        assert_eq!(effect, Effect::ReadFile(PathBuf::from("talk.json")));
        assert_eq!(tui.slide_card.offset(), 4);

        handle_background(
            &mut app,
            &mut tui,
            Action::FileRead {
                path: PathBuf::from("talk.json"),
                result: Ok(crate::test_support::sample_json().to_string()),
            },
        );
        assert_eq!(position(&app), Position::START);
        assert_eq!(tui.slide_card.offset(), 0);
    }

    #[test]
    fn test_failed_read_keeps_scroll() {
        let mut app = loaded_app(scenario_document());
        let mut tui = TuiState::default();
        tui.slide_card.scroll_state.set_offset(ratatui::layout::Position { x: 0, y: 2 });

        handle_event(&mut app, &mut tui, TuiEvent::InputChar('o'));
        for c in "x.json".chars() {
            handle_event(&mut app, &mut tui, TuiEvent::InputChar(c));
        }
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        handle_background(
            &mut app,
            &mut tui,
            Action::FileRead {
                path: PathBuf::from("x.json"),
                result: Ok("{}".to_string()),
            },
        );
        assert!(app.notification.is_some());
        assert_eq!(tui.slide_card.offset(), 2);
    }

    #[test]
    fn test_prompt_prefills_current_source() {
        let mut app = loaded_app(scenario_document());
        app.source = Some(PathBuf::from("talk.json"));
        let mut tui = TuiState::default();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('o'));
        assert_eq!(tui.prompt.as_ref().unwrap().buffer, "talk.json");

        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        assert!(tui.prompt.is_none());
        assert_eq!(position(&app), Position::START);
    }
}
