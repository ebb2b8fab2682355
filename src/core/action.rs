//! # Actions
//!
//! Everything that can happen in Deck becomes an `Action`.
//! User presses →? That's `Action::Next`.
//! A file read finishes? That's `Action::FileRead { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an [`Effect`] describing any I/O the caller should
//! perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::io;
use std::path::PathBuf;

use log::{info, warn};

use crate::core::deck::{self, Document};
use crate::core::navigator::Navigator;
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    Next,
    Previous,
    First,
    Last,
    /// Replace the current document with the one at this path.
    OpenFile(PathBuf),
    /// Re-read the file the current document came from.
    Reload,
    /// The background read for `path` finished.
    FileRead {
        path: PathBuf,
        result: io::Result<String>,
    },
    DismissNotification,
    Quit,
}

/// Work the adapter must do after an `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Read this file off the event loop and send back `Action::FileRead`.
    ReadFile(PathBuf),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Next | Action::Previous | Action::First | Action::Last => {
            // The error popup is modal.
            if app.notification.is_some() {
                return Effect::None;
            }
            if let Some(nav) = app.navigator.as_mut() {
                match action {
                    Action::Next => nav.advance(),
                    Action::Previous => nav.retreat(),
                    Action::First => nav.first(),
                    _ => nav.last(),
                };
            }
            Effect::None
        }
        Action::OpenFile(path) => {
            info!("Opening {}", path.display());
            app.status_message = format!("Loading {}...", path.display());
            app.pending_load = Some(path.clone());
            Effect::ReadFile(path)
        }
        Action::Reload => match app.source.clone() {
            Some(path) => update(app, Action::OpenFile(path)),
            None => Effect::None,
        },
        Action::FileRead { path, result } => {
            if app.pending_load.as_ref() != Some(&path) {
                warn!("Discarding stale read of {}", path.display());
                return Effect::None;
            }
            app.pending_load = None;

            let loaded = result
                .map_err(deck::LoadError::Io)
                .and_then(|text| deck::parse(&text));
            match loaded {
                Ok(document) => install(app, path, document),
                Err(e) => {
                    warn!("Failed to load {}: {}", path.display(), e);
                    app.status_message = restore_status(app);
                    let mut message = format!("Could not load {}: {}.", path.display(), e);
                    if e.is_malformed() {
                        message.push_str("\nMake sure it is a valid JSON array of topics.");
                    }
                    app.notification = Some(message);
                }
            }
            Effect::None
        }
        Action::DismissNotification => {
            app.notification = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Swap in a freshly loaded document, starting over at the first slide.
fn install(app: &mut App, path: PathBuf, document: Document) {
    app.status_message = document.summary();
    info!(
        "Installed {} ({})",
        path.display(),
        app.status_message
    );
    app.navigator = Some(Navigator::new(document));
    app.source = Some(path);
    app.notification = None;
}

fn restore_status(app: &App) -> String {
    match app.navigator.as_ref() {
        Some(nav) => nav.document().summary(),
        None => App::new().status_message,
    }
}
