//! # Application State
//!
//! Core business state for Deck. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigator: Option<Navigator>   // loaded document + position (None = nothing loaded)
//! ├── source: Option<PathBuf>        // file the current document came from
//! ├── pending_load: Option<PathBuf>  // file read in flight
//! ├── status_message: String         // status bar text
//! └── notification: Option<String>   // blocking error popup
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::path::PathBuf;

use crate::core::navigator::{Navigator, SlideView};

pub struct App {
    pub navigator: Option<Navigator>,
    pub source: Option<PathBuf>,
    /// Set while a file read is outstanding. Results for any other path are stale.
    pub pending_load: Option<PathBuf>,
    pub status_message: String,
    /// An ingestion failure the user hasn't acknowledged yet.
    pub notification: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            navigator: None,
            source: None,
            pending_load: None,
            status_message: String::from("Press o to open a presentation"),
            notification: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.navigator.is_some()
    }

    pub fn view(&self) -> Option<SlideView<'_>> {
        self.navigator.as_ref().and_then(Navigator::view)
    }

    /// File name of the current document, for display.
    pub fn source_name(&self) -> Option<String> {
        self.source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
