//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Top status line (file, status, overall progress)
//! - `NavBar`: Previous/next controls, dimmed at the boundaries
//! - `LandingPage`: Shown while nothing is loaded
//! - `Notice`: Modal error popup
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SlideCard`: The current slide, with a scrollable body (`SlideCardState`)
//! - `PathPrompt`: Path input overlay for opening a file
//!
//! Components receive external data as "props", not by reaching into global
//! state. Navigation itself never happens here; the card renders whatever
//! `SlideView` the core hands it.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (Top status line)
//! ├── slide_card.rs   (Current slide + body scroll state)
//! ├── nav_bar.rs      (Previous / next controls)
//! ├── landing.rs      (No document loaded)
//! ├── path_prompt.rs  (Open-file overlay)
//! └── notice.rs       (Error popup)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod landing;
pub mod nav_bar;
pub mod notice;
pub mod path_prompt;
pub mod slide_card;

pub use landing::LandingPage;
pub use nav_bar::NavBar;
pub use notice::Notice;
pub use path_prompt::{PathPrompt, PromptEvent};
pub use slide_card::{SlideCard, SlideCardState};
