//! # Core Application Logic
//!
//! This module contains Deck's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck (loader)        │
//!                    │  • Navigator (paging)   │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal, no UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`deck`]: Document model and the JSON loader/validator
//! - [`navigator`]: `Position`, the `advance`/`retreat` transitions, `Navigator`
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`config`]: `~/.deck/config.toml` and CLI override resolution

pub mod action;
pub mod config;
pub mod deck;
pub mod navigator;
pub mod state;
