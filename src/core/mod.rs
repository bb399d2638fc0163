//! # Core Application Logic
//!
//! This module contains Lectern's deck model and navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck (slides)        │
//!                    │  • Navigator (cursor)   │
//!                    │  • update() (reducer)   │
//!                    │  • render (RenderTree)  │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │   Export   │
//!     │  Adapter   │      │  Adapter   │      │  (future)  │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`deck`]: `Slide`, the closed `Content` enum and the validated `Deck`
//! - [`catalog`]: the deck compiled into the binary
//! - [`navigation`]: `Navigator`, the bounded slide cursor
//! - [`state`]: the `App` struct, all viewer state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`render`]: `Slide` → `RenderTree`
//! - [`gate`]: the passphrase check
//! - [`config`]: `~/.lectern/config.toml` and override resolution
//!
//! `deck` and `config` read files; everything else is pure.

pub mod action;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod gate;
pub mod navigation;
pub mod render;
pub mod state;
