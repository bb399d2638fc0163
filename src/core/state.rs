//! # Application State
//!
//! Core viewer state. Domain logic only, no TUI-specific types.
//! Presentation state (scroll offsets, hit areas) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── deck: Arc<Deck>          // read-only catalog
//! ├── navigator: Navigator     // current slide, written only by update()
//! ├── gate: AccessGate         // passphrase, if any
//! ├── authorized: bool         // gate passed
//! └── status_message: String   // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use log::warn;

use crate::core::deck::{Deck, Slide};
use crate::core::gate::AccessGate;
use crate::core::navigation::Navigator;

pub struct App {
    pub deck: Arc<Deck>,
    pub(super) navigator: Navigator,
    pub gate: AccessGate,
    /// True once the gate has been passed (immediately, for an open gate).
    pub authorized: bool,
    pub status_message: String,
}

impl App {
    pub fn new(deck: Arc<Deck>, gate: AccessGate) -> Self {
        let navigator = Navigator::new(deck.len());
        let authorized = gate.is_open();
        Self {
            deck,
            navigator,
            gate,
            authorized,
            status_message: String::new(),
        }
    }

    /// Open on a 0-based slide index instead of the first slide.
    /// Out-of-range indices are logged and leave the viewer on slide 1.
    pub fn with_start(mut self, index: usize) -> Self {
        if index >= self.navigator.len() {
            warn!(
                "Start slide {} is past the end of the deck ({} slides)",
                index + 1,
                self.navigator.len()
            );
        } else {
            self.navigator.go_to(index);
        }
        self
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The slide under the cursor.
    pub fn current_slide(&self) -> &Slide {
        // Navigator is sized from the deck and never leaves [0, len-1]
        &self.deck.slides()[self.navigator.current()]
    }
}
