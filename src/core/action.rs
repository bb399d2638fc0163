//! # Actions
//!
//! Everything that can happen in the viewer becomes an `Action`.
//! User presses →? That's `Action::Next`.
//! User types the passphrase and hits Enter? That's `Action::Unlock(text)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state and returns an `Effect` telling the adapter what to do next. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&mut app, action), expected)`.

use log::{debug, info, warn};

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    /// Jump to a 0-based slide index.
    GoTo(usize),
    First,
    Last,
    /// Passphrase attempt from the gate prompt.
    Unlock(String),
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The current slide changed (or the deck was just unlocked).
    SlideChanged,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);

    if let Action::Quit = action {
        info!("Quit requested on slide {}", app.navigator.position().0);
        return Effect::Quit;
    }

    if !app.authorized {
        return match action {
            Action::Unlock(attempt) => unlock(app, &attempt),
            other => {
                debug!("Ignoring {:?} while the deck is locked", other);
                Effect::None
            }
        };
    }

    let moved = match action {
        Action::Next => app.navigator.next(),
        Action::Previous => app.navigator.previous(),
        Action::GoTo(index) => {
            if index >= app.navigator.len() {
                app.status_message = format!(
                    "No slide {} (deck has {})",
                    index + 1,
                    app.navigator.len()
                );
                debug!("GoTo({}) out of range, ignored", index);
                return Effect::None;
            }
            app.navigator.go_to(index)
        }
        Action::First => app.navigator.first(),
        Action::Last => app.navigator.last(),
        Action::Unlock(_) => return Effect::None,
        Action::Quit => return Effect::Quit,
    };

    if moved {
        app.status_message.clear();
        debug!(
            "Now on slide {}/{}",
            app.navigator.position().0,
            app.navigator.position().1
        );
        Effect::SlideChanged
    } else {
        debug!("Navigation saturated at slide {}", app.navigator.current());
        Effect::None
    }
}

fn unlock(app: &mut App, attempt: &str) -> Effect {
    if app.gate.check(attempt) {
        info!("Deck unlocked");
        app.authorized = true;
        app.status_message.clear();
        Effect::SlideChanged
    } else {
        warn!("Rejected passphrase attempt");
        app.status_message = String::from("Incorrect passphrase");
        Effect::None
    }
}
