//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! A slide deck has nothing to animate, so the loop only redraws after an
//! event (key, mouse or terminal resize). Between events it sleeps in
//! `poll_event_timeout`, and every event already queued is drained before
//! the next frame so a held-down arrow key never lags behind.
//!
//! ## Input Routing
//!
//! - Locked deck: everything goes to the passphrase prompt.
//! - Unlocked: digits build a slide-number jump (Enter to go), scroll keys
//!   scroll the slide body, clicks hit the header controls, and the rest
//!   goes through `event::navigation_action`.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::deck::Deck;
use crate::core::gate::AccessGate;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{Control, PassphrasePromptState, PromptEvent, SlideViewState};
use crate::tui::event::{TuiEvent, navigation_action, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);
/// Longest slide number the jump buffer accepts.
const MAX_JUMP_DIGITS: usize = 4;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub slide_view: SlideViewState,
    pub prompt: PassphrasePromptState,
    /// Digits typed for a "go to slide" jump
    pub jump_buffer: String,
    // Display settings
    pub show_progress: bool,
    pub footer: String,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            slide_view: SlideViewState::new(),
            prompt: PassphrasePromptState::new(),
            jump_buffer: String::new(),
            show_progress: config.show_progress,
            footer: config.footer.clone(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the core state for a loaded deck.
pub fn build_app(config: &ResolvedConfig, deck: Deck) -> App {
    let gate = AccessGate::from_passphrase(config.passphrase.as_deref());
    let app = App::new(Arc::new(deck), gate);
    match config.start_slide {
        Some(slide) if slide > 0 => app.with_start(slide - 1),
        _ => app,
    }
}

pub fn run(config: ResolvedConfig, deck: Deck) -> std::io::Result<()> {
    let mut app = build_app(&config, deck);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        let mut needs_redraw = true; // Force first frame

        loop {
            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
                needs_redraw = false;
            }

            let first_event = poll_event_timeout(IDLE_POLL);
            if first_event.is_some() {
                needs_redraw = true;
            }

            // Process first event + drain ALL pending events before next draw
            let mut should_quit = false;
            for event in first_event
                .into_iter()
                .chain(std::iter::from_fn(poll_event_immediate))
            {
                // Resize just needs a redraw (already flagged above)
                if matches!(event, TuiEvent::Resize) {
                    continue;
                }

                let action = if app.authorized {
                    let frame_area = terminal.get_frame().area();
                    let show_progress = tui.show_progress;
                    viewer_action(&event, &app, &mut tui, |column, row| {
                        ui::hit_test_controls(frame_area, show_progress, column, row)
                    })
                } else {
                    gate_action(&event, &mut tui)
                };

                if let Some(action) = action {
                    match update(&mut app, action) {
                        Effect::SlideChanged => tui.slide_view.reset(),
                        Effect::Quit => should_quit = true,
                        Effect::None => {}
                    }
                }
                if should_quit {
                    break;
                }
            }

            if should_quit {
                info!("Leaving viewer");
                return Ok(());
            }
        }
    });
    ratatui::restore();
    result
}

/// Map an event to an action while the deck is unlocked.
///
/// `hit_test` resolves a click position to a header control.
fn viewer_action(
    event: &TuiEvent,
    app: &App,
    tui: &mut TuiState,
    hit_test: impl Fn(u16, u16) -> Option<Control>,
) -> Option<Action> {
    let navigator = app.navigator();
    match event {
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::MouseClick(column, row) => match hit_test(*column, *row) {
            Some(Control::Previous) if navigator.can_go_previous() => Some(Action::Previous),
            Some(Control::Next) if navigator.can_go_next() => Some(Action::Next),
            _ => None,
        },
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.slide_view.handle_event(event);
            None
        }
        TuiEvent::InputChar(c) if c.is_ascii_digit() => {
            if tui.jump_buffer.len() < MAX_JUMP_DIGITS {
                tui.jump_buffer.push(*c);
            }
            None
        }
        TuiEvent::Submit => {
            let jump = std::mem::take(&mut tui.jump_buffer);
            match jump.parse::<usize>() {
                Ok(slide) if slide > 0 => Some(Action::GoTo(slide - 1)),
                _ => {
                    debug!("Ignoring jump to {:?}", jump);
                    None
                }
            }
        }
        TuiEvent::Backspace => {
            tui.jump_buffer.pop();
            None
        }
        TuiEvent::Escape if !tui.jump_buffer.is_empty() => {
            tui.jump_buffer.clear();
            None
        }
        TuiEvent::Escape => Some(Action::Quit),
        other => {
            tui.jump_buffer.clear();
            navigation_action(other)
        }
    }
}

/// Map an event to an action while the deck is locked.
fn gate_action(event: &TuiEvent, tui: &mut TuiState) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    match tui.prompt.handle_event(event)? {
        PromptEvent::Submit(attempt) => Some(Action::Unlock(attempt)),
        PromptEvent::Cancel => Some(Action::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;
    use crate::test_support::{locked_app, sample_deck, test_app};

    fn config() -> ResolvedConfig {
        ResolvedConfig {
            deck_path: None,
            start_slide: None,
            passphrase: None,
            show_progress: true,
            footer: String::new(),
        }
    }

    fn no_hit(_: u16, _: u16) -> Option<Control> {
        None
    }

    fn press(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
        let action = if app.authorized {
            viewer_action(&event, app, tui, no_hit)
        } else {
            gate_action(&event, tui)
        };
        action.map_or(Effect::None, |action| update(app, action))
    }

    #[test]
    fn test_build_app_applies_start_and_gate() {
        let mut cfg = config();
        cfg.start_slide = Some(3);
        cfg.passphrase = Some("bridge".to_string());
        let app = build_app(&cfg, sample_deck(5));
        assert_eq!(app.navigator().current(), 2);
        assert!(!app.authorized);

        cfg.start_slide = Some(0);
        cfg.passphrase = None;
        let app = build_app(&cfg, catalog::builtin().unwrap());
        assert_eq!(app.navigator().current(), 0);
        assert!(app.authorized);
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let mut app = test_app(3);
        let mut tui = TuiState::new(&config());
        assert_eq!(
            press(&mut app, &mut tui, TuiEvent::Right),
            Effect::SlideChanged
        );
        assert_eq!(press(&mut app, &mut tui, TuiEvent::End), Effect::SlideChanged);
        assert_eq!(press(&mut app, &mut tui, TuiEvent::Right), Effect::None);
        assert_eq!(app.navigator().current(), 2);
        assert_eq!(
            press(&mut app, &mut tui, TuiEvent::Left),
            Effect::SlideChanged
        );
        assert_eq!(app.navigator().current(), 1);
    }

    #[test]
    fn test_jump_to_slide_number() {
        let mut app = test_app(12);
        let mut tui = TuiState::new(&config());
        press(&mut app, &mut tui, TuiEvent::InputChar('1'));
        press(&mut app, &mut tui, TuiEvent::InputChar('0'));
        assert_eq!(tui.jump_buffer, "10");
        assert_eq!(
            press(&mut app, &mut tui, TuiEvent::Submit),
            Effect::SlideChanged
        );
        assert_eq!(app.navigator().current(), 9);
        assert!(tui.jump_buffer.is_empty());
    }

    #[test]
    fn test_jump_out_of_range_keeps_slide() {
        let mut app = test_app(3);
        let mut tui = TuiState::new(&config());
        for c in "99".chars() {
            press(&mut app, &mut tui, TuiEvent::InputChar(c));
        }
        assert_eq!(press(&mut app, &mut tui, TuiEvent::Submit), Effect::None);
        assert_eq!(app.navigator().current(), 0);
        assert_eq!(app.status_message, "No slide 99 (deck has 3)");

        // Slide 0 does not exist either, and is not treated as slide 1
        press(&mut app, &mut tui, TuiEvent::InputChar('0'));
        assert_eq!(press(&mut app, &mut tui, TuiEvent::Submit), Effect::None);
    }

    #[test]
    fn test_escape_clears_jump_before_quitting() {
        let mut app = test_app(3);
        let mut tui = TuiState::new(&config());
        press(&mut app, &mut tui, TuiEvent::InputChar('2'));
        assert_eq!(press(&mut app, &mut tui, TuiEvent::Escape), Effect::None);
        assert!(tui.jump_buffer.is_empty());
        assert_eq!(press(&mut app, &mut tui, TuiEvent::Escape), Effect::Quit);
    }

    #[test]
    fn test_jump_buffer_is_bounded() {
        let mut app = test_app(3);
        let mut tui = TuiState::new(&config());
        for _ in 0..10 {
            press(&mut app, &mut tui, TuiEvent::InputChar('9'));
        }
        assert_eq!(tui.jump_buffer, "9999");
    }

    #[test]
    fn test_clicks_only_fire_enabled_controls() {
        let mut app = test_app(2);
        let mut tui = TuiState::new(&config());
        let click = TuiEvent::MouseClick(0, 0);

        let prev = |_: u16, _: u16| Some(Control::Previous);
        let next = |_: u16, _: u16| Some(Control::Next);

        assert_eq!(viewer_action(&click, &app, &mut tui, prev), None);
        assert_eq!(
            viewer_action(&click, &app, &mut tui, next),
            Some(Action::Next)
        );
        update(&mut app, Action::Next);
        assert_eq!(viewer_action(&click, &app, &mut tui, next), None);
        assert_eq!(
            viewer_action(&click, &app, &mut tui, prev),
            Some(Action::Previous)
        );
    }

    #[test]
    fn test_gate_flow() {
        let mut app = locked_app(3, "bridge");
        let mut tui = TuiState::new(&config());

        // Navigation keys are typed into the prompt, not acted on
        assert_eq!(press(&mut app, &mut tui, TuiEvent::Right), Effect::None);
        for c in "wrong".chars() {
            press(&mut app, &mut tui, TuiEvent::InputChar(c));
        }
        assert_eq!(press(&mut app, &mut tui, TuiEvent::Submit), Effect::None);
        assert_eq!(app.status_message, "Incorrect passphrase");

        for c in "bridge".chars() {
            press(&mut app, &mut tui, TuiEvent::InputChar(c));
        }
        assert_eq!(
            press(&mut app, &mut tui, TuiEvent::Submit),
            Effect::SlideChanged
        );
        assert!(app.authorized);
        assert_eq!(app.navigator().current(), 0);
    }

    #[test]
    fn test_escape_at_gate_quits() {
        let mut app = locked_app(1, "bridge");
        let mut tui = TuiState::new(&config());
        assert_eq!(press(&mut app, &mut tui, TuiEvent::Escape), Effect::Quit);
    }
}
