//! # PassphrasePrompt Component
//!
//! Centered overlay shown while the deck is locked. Typed characters are
//! masked; Enter submits the attempt and Esc leaves the viewer.
//!
//! The prompt only collects input. Whether the passphrase is right is
//! decided by `core::action::update` via `Action::Unlock`, which also sets
//! the status line this component displays on failure.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const MASK: char = '•';

/// Events emitted by the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Submit(String),
    Cancel,
}

/// Typed-but-unsubmitted passphrase.
/// Must be persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct PassphrasePromptState {
    buffer: String,
}

impl PassphrasePromptState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn masked(&self) -> String {
        self.buffer.chars().map(|_| MASK).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl EventHandler for PassphrasePromptState {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PromptEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                None
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::Submit => Some(PromptEvent::Submit(std::mem::take(&mut self.buffer))),
            TuiEvent::Escape => Some(PromptEvent::Cancel),
            _ => None,
        }
    }
}

/// Locked-deck overlay.
///
/// # Props
///
/// - `deck_title`: shown above the input so the viewer knows what they are unlocking
/// - `status`: last failure message, empty when there is none
pub struct PassphrasePrompt<'a> {
    pub state: &'a PassphrasePromptState,
    pub deck_title: &'a str,
    pub status: &'a str,
}

impl<'a> Component for PassphrasePrompt<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 9, area);
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .title(" Access Required ")
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" Enter unlock · Esc quit ").centered())
            .border_style(Style::new().fg(Color::Cyan))
            .padding(Padding::horizontal(2));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        use Constraint::Length;
        let [title_row, hint_row, _, input_row, status_row] =
            Layout::vertical([Length(1), Length(1), Length(1), Length(1), Length(1)])
                .areas(inner);

        frame.render_widget(
            Paragraph::new(self.deck_title)
                .style(Style::new().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            title_row,
        );
        frame.render_widget(
            Paragraph::new("Enter the passphrase to view the deck.")
                .style(Style::new().fg(Color::Gray))
                .alignment(Alignment::Center),
            hint_row,
        );

        let field = format!("> {}", self.state.masked());
        frame.render_widget(Paragraph::new(field), input_row);

        if !self.status.is_empty() {
            frame.render_widget(
                Paragraph::new(self.status)
                    .style(Style::new().fg(Color::Red))
                    .alignment(Alignment::Center),
                status_row,
            );
        }

        // "> " prefix plus one cell per masked char
        let cursor_x = input_row
            .x
            .saturating_add(2)
            .saturating_add(self.state.len() as u16)
            .min(input_row.right().saturating_sub(1));
        frame.set_cursor_position((cursor_x, input_row.y));
    }
}

/// Rect of at most `width` x `height` centered in `outer`.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect::new(
        outer.x + (outer.width - width) / 2,
        outer.y + (outer.height - height) / 2,
        width,
        height,
    )
}
