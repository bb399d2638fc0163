//! # TitleBar Component
//!
//! Slide header: title and subtitle on the left, position and Prev/Next
//! controls on the right.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives everything as props:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar {
//!     title: &tree.title,
//!     subtitle: tree.subtitle.as_deref(),
//!     position: app.navigator().position(),
//!     can_previous: app.navigator().can_go_previous(),
//!     can_next: app.navigator().can_go_next(),
//! };
//! title_bar.render(frame, area);
//! ```
//!
//! ### Fixed Control Geometry
//!
//! The controls sit in fixed-width cells at the right edge, so mouse hit
//! testing ([`control_at`]) only needs the header area and never the text
//! that was drawn into it.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Rows taken by the header: title, subtitle, bottom border.
pub const HEADER_HEIGHT: u16 = 3;

const PREVIOUS_LABEL: &str = " ‹ Prev ";
const NEXT_LABEL: &str = " Next › ";
const CONTROL_WIDTH: u16 = 8;
/// Fits "Slide 999 / 999".
const POSITION_WIDTH: u16 = 15;

/// A clickable header control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
}

/// Screen rectangles of the header's first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAreas {
    pub title: Rect,
    pub previous: Rect,
    pub position: Rect,
    pub next: Rect,
}

/// Split the header's first row into title, Prev, position and Next cells.
pub fn control_areas(area: Rect) -> ControlAreas {
    use Constraint::{Length, Min};
    let row = Rect::new(area.x, area.y, area.width, area.height.min(1));
    let [title, previous, _, position, _, next] = Layout::horizontal([
        Min(0),
        Length(CONTROL_WIDTH),
        Length(1),
        Length(POSITION_WIDTH),
        Length(1),
        Length(CONTROL_WIDTH),
    ])
    .areas(row);
    ControlAreas {
        title,
        previous,
        position,
        next,
    }
}

/// Which control, if any, is under the given screen cell.
pub fn control_at(area: Rect, column: u16, row: u16) -> Option<Control> {
    let areas = control_areas(area);
    let point = Position::new(column, row);
    if areas.previous.contains(point) {
        Some(Control::Previous)
    } else if areas.next.contains(point) {
        Some(Control::Next)
    } else {
        None
    }
}

fn control_style(enabled: bool) -> Style {
    if enabled {
        Style::new()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

/// Slide header.
///
/// # Props
///
/// - `title` / `subtitle`: from the current slide's render tree
/// - `position`: 1-based slide number and slide count
/// - `can_previous` / `can_next`: whether each control does anything
pub struct TitleBar<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub position: (usize, usize),
    pub can_previous: bool,
    pub can_next: bool,
}

impl<'a> Component for TitleBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::BOTTOM)
            .border_style(Style::new().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let areas = control_areas(inner);
        let title = Span::styled(self.title, Style::new().add_modifier(Modifier::BOLD));
        frame.render_widget(Paragraph::new(Line::from(title)), areas.title);

        frame.render_widget(
            Paragraph::new(PREVIOUS_LABEL).style(control_style(self.can_previous)),
            areas.previous,
        );
        let (current, total) = self.position;
        frame.render_widget(
            Paragraph::new(format!("Slide {} / {}", current, total)).alignment(Alignment::Center),
            areas.position,
        );
        frame.render_widget(
            Paragraph::new(NEXT_LABEL).style(control_style(self.can_next)),
            areas.next,
        );

        if let Some(subtitle) = self.subtitle
            && inner.height > 1
        {
            let row = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            let subtitle = Span::styled(subtitle, Style::new().fg(Color::Gray));
            frame.render_widget(Paragraph::new(Line::from(subtitle)), row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(title_bar: &mut TitleBar) -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, HEADER_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_title_position_and_controls() {
        let mut title_bar = TitleBar {
            title: "Market Opportunity",
            subtitle: Some("Why now"),
            position: (2, 11),
            can_previous: true,
            can_next: true,
        };
        let terminal = draw(&mut title_bar);

        let first = row_text(&terminal, 0);
        assert!(first.starts_with("Market Opportunity"));
        assert!(first.contains("Slide 2 / 11"));
        assert!(first.contains("Prev"));
        assert!(first.contains("Next"));
        assert!(row_text(&terminal, 1).starts_with("Why now"));
        assert!(row_text(&terminal, 2).contains('─'));
    }

    #[test]
    fn test_disabled_control_is_dimmed() {
        let mut title_bar = TitleBar {
            title: "Cover",
            subtitle: None,
            position: (1, 3),
            can_previous: false,
            can_next: true,
        };
        let terminal = draw(&mut title_bar);
        let areas = control_areas(Rect::new(0, 0, 80, HEADER_HEIGHT));
        let buffer = terminal.backend().buffer();

        let previous = &buffer[(areas.previous.x + 1, 0)];
        assert!(previous.modifier.contains(Modifier::DIM));
        let next = &buffer[(areas.next.x + 1, 0)];
        assert!(next.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_control_at() {
        let area = Rect::new(0, 0, 80, HEADER_HEIGHT);
        let areas = control_areas(area);

        assert_eq!(areas.next.x + areas.next.width, 80);
        assert_eq!(
            control_at(area, areas.previous.x, 0),
            Some(Control::Previous)
        );
        assert_eq!(
            control_at(area, areas.next.x + CONTROL_WIDTH - 1, 0),
            Some(Control::Next)
        );
        assert_eq!(control_at(area, areas.position.x, 0), None);
        assert_eq!(control_at(area, 0, 0), None);
        // Only the first row is clickable
        assert_eq!(control_at(area, areas.next.x, 1), None);
    }
}
