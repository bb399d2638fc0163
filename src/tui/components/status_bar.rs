//! # StatusBar Component
//!
//! One-line footer: deck title on the left, the pending slide-number jump
//! or the latest status message in the middle, footer text on the right.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

pub struct StatusBar<'a> {
    pub deck_title: &'a str,
    /// Digits typed so far for a "go to slide" jump
    pub jump_buffer: &'a str,
    pub status_message: &'a str,
    pub footer: &'a str,
}

impl<'a> StatusBar<'a> {
    fn middle_text(&self) -> String {
        if !self.jump_buffer.is_empty() {
            format!("Go to slide: {}", self.jump_buffer)
        } else {
            self.status_message.to_string()
        }
    }
}

impl<'a> Component for StatusBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::new().fg(Color::DarkGray);
        let [left, middle, right] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(self.deck_title).style(dim), left);
        frame.render_widget(
            Paragraph::new(self.middle_text())
                .style(Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            middle,
        );
        frame.render_widget(
            Paragraph::new(self.footer)
                .style(dim)
                .alignment(Alignment::Right),
            right,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(status_bar: &mut StatusBar) -> String {
        let backend = TestBackend::new(90, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                status_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_shows_title_status_and_footer() {
        let text = render(&mut StatusBar {
            deck_title: "Investor Deck",
            jump_buffer: "",
            status_message: "No slide 40 (deck has 11)",
            footer: "Confidential",
        });
        assert!(text.starts_with("Investor Deck"));
        assert!(text.contains("No slide 40 (deck has 11)"));
        assert!(text.trim_end().ends_with("Confidential"));
    }

    #[test]
    fn test_jump_buffer_takes_precedence() {
        let text = render(&mut StatusBar {
            deck_title: "Deck",
            jump_buffer: "12",
            status_message: "old message",
            footer: "",
        });
        assert!(text.contains("Go to slide: 12"));
        assert!(!text.contains("old message"));
    }
}
