//! # SlideView Component
//!
//! Draws the body of the current slide from its `RenderTree`.
//!
//! ## Responsibilities
//!
//! - Lay out render nodes (lists, grids, tables, callouts) for the current width
//! - Scroll slides that are taller than the terminal
//! - Reset scrolling when the slide changes
//!
//! ## Architecture
//!
//! `SlideView` is a transient component (created each frame) that wraps
//! `&'a mut SlideViewState` (persistent state) and `&'a RenderTree` (props).
//! Layout happens in [`layout`], which wraps all text up front so the
//! `ScrollView` knows its content height before anything is drawn.

mod layout;

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::widgets::{Block, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::render::RenderTree;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use layout::{GAP, Piece};

/// Scroll state for the slide body.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct SlideViewState {
    pub scroll_state: ScrollViewState,
    /// Height of the laid-out slide, from the last render
    pub content_height: u16,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl SlideViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top; called whenever the slide changes.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for SlideViewState {
    type Event = (); // Scrolling is handled internally

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

/// Scrollable slide body.
/// Created fresh each frame with references to state and data.
pub struct SlideView<'a> {
    pub state: &'a mut SlideViewState,
    pub tree: &'a RenderTree,
}

impl<'a> SlideView<'a> {
    pub fn new(state: &'a mut SlideViewState, tree: &'a RenderTree) -> Self {
        Self { state, tree }
    }
}

impl<'a> Component for SlideView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let pieces = layout::layout(&self.tree.body, content_width);

        let heights: Vec<u16> = pieces.iter().map(Piece::height).collect();
        let gaps = GAP.saturating_mul(heights.len().saturating_sub(1) as u16);
        let total_height = heights
            .iter()
            .fold(gaps, |total, &height| total.saturating_add(height));

        self.state.content_height = total_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y: u16 = 0;
        for (piece, height) in pieces.into_iter().zip(heights) {
            let rect = Rect::new(0, y, content_width, height);
            render_piece(&mut scroll_view, piece, rect);
            y = y.saturating_add(height).saturating_add(GAP);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

fn render_piece(scroll_view: &mut ScrollView, piece: Piece, rect: Rect) {
    match piece {
        Piece::Lines(lines) => scroll_view.render_widget(Paragraph::new(lines), rect),
        Piece::Table(table) => scroll_view.render_widget(table.to_widget(), rect),
        Piece::Panels { width, panels } => {
            let mut x = rect.x;
            for panel in panels {
                let block = Block::bordered()
                    .title(panel.title)
                    .padding(Padding::horizontal(1));
                let panel_rect = Rect::new(x, rect.y, width, rect.height);
                scroll_view.render_widget(Paragraph::new(panel.lines).block(block), panel_rect);
                x = x.saturating_add(width).saturating_add(GAP);
            }
        }
    }
}
