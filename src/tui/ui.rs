use crate::core::render::render_slide;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::title_bar::{self, HEADER_HEIGHT};
use crate::tui::components::{Control, PassphrasePrompt, SlideView, StatusBar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::LineGauge;

const UNTITLED_DECK: &str = "Untitled deck";

/// Screen regions of the unlocked viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerAreas {
    pub header: Rect,
    pub body: Rect,
    pub progress: Option<Rect>,
    pub footer: Rect,
}

pub fn viewer_areas(area: Rect, show_progress: bool) -> ViewerAreas {
    use Constraint::{Length, Min};
    let progress_height = if show_progress { 1 } else { 0 };
    let layout = Layout::vertical([
        Length(HEADER_HEIGHT),
        Min(0),
        Length(progress_height),
        Length(1),
    ]);
    let [header, body, progress, footer] = layout.areas(area);
    ViewerAreas {
        header,
        body,
        progress: show_progress.then_some(progress),
        footer,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let deck_title = app.deck.title().unwrap_or(UNTITLED_DECK);

    if !app.authorized {
        PassphrasePrompt {
            state: &tui.prompt,
            deck_title,
            status: &app.status_message,
        }
        .render(frame, frame.area());
        return;
    }

    let areas = viewer_areas(frame.area(), tui.show_progress);
    let tree = render_slide(app.current_slide());
    let navigator = app.navigator();

    TitleBar {
        title: &tree.title,
        subtitle: tree.subtitle.as_deref(),
        position: navigator.position(),
        can_previous: navigator.can_go_previous(),
        can_next: navigator.can_go_next(),
    }
    .render(frame, areas.header);

    let body = areas.body.inner(Margin::new(1, 1));
    SlideView::new(&mut tui.slide_view, &tree).render(frame, body);

    if let Some(progress_area) = areas.progress {
        let gauge = LineGauge::default()
            .ratio(navigator.progress())
            .label("")
            .filled_style(Style::new().fg(Color::Cyan))
            .unfilled_style(Style::new().fg(Color::DarkGray));
        frame.render_widget(gauge, progress_area);
    }

    StatusBar {
        deck_title,
        jump_buffer: &tui.jump_buffer,
        status_message: &app.status_message,
        footer: &tui.footer,
    }
    .render(frame, areas.footer);
}

/// Hit test: which header control, if any, is at the given screen cell.
pub fn hit_test_controls(
    frame_area: Rect,
    show_progress: bool,
    column: u16,
    row: u16,
) -> Option<Control> {
    let areas = viewer_areas(frame_area, show_progress);
    title_bar::control_at(areas.header, column, row)
}
