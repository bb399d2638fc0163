//! Pure layout for the slide body: `Node`s become fixed-height `Piece`s.
//!
//! Text is wrapped here with `textwrap` rather than by `Paragraph`, so the
//! height of every piece is known before anything is drawn. The scroll view
//! needs the total content height up front.

use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Cell, Row, Table};
use unicode_width::UnicodeWidthStr;

use crate::core::render::{Labeled, Node};

/// Blank rows between pieces, and blank columns between grid panels.
pub(super) const GAP: u16 = 1;
/// Borders (2) + horizontal padding (2) around a grid panel
pub(super) const PANEL_HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders of a panel or table
const VERTICAL_OVERHEAD: u16 = 2;
/// Left + right borders of a table
const TABLE_HORIZONTAL_OVERHEAD: u16 = 2;
/// Below this width a grid collapses to a single column.
const MIN_PANEL_WIDTH: u16 = 28;
const COLUMN_SPACING: u16 = 1;

/// A laid-out chunk of the slide body with a known height.
pub(super) enum Piece {
    Lines(Vec<Line<'static>>),
    /// One row of a grid: equally wide bordered panels.
    Panels { width: u16, panels: Vec<Panel> },
    Table(TableLayout),
}

pub(super) struct Panel {
    pub title: String,
    pub lines: Vec<Line<'static>>,
}

impl Piece {
    pub(super) fn height(&self) -> u16 {
        match self {
            Piece::Lines(lines) => lines.len() as u16,
            Piece::Panels { panels, .. } => {
                let tallest = panels.iter().map(|p| p.lines.len()).max().unwrap_or(0);
                tallest as u16 + VERTICAL_OVERHEAD
            }
            Piece::Table(table) => table.height(),
        }
    }
}

/// Lay out a slide body for the given content width.
pub(super) fn layout(body: &[Node], width: u16) -> Vec<Piece> {
    let mut pieces = Vec::new();
    for node in body {
        match node {
            Node::Grid { columns, cells } => {
                let columns = effective_columns(*columns, width);
                let panel_width = panel_width(columns, width);
                let inner = panel_width.saturating_sub(PANEL_HORIZONTAL_OVERHEAD);
                for row in cells.chunks(columns as usize) {
                    pieces.push(Piece::Panels {
                        width: panel_width,
                        panels: row.iter().map(|cell| panel(cell, inner)).collect(),
                    });
                }
            }
            Node::Table { headers, rows } => {
                pieces.push(Piece::Table(TableLayout::new(headers, rows, width)));
            }
            other => pieces.push(Piece::Lines(node_lines(other, width))),
        }
    }
    pieces
}

/// Grid columns that fit in `width`, at least one.
pub(super) fn effective_columns(requested: u16, width: u16) -> u16 {
    let mut columns = requested.max(1);
    while columns > 1 && panel_width(columns, width) < MIN_PANEL_WIDTH {
        columns -= 1;
    }
    columns
}

fn panel_width(columns: u16, width: u16) -> u16 {
    width.saturating_sub(GAP * (columns - 1)) / columns
}

fn panel(cell: &Node, inner_width: u16) -> Panel {
    match cell {
        Node::Card { title, value, body } => {
            let mut lines = Vec::new();
            if let Some(value) = value {
                lines.extend(styled(
                    wrap(value, inner_width, "", ""),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            lines.extend(plain(wrap(body, inner_width, "", "")));
            Panel {
                title: title.clone(),
                lines,
            }
        }
        Node::Section { header, children } => Panel {
            title: header.clone(),
            lines: children
                .iter()
                .flat_map(|child| node_lines(child, inner_width))
                .collect(),
        },
        other => Panel {
            title: String::new(),
            lines: node_lines(other, inner_width),
        },
    }
}

/// Render any node as plain wrapped lines.
pub(super) fn node_lines(node: &Node, width: u16) -> Vec<Line<'static>> {
    match node {
        Node::BulletList(items) => items
            .iter()
            .flat_map(|item| plain(wrap(item, width, "• ", "  ")))
            .collect(),
        Node::NumberedList(entries) => numbered(entries, width),
        Node::Callout(text) => styled(
            wrap(text, width, "▌ ", "▌ "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ),
        Node::Card { title, value, body } => {
            let mut lines = vec![Line::from(Span::styled(
                title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            if let Some(value) = value {
                lines.extend(styled(
                    wrap(value, width, "", ""),
                    Style::default().fg(Color::Cyan),
                ));
            }
            lines.extend(plain(wrap(body, width, "", "")));
            lines
        }
        Node::Section { header, children } => {
            let mut lines = styled(
                wrap(header, width, "", ""),
                Style::default()
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
            for child in children {
                lines.extend(node_lines(child, width));
            }
            lines
        }
        Node::KeyValues(pairs) => pairs
            .iter()
            .flat_map(|pair| {
                let mut lines = vec![Line::from(Span::styled(
                    pair.label.to_uppercase(),
                    Style::default().fg(Color::DarkGray),
                ))];
                lines.extend(styled(
                    wrap(&pair.text, width, "", ""),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                lines
            })
            .collect(),
        Node::Grid { cells, .. } => cells.iter().flat_map(|c| node_lines(c, width)).collect(),
        Node::Table { headers, rows } => std::iter::once(headers)
            .chain(rows)
            .flat_map(|row| plain(wrap(&row.join(" │ "), width, "", "")))
            .collect(),
        Node::Unsupported { message } => styled(
            wrap(message, width, "⚠ ", "  "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn numbered(entries: &[Labeled], width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let marker = format!("{}. ", i + 1);
        let indent = " ".repeat(marker.width());
        lines.extend(styled(
            wrap(&entry.label, width, &marker, &indent),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.extend(styled(
            wrap(&entry.text, width, &indent, &indent),
            Style::default().fg(Color::Gray),
        ));
    }
    lines
}

/// Wrap `text` to `width` columns with hanging indents. Never returns an
/// empty vec, and never wraps narrower than the indent plus one column.
pub(super) fn wrap(text: &str, width: u16, first: &str, rest: &str) -> Vec<String> {
    let floor = first.width().max(rest.width()) + 1;
    let width = (width as usize).max(floor);
    let options = textwrap::Options::new(width)
        .initial_indent(first)
        .subsequent_indent(rest)
        .break_words(true);
    let lines: Vec<String> = textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if lines.is_empty() {
        vec![first.to_string()]
    } else {
        lines
    }
}

fn plain(lines: Vec<String>) -> Vec<Line<'static>> {
    lines.into_iter().map(Line::from).collect()
}

fn styled(lines: Vec<String>, style: Style) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect()
}

// ============================================================================
// Tables
// ============================================================================

/// A table with column widths fixed and every cell pre-wrapped.
pub(super) struct TableLayout {
    pub widths: Vec<u16>,
    pub header: Vec<Vec<String>>,
    pub rows: Vec<Vec<Vec<String>>>,
}

impl TableLayout {
    pub(super) fn new(headers: &[String], rows: &[Vec<String>], width: u16) -> Self {
        let spacing = COLUMN_SPACING * (headers.len().saturating_sub(1) as u16);
        let available = width.saturating_sub(TABLE_HORIZONTAL_OVERHEAD + spacing);
        let widths = column_widths(headers, rows, available);
        let wrap_row = |row: &[String]| -> Vec<Vec<String>> {
            row.iter()
                .zip(&widths)
                .map(|(cell, &w)| wrap(cell, w, "", ""))
                .collect()
        };
        Self {
            header: wrap_row(headers),
            rows: rows.iter().map(|row| wrap_row(row)).collect(),
            widths,
        }
    }

    /// Borders + header + header margin + every row.
    pub(super) fn height(&self) -> u16 {
        let rows: u16 = self.rows.iter().map(|row| row_height(row)).sum();
        VERTICAL_OVERHEAD + row_height(&self.header) + 1 + rows
    }

    pub(super) fn to_widget(&self) -> Table<'static> {
        let to_row = |cells: &[Vec<String>]| {
            Row::new(
                cells
                    .iter()
                    .map(|lines| Cell::from(Text::from(lines.join("\n")))),
            )
            .height(row_height(cells))
        };
        let header = to_row(&self.header)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);
        Table::new(
            self.rows.iter().map(|row| to_row(row)),
            self.widths.iter().map(|&w| Constraint::Length(w)),
        )
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)))
    }
}

fn row_height(cells: &[Vec<String>]) -> u16 {
    cells.iter().map(Vec::len).max().unwrap_or(1).max(1) as u16
}

/// Natural column widths, scaled down proportionally when they don't fit.
pub(super) fn column_widths(headers: &[String], rows: &[Vec<String>], available: u16) -> Vec<u16> {
    let natural: Vec<u16> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let widest_cell = rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0);
            header.width().max(widest_cell).max(1) as u16
        })
        .collect();

    let total: u32 = natural.iter().map(|&w| w as u32).sum();
    if total <= available as u32 {
        return natural;
    }
    natural
        .iter()
        .map(|&w| ((w as u32 * available as u32) / total).max(1) as u16)
        .collect()
}
