//! # Content Renderer
//!
//! Turns a `Slide` into a `RenderTree`: a small, UI-agnostic description of
//! what goes on screen. The TUI adapter walks the tree and draws widgets; a
//! different adapter could walk the same tree.
//!
//! ```text
//! Slide ──► render_slide() ──► RenderTree { title, subtitle, body: [Node] }
//! ```
//!
//! Rendering is a pure function of the slide. Input order is kept everywhere
//! (items, rows, sections), and table rows are passed through exactly as the
//! deck gives them.

use crate::core::deck::{
    BridgeTerms, Content, Entry, Metric, Section, Slide, TableData, TeamMember,
};

/// Text shown in place of a layout this build does not know.
pub const UNSUPPORTED_MESSAGE: &str = "Content format not supported";

/// Column hint for grid layouts. The adapter may use fewer on narrow screens.
const GRID_COLUMNS: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTree {
    pub title: String,
    pub subtitle: Option<String>,
    pub body: Vec<Node>,
}

/// A labelled piece of text: a numbered entry or a key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeled {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    BulletList(Vec<String>),
    NumberedList(Vec<Labeled>),
    /// Highlighted closing line (summary, notes, footer).
    Callout(String),
    /// A boxed fact: heading, optional big value, supporting text.
    Card {
        title: String,
        value: Option<String>,
        body: String,
    },
    Grid {
        columns: u16,
        cells: Vec<Node>,
    },
    Section {
        header: String,
        children: Vec<Node>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    KeyValues(Vec<Labeled>),
    Unsupported {
        message: String,
    },
}

pub fn render_slide(slide: &Slide) -> RenderTree {
    RenderTree {
        title: slide.title.clone(),
        subtitle: slide.subtitle.clone(),
        body: render_content(&slide.content),
    }
}

/// One arm per layout. Adding a `Content` variant without a case here is a
/// compile error.
pub fn render_content(content: &Content) -> Vec<Node> {
    match content {
        Content::BulletList { items, summary } => {
            let mut body = vec![Node::BulletList(items.clone())];
            push_callout(&mut body, summary);
            body
        }
        Content::MetricsGrid {
            metrics,
            bullets,
            summary,
        } => {
            let mut body = vec![grid(metrics.iter().map(metric_card).collect())];
            if !bullets.is_empty() {
                body.push(Node::BulletList(bullets.clone()));
            }
            push_callout(&mut body, summary);
            body
        }
        Content::StructuredList { items, footer } => {
            let mut body = vec![Node::NumberedList(items.iter().map(entry).collect())];
            push_callout(&mut body, footer);
            body
        }
        Content::Table {
            headers,
            rows,
            notes,
            initiatives,
        } => {
            let mut body = vec![table(headers, rows)];
            push_callout(&mut body, notes);
            if !initiatives.is_empty() {
                body.push(Node::Section {
                    header: "Key Initiatives".to_string(),
                    children: vec![Node::BulletList(initiatives.clone())],
                });
            }
            body
        }
        Content::MultiSection { sections } => {
            vec![grid(sections.iter().map(section).collect())]
        }
        Content::BridgeDetails { details, table: data } => {
            vec![terms(details), table_data(data)]
        }
        Content::TeamGrid { members } => {
            vec![grid(members.iter().map(member_card).collect())]
        }
        Content::Unsupported => vec![Node::Unsupported {
            message: UNSUPPORTED_MESSAGE.to_string(),
        }],
    }
}

fn push_callout(body: &mut Vec<Node>, text: &Option<String>) {
    if let Some(text) = text {
        body.push(Node::Callout(text.clone()));
    }
}

fn grid(cells: Vec<Node>) -> Node {
    Node::Grid {
        columns: GRID_COLUMNS,
        cells,
    }
}

fn metric_card(metric: &Metric) -> Node {
    Node::Card {
        title: metric.label.clone(),
        value: Some(metric.value.clone()),
        body: metric.detail.clone(),
    }
}

fn member_card(member: &TeamMember) -> Node {
    Node::Card {
        title: member.name.clone(),
        value: Some(member.role.clone()),
        body: member.bio.clone(),
    }
}

fn entry(entry: &Entry) -> Labeled {
    Labeled {
        label: entry.header.clone(),
        text: entry.text.clone(),
    }
}

fn section(section: &Section) -> Node {
    Node::Section {
        header: section.header.clone(),
        children: vec![Node::BulletList(section.items.clone())],
    }
}

fn terms(details: &BridgeTerms) -> Node {
    let pair = |label: &str, text: &str| Labeled {
        label: label.to_string(),
        text: text.to_string(),
    };
    Node::KeyValues(vec![
        pair("Size", &details.size),
        pair("Instrument", &details.instrument),
        pair("Purpose", &details.purpose),
    ])
}

fn table(headers: &[String], rows: &[Vec<String>]) -> Node {
    Node::Table {
        headers: headers.to_vec(),
        rows: rows.to_vec(),
    }
}

fn table_data(data: &TableData) -> Node {
    table(&data.headers, &data.rows)
}
