//! # Deck Catalog
//!
//! The slide schema and the immutable, ordered deck that holds it.
//!
//! ```text
//! Deck
//! ├── title: Option<String>
//! └── slides: Vec<Slide>      // N >= 1, never mutated after `Deck::new`
//!     └── Slide { id, title, subtitle, content: Content }
//! ```
//!
//! `Content` is a closed enum. Deck files name the variant with a `type`
//! field and the variant's fields sit next to it in the slide record:
//!
//! ```json
//! { "id": 4, "title": "Market", "type": "table",
//!   "headers": ["Category", "TAM"], "rows": [["Organic", "$31B"]] }
//! ```
//!
//! A `type` outside the known set loads as `Content::Unsupported` so an old
//! viewer can still page through a newer deck. Everything else that is wrong
//! with a deck (bad payloads, ragged tables, duplicate ids) fails in
//! `Deck::new`, before the viewer ever starts.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// Schema
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Slide {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(flatten)]
    pub content: Content,
}

/// The layout a slide is drawn with, plus exactly the data that layout needs.
///
/// The older content format stored every list under a generic `data` key, so
/// the list-bearing variants accept it as an alias.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    BulletList {
        #[serde(alias = "data")]
        items: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        summary: Option<String>,
    },
    MetricsGrid {
        #[serde(alias = "data")]
        metrics: Vec<Metric>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        bullets: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        summary: Option<String>,
    },
    StructuredList {
        #[serde(alias = "data")]
        items: Vec<Entry>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        footer: Option<String>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        initiatives: Vec<String>,
    },
    MultiSection {
        sections: Vec<Section>,
    },
    BridgeDetails {
        details: BridgeTerms,
        table: TableData,
    },
    TeamGrid {
        #[serde(alias = "data")]
        members: Vec<TeamMember>,
    },
    /// Any `type` this build does not know how to lay out.
    #[serde(other)]
    Unsupported,
}

impl Content {
    /// The tag this variant is written as in deck files.
    pub fn kind(&self) -> &'static str {
        match self {
            Content::BulletList { .. } => "bullet_list",
            Content::MetricsGrid { .. } => "metrics_grid",
            Content::StructuredList { .. } => "structured_list",
            Content::Table { .. } => "table",
            Content::MultiSection { .. } => "multi_section",
            Content::BridgeDetails { .. } => "bridge_details",
            Content::TeamGrid { .. } => "team_grid",
            Content::Unsupported => "unsupported",
        }
    }

    /// Header and row slices of any table this content carries.
    fn table_shape(&self) -> Option<(&[String], &[Vec<String>])> {
        match self {
            Content::Table { headers, rows, .. } => Some((headers.as_slice(), rows.as_slice())),
            Content::BridgeDetails { table, .. } => {
                Some((table.headers.as_slice(), table.rows.as_slice()))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Entry {
    pub header: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Section {
    pub header: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BridgeTerms {
    pub size: String,
    pub instrument: String,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum DeckError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Toml(toml::de::Error),
    Empty,
    DuplicateId(u32),
    RaggedRow {
        slide_id: u32,
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Io(e) => write!(f, "deck I/O error: {e}"),
            DeckError::Json(e) => write!(f, "deck JSON error: {e}"),
            DeckError::Toml(e) => write!(f, "deck TOML error: {e}"),
            DeckError::Empty => write!(f, "deck has no slides"),
            DeckError::DuplicateId(id) => write!(f, "slide id {id} appears more than once"),
            DeckError::RaggedRow {
                slide_id,
                row,
                expected,
                found,
            } => write!(
                f,
                "slide {slide_id}: table row {row} has {found} cells, headers have {expected}"
            ),
        }
    }
}

impl std::error::Error for DeckError {}

// ============================================================================
// Deck
// ============================================================================

/// On-disk shape of a deck file.
#[derive(Debug, Deserialize, Serialize)]
struct DeckFile {
    #[serde(default)]
    title: Option<String>,
    slides: Vec<Slide>,
}

/// An ordered, validated, read-only sequence of slides.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    title: Option<String>,
    slides: Vec<Slide>,
}

impl Deck {
    /// Build a deck, rejecting empty decks, duplicate ids and ragged tables.
    pub fn new(title: Option<String>, slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }

        let mut seen = HashSet::new();
        for slide in &slides {
            if !seen.insert(slide.id) {
                return Err(DeckError::DuplicateId(slide.id));
            }
            if let Some((headers, rows)) = slide.content.table_shape() {
                let expected = headers.len();
                if let Some((row, cells)) = rows
                    .iter()
                    .enumerate()
                    .find(|(_, cells)| cells.len() != expected)
                {
                    return Err(DeckError::RaggedRow {
                        slide_id: slide.id,
                        row,
                        expected,
                        found: cells.len(),
                    });
                }
            }
            if matches!(slide.content, Content::Unsupported) {
                debug!("Slide {} uses an unsupported content type", slide.id);
            }
        }

        Ok(Self { title, slides })
    }

    pub fn from_json_str(source: &str) -> Result<Self, DeckError> {
        let file: DeckFile = serde_json::from_str(source).map_err(DeckError::Json)?;
        Self::new(file.title, file.slides)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, DeckError> {
        let file: DeckFile = toml::from_str(source).map_err(DeckError::Toml)?;
        Self::new(file.title, file.slides)
    }

    /// Load a deck file. `.toml` files are parsed as TOML, anything else as JSON.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let contents = fs::read_to_string(path).map_err(DeckError::Io)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let deck = if is_toml {
            Self::from_toml_str(&contents)?
        } else {
            Self::from_json_str(&contents)?
        };
        info!("Loaded deck from {} ({} slides)", path.display(), deck.len());
        Ok(deck)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: `Deck::new` refuses empty decks.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bullet_slide, table_slide};

    #[test]
    fn test_empty_deck_is_rejected() {
        let err = Deck::new(None, Vec::new()).unwrap_err();
        assert!(matches!(err, DeckError::Empty));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let slides = vec![bullet_slide(1, &["a"]), bullet_slide(1, &["b"])];
        let err = Deck::new(None, slides).unwrap_err();
        assert!(matches!(err, DeckError::DuplicateId(1)));
    }

    #[test]
    fn test_ragged_table_row_is_rejected() {
        let slide = table_slide(7, &["A", "B"], &[&["1", "2"], &["3"]]);
        let err = Deck::new(None, vec![slide]).unwrap_err();
        match err {
            DeckError::RaggedRow {
                slide_id,
                row,
                expected,
                found,
            } => {
                assert_eq!(slide_id, 7);
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected RaggedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_ragged_bridge_table_is_rejected() {
        let json = r#"{ "slides": [{
            "id": 8, "title": "Bridge", "type": "bridge_details",
            "details": { "size": "$2M", "instrument": "Note", "purpose": "Capital" },
            "table": { "headers": ["Use", "Share"], "rows": [["Inventory", "40%", "extra"]] }
        }] }"#;
        let err = Deck::from_json_str(json).unwrap_err();
        assert!(matches!(err, DeckError::RaggedRow { slide_id: 8, .. }));
    }

    #[test]
    fn test_unknown_type_loads_as_unsupported() {
        let json = r#"{ "slides": [
            { "id": 1, "title": "Intro", "type": "bullet_list", "items": ["x"] },
            { "id": 2, "title": "Future", "type": "unknown_variant", "payload": 42 }
        ] }"#;
        let deck = Deck::from_json_str(json).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.slides()[1].content, Content::Unsupported);
        assert_eq!(deck.slides()[1].title, "Future");
    }

    #[test]
    fn test_legacy_data_alias() {
        let json = r#"{ "slides": [{
            "id": 10, "title": "Team", "type": "team_grid",
            "data": [{ "name": "Ada", "role": "CEO", "bio": "Founder." }]
        }] }"#;
        let deck = Deck::from_json_str(json).unwrap();
        match &deck.slides()[0].content {
            Content::TeamGrid { members } => assert_eq!(members[0].name, "Ada"),
            other => panic!("expected TeamGrid, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_required_field_is_a_parse_error() {
        let json = r#"{ "slides": [{ "id": 1, "title": "T", "type": "table", "headers": ["A"] }] }"#;
        let err = Deck::from_json_str(json).unwrap_err();
        assert!(matches!(err, DeckError::Json(_)));
    }

    #[test]
    fn test_toml_deck_parses() {
        let toml_str = r#"
title = "Quarterly"

[[slides]]
id = 1
title = "Highlights"
type = "bullet_list"
items = ["Revenue up", "Costs down"]
summary = "Good quarter."

[[slides]]
id = 2
title = "Numbers"
type = "table"
headers = ["Year", "Revenue"]
rows = [["2025", "$7.5M"], ["2026", "$9M"]]
notes = "Base case."
"#;
        let deck = Deck::from_toml_str(toml_str).unwrap();
        assert_eq!(deck.title(), Some("Quarterly"));
        assert_eq!(deck.len(), 2);
        match &deck.slides()[1].content {
            Content::Table {
                headers,
                rows,
                notes,
                initiatives,
            } => {
                assert_eq!(headers, &vec!["Year", "Revenue"]);
                assert_eq!(rows.len(), 2);
                assert_eq!(notes.as_deref(), Some("Base case."));
                assert!(initiatives.is_empty());
            }
            other => panic!("expected Table, got {other:?}"),
        }
    }

    #[test]
    fn test_load_picks_format_from_extension() {
        let dir = std::env::temp_dir().join(format!("lectern-deck-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("deck.toml");
        fs::write(
            &path,
            "[[slides]]\nid = 1\ntitle = \"Only\"\ntype = \"bullet_list\"\nitems = [\"x\"]\n",
        )
        .unwrap();

        let deck = Deck::load(&path).unwrap();
        assert_eq!(deck.len(), 1);

        let missing = Deck::load(&dir.join("nope.json")).unwrap_err();
        assert!(matches!(missing, DeckError::Io(_)));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_content_kind_matches_tag() {
        assert_eq!(bullet_slide(1, &["a"]).content.kind(), "bullet_list");
        assert_eq!(table_slide(1, &["A"], &[&["1"]]).content.kind(), "table");
        assert_eq!(Content::Unsupported.kind(), "unsupported");
    }
}
