//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::deck::{Content, Deck, Slide};
use crate::core::gate::AccessGate;
use crate::core::state::App;

pub fn bullet_slide(id: u32, items: &[&str]) -> Slide {
    Slide {
        id,
        title: format!("Slide {id}"),
        subtitle: None,
        content: Content::BulletList {
            items: items.iter().map(|s| s.to_string()).collect(),
            summary: None,
        },
    }
}

pub fn table_slide(id: u32, headers: &[&str], rows: &[&[&str]]) -> Slide {
    Slide {
        id,
        title: format!("Table {id}"),
        subtitle: None,
        content: Content::Table {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
            notes: None,
            initiatives: Vec::new(),
        },
    }
}

pub fn unsupported_slide(id: u32) -> Slide {
    Slide {
        id,
        title: "From the future".to_string(),
        subtitle: None,
        content: Content::Unsupported,
    }
}

/// A deck of `len` one-bullet slides with ids 1..=len.
pub fn sample_deck(len: usize) -> Deck {
    let slides = (1..=len as u32)
        .map(|id| bullet_slide(id, &["point"]))
        .collect();
    Deck::new(Some("Sample".to_string()), slides).unwrap()
}

/// Creates an unlocked test App over a sample deck.
pub fn test_app(len: usize) -> App {
    App::new(Arc::new(sample_deck(len)), AccessGate::Open)
}

/// Creates a test App that still needs the given passphrase.
pub fn locked_app(len: usize, passphrase: &str) -> App {
    App::new(
        Arc::new(sample_deck(len)),
        AccessGate::Passphrase(passphrase.to_string()),
    )
}
