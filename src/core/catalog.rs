//! Built-in deck, compiled into the binary so the viewer works with no files.

use crate::core::deck::{Deck, DeckError};

const INVESTOR_DECK: &str = include_str!("../../assets/decks/investor.json");

/// The bundled investor deck.
pub fn builtin() -> Result<Deck, DeckError> {
    Deck::from_json_str(INVESTOR_DECK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deck::Content;

    #[test]
    fn test_builtin_deck_loads() {
        let deck = builtin().unwrap();
        assert_eq!(deck.len(), 11);
        assert!(deck.title().is_some());
        let ids: Vec<u32> = deck.slides().iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=11).collect::<Vec<u32>>());
    }

    #[test]
    fn test_builtin_deck_covers_every_layout() {
        let deck = builtin().unwrap();
        let mut kinds: Vec<&str> = deck.slides().iter().map(|s| s.content.kind()).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(
            kinds,
            vec![
                "bridge_details",
                "bullet_list",
                "metrics_grid",
                "multi_section",
                "structured_list",
                "table",
                "team_grid",
            ]
        );
        assert!(
            deck.slides()
                .iter()
                .all(|s| !matches!(s.content, Content::Unsupported))
        );
    }
}
