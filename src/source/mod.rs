//! Deck sources: the built-in deck and JSON deck files.
pub mod json;

use crate::config::QuizConfig;
use crate::models::Deck;

pub use crate::models::deck::load_deck;
pub use json::{load_deck_from_path, parse_deck, save_deck_to_path};

/// Deck named by the config, or the built-in deck when none is set or it cannot be read.
pub fn load_configured_deck(config: &QuizConfig) -> Deck {
    let Some(path) = &config.deck_path else {
        return load_deck();
    };
    match load_deck_from_path(path) {
        Ok(deck) => deck,
        Err(e) => {
            log::warn!(
                "Could not load deck '{}': {}. Using the built-in deck.",
                path.display(),
                e
            );
            load_deck()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Flashcard;

    #[test]
    fn test_no_deck_path_uses_builtin() {
        let deck = load_configured_deck(&QuizConfig::default());
        assert_eq!(deck, load_deck());
    }

    #[test]
    fn test_missing_deck_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = QuizConfig {
            deck_path: Some(dir.path().join("missing.json")),
            ..QuizConfig::default()
        };
        assert_eq!(load_configured_deck(&config), load_deck());
    }

    #[test]
    fn test_configured_deck_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capitals.json");
        let deck = Deck::new("Capitals", vec![Flashcard::new("Capital of Italy?", "Rome")]);
        save_deck_to_path(&deck, &path).unwrap();

        let config = QuizConfig {
            deck_path: Some(path),
            ..QuizConfig::default()
        };
        assert_eq!(load_configured_deck(&config), deck);
    }
}
