//! JSON deck files.
//! Loads a Deck from a JSON file as the quiz source and writes the current deck back out as a template.

use crate::error::DeckError;
use crate::models::Deck;
use std::fs;
use std::path::Path;

/// Exports a deck to a JSON file at the specified path.
pub fn save_deck_to_path(deck: &Deck, path: impl AsRef<Path>) -> Result<(), DeckError> {
    let path = path.as_ref();
    let json_string = serde_json::to_string_pretty(deck)?;
    fs::write(path, json_string)?;
    log::info!("Deck '{}' exported to '{}'", deck.name, path.display());
    Ok(())
}

/// Reads a deck from a JSON file.
/// The deck must have at least one card and no card may have a blank answer.
pub fn load_deck_from_path(path: impl AsRef<Path>) -> Result<Deck, DeckError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let deck = parse_deck(&contents)?;
    log::info!(
        "Deck '{}' ({} cards) loaded from '{}'",
        deck.name,
        deck.len(),
        path.display()
    );
    Ok(deck)
}

pub fn parse_deck(contents: &str) -> Result<Deck, DeckError> {
    let deck: Deck = serde_json::from_str(contents)?;

    if deck.is_empty() {
        return Err(DeckError::Empty { name: deck.name });
    }
    if let Some(index) = deck
        .flashcards
        .iter()
        .position(|card| card.answer.trim().is_empty())
    {
        return Err(DeckError::BlankAnswer { index });
    }

    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Flashcard, load_deck};
    use pretty_assertions::assert_eq;

    fn create_test_deck() -> Deck {
        Deck::new(
            "Test Deck",
            vec![
                Flashcard::new("What is 2 + 2?", "4"),
                Flashcard::new("Which planet is known as the Red Planet?", "Mars"),
            ],
        )
    }

    #[test]
    fn test_load_deck_from_path() {
        let json_content = r#"{
  "name": "Import Test Deck",
  "flashcards": [
    {
      "question": "test question",
      "answer": "test answer"
    }
  ]
}"#;
        let dir = tempfile::tempdir().unwrap();
        let test_file = dir.path().join("deck.json");
        fs::write(&test_file, json_content).unwrap();

        let deck = load_deck_from_path(&test_file).unwrap();
        assert_eq!(deck.name, "Import Test Deck");
        assert_eq!(
            deck.flashcards,
            vec![Flashcard::new("test question", "test answer")]
        );
    }

    #[test]
    fn test_save_then_load_keeps_order() {
        let deck = load_deck();
        let dir = tempfile::tempdir().unwrap();
        let test_file = dir.path().join("general.json");

        save_deck_to_path(&deck, &test_file).unwrap();
        assert!(fs::metadata(&test_file).is_ok(), "File should exist");

        let imported = load_deck_from_path(&test_file).unwrap();
        assert_eq!(imported, deck);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_deck_from_path(dir.path().join("nonexistent_file_xyz123.json"));
        assert!(matches!(result, Err(DeckError::Io(_))));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_deck("{ this is not valid json }");
        assert!(matches!(result, Err(DeckError::Json(_))));
    }

    #[test]
    fn test_parse_empty_deck() {
        let result = parse_deck(r#"{ "name": "Empty", "flashcards": [] }"#);
        assert!(matches!(result, Err(DeckError::Empty { name }) if name == "Empty"));
    }

    #[test]
    fn test_parse_blank_answer() {
        let result = parse_deck(
            r#"{ "name": "Broken", "flashcards": [
                { "question": "ok", "answer": "yes" },
                { "question": "blank", "answer": "  " }
            ] }"#,
        );
        assert!(matches!(result, Err(DeckError::BlankAnswer { index: 1 })));
    }

    #[test]
    fn test_save_writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let test_file = dir.path().join("test.json");

        save_deck_to_path(&create_test_deck(), &test_file).unwrap();

        let written = fs::read_to_string(&test_file).unwrap();
        assert!(written.contains("\"question\": \"What is 2 + 2?\""));
        assert!(written.contains("\"answer\": \"Mars\""));
    }
}
