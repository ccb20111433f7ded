//! Deck is an ordered set of flashcards. Insertion order is presentation order.
use super::Flashcard;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub flashcards: Vec<Flashcard>,
}

impl Deck {
    pub fn new(name: impl Into<String>, flashcards: Vec<Flashcard>) -> Self {
        Self {
            name: name.into(),
            flashcards,
        }
    }

    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.flashcards.get(index)
    }
}

impl Default for Deck {
    fn default() -> Self {
        load_deck()
    }
}

/// Built-in deck source: the fixed general-knowledge quiz.
pub fn load_deck() -> Deck {
    let cards = [
        ("What is the capital of France?", "Paris"),
        ("What is 2 + 2?", "4"),
        ("Who wrote 'Romeo and Juliet'?", "Shakespeare"),
        ("What is the largest planet in our solar system?", "Jupiter"),
        ("Who painted the Mona Lisa?", "Leonardo da Vinci"),
        ("What is the square root of 64?", "8"),
        ("What is the chemical symbol for water?", "H2O"),
        ("Who was the first President of the United States?", "George Washington"),
        ("What is the hardest natural substance on Earth?", "Diamond"),
        ("What year did World War I begin?", "1914"),
        ("What is the main ingredient in guacamole?", "Avocado"),
        ("What is the capital city of Japan?", "Tokyo"),
        ("How many continents are there?", "7"),
        ("Which planet is known as the Red Planet?", "Mars"),
        ("In which year did the Titanic sink?", "1912"),
    ];

    Deck::new(
        "General Knowledge",
        cards
            .into_iter()
            .map(|(question, answer)| Flashcard::new(question, answer))
            .collect(),
    )
}
