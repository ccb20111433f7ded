pub mod deck;
pub mod flashcard;
pub mod quiz_engine;

pub use deck::{Deck, load_deck};
pub use flashcard::Flashcard;
pub use quiz_engine::{DEFAULT_MAX_ATTEMPTS, Outcome, QuizEngine, QuizPhase, QuizState};
