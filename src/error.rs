//! Error types for the quiz engine and deck sources.

use thiserror::Error;

/// Misuse of the quiz engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("cannot submit an answer: the quiz is already complete")]
    AlreadyComplete,

    #[error("deck '{name}' has no flashcards")]
    EmptyDeck { name: String },
}

/// Errors that can occur while reading or writing deck files.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid deck JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("deck '{name}' has no flashcards")]
    Empty { name: String },

    #[error("flashcard {index} has a blank answer")]
    BlankAnswer { index: usize },
}
