//! Quiz progression for a single pass through a deck.
//! Grades typed answers, counts attempts, advances the cursor and handles restart.

use super::{Deck, Flashcard};
use crate::error::QuizError;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Cursor and attempt counter. `current_index == deck.len()` means the quiz is complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizState {
    pub current_index: usize,
    pub attempts_left: u32,
}

/// Coarse view of [`QuizState`] for presenters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Active {
        current_index: usize,
        attempts_left: u32,
    },
    Complete,
}

/// Result of one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    IncorrectRetry { attempts_left: u32 },
    IncorrectFinal { correct_answer: String },
    /// Blank input; nothing changed.
    Ignored,
}

impl Outcome {
    /// True when the submission moved the cursor (or completed the quiz).
    pub fn advanced(&self) -> bool {
        matches!(self, Outcome::Correct | Outcome::IncorrectFinal { .. })
    }
}

/// Owns the deck and the quiz state. State only changes through
/// [`QuizEngine::submit_answer`] and [`QuizEngine::restart`].
#[derive(Clone, Debug)]
pub struct QuizEngine {
    deck: Deck,
    max_attempts: u32,
    state: QuizState,
}

impl QuizEngine {
    pub fn new(deck: Deck) -> Result<Self, QuizError> {
        Self::with_max_attempts(deck, DEFAULT_MAX_ATTEMPTS)
    }

    /// `max_attempts` below 1 is raised to 1.
    pub fn with_max_attempts(deck: Deck, max_attempts: u32) -> Result<Self, QuizError> {
        if deck.is_empty() {
            return Err(QuizError::EmptyDeck { name: deck.name });
        }
        let max_attempts = max_attempts.max(1);
        Ok(Self {
            deck,
            max_attempts,
            state: QuizState {
                current_index: 0,
                attempts_left: max_attempts,
            },
        })
    }

    pub fn submit_answer(&mut self, input: &str) -> Result<Outcome, QuizError> {
        let Some(card) = self.current_question() else {
            return Err(QuizError::AlreadyComplete);
        };

        if input.trim().is_empty() {
            return Ok(Outcome::Ignored);
        }

        let outcome = if card.is_answered_by(input) {
            Outcome::Correct
        } else if self.state.attempts_left > 1 {
            Outcome::IncorrectRetry {
                attempts_left: self.state.attempts_left - 1,
            }
        } else {
            Outcome::IncorrectFinal {
                correct_answer: card.answer.clone(),
            }
        };

        match &outcome {
            Outcome::IncorrectRetry { attempts_left } => {
                self.state.attempts_left = *attempts_left;
                log::debug!(
                    "question {}: wrong answer, {} attempts left",
                    self.state.current_index,
                    attempts_left
                );
            }
            _ => self.advance(),
        }

        Ok(outcome)
    }

    pub fn restart(&mut self) {
        self.state = QuizState {
            current_index: 0,
            attempts_left: self.max_attempts,
        };
        log::debug!("quiz restarted on deck '{}'", self.deck.name);
    }

    pub fn current_question(&self) -> Option<&Flashcard> {
        self.deck.get(self.state.current_index)
    }

    pub fn is_complete(&self) -> bool {
        self.state.current_index >= self.deck.len()
    }

    pub fn phase(&self) -> QuizPhase {
        if self.is_complete() {
            QuizPhase::Complete
        } else {
            QuizPhase::Active {
                current_index: self.state.current_index,
                attempts_left: self.state.attempts_left,
            }
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn attempts_left(&self) -> u32 {
        self.state.attempts_left
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn progress_message(&self) -> String {
        if self.is_complete() {
            format!("{} / {} questions", self.deck.len(), self.deck.len())
        } else {
            format!(
                "Question {} of {}",
                self.state.current_index + 1,
                self.deck.len()
            )
        }
    }

    fn advance(&mut self) {
        self.state.attempts_left = self.max_attempts;
        if self.state.current_index + 1 < self.deck.len() {
            self.state.current_index += 1;
            log::debug!("advanced to question {}", self.state.current_index);
        } else {
            self.state.current_index = self.deck.len();
            log::debug!("deck '{}' complete", self.deck.name);
        }
    }
}
