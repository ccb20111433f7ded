pub mod config;
pub mod error;
pub mod feedback;
pub mod models;
pub mod source;

pub use config::Config;
pub use error::{DeckError, QuizError};
pub use feedback::{Feedback, FeedbackAction, Snackbar};
pub use models::{Deck, Flashcard, Outcome, QuizEngine, QuizPhase, QuizState};
