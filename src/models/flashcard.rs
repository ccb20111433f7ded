//! Flashcard is a pair <question, answer>. Only text is used in questions and answers
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Case-insensitive, exact comparison of a typed answer against this card.
    /// Surrounding whitespace is significant.
    pub fn is_answered_by(&self, input: &str) -> bool {
        input.chars().count() == self.answer.chars().count()
            && input
                .chars()
                .zip(self.answer.chars())
                .all(|(a, b)| chars_match_ignoring_case(a, b))
    }
}

/// Two characters match when they are equal, their uppercase forms are equal,
/// or the lowercase forms of their uppercase forms are equal.
fn chars_match_ignoring_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_upper(a), simple_upper(b));
    upper_a == upper_b || simple_lower(upper_a) == simple_lower(upper_b)
}

/// Single-character uppercase mapping; characters that expand (`ß` → `SS`) map to themselves.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Single-character lowercase mapping. `İ` is the only character whose lowercase expands.
fn simple_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ if c == 'İ' => 'i',
        _ => c,
    }
}
