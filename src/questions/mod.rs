//! Trivia questions: the source trait the session draws from, the built-in
//! bank, and answer normalization.

pub mod bank;

pub use bank::{load_question_bank, QuestionBank};

use serde::{Deserialize, Serialize};

/// A prompt and its canonical accepted answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    /// Case- and surrounding-whitespace-insensitive comparison
    pub fn accepts(&self, submitted: &str) -> bool {
        answers_match(submitted, &self.answer)
    }
}

/// Supplies questions to the session
pub trait QuestionSource {
    fn draw_question(&mut self) -> Question;
}

/// Trim surrounding whitespace and case-fold
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

pub fn answers_match(submitted: &str, canonical: &str) -> bool {
    normalize_answer(submitted) == normalize_answer(canonical)
}
