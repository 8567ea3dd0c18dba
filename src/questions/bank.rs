//! Built-in and file-backed question banks

use std::fs;
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::core::error::{GameError, Result};
use crate::questions::{Question, QuestionSource};

/// Non-empty pool of questions drawn uniformly at random
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    rng: ChaCha8Rng,
}

#[derive(Deserialize)]
struct QuestionFile {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>, seed: u64) -> Result<Self> {
        if questions.is_empty() {
            return Err(GameError::EmptyQuestionBank);
        }
        Ok(Self {
            questions,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// The Forest of Basics spelling and grammar set
    pub fn basics(seed: u64) -> Self {
        let questions = vec![
            Question::new("Spell check: (a) recieve (b) receive", "receive"),
            Question::new("Spell check: (a) definitely (b) definately", "definitely"),
            Question::new("I ___ happy today. (am/is/are)", "am"),
            Question::new("He ___ to the store yesterday. (go/went)", "went"),
            Question::new("Opposite of 'Fast'?", "slow"),
            Question::new("Plural of 'child'?", "children"),
            Question::new("Which is a noun? (Blue / Run / Cat)", "cat"),
            Question::new("Past tense of 'Run'?", "ran"),
            Question::new("Sun is a ___ (Planet/Star)", "star"),
            Question::new("We ___ watching TV. (was/were)", "were"),
        ];
        Self {
            questions,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Parse `[[questions]]` tables with `prompt` and `answer` keys
    pub fn from_toml_str(contents: &str, seed: u64) -> Result<Self> {
        let file: QuestionFile = toml::from_str(contents)?;
        Self::new(file.questions, seed)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl QuestionSource for QuestionBank {
    fn draw_question(&mut self) -> Question {
        let index = self.rng.gen_range(0..self.questions.len());
        self.questions[index].clone()
    }
}

/// Load a question bank from a TOML file
pub fn load_question_bank(path: &Path, seed: u64) -> Result<QuestionBank> {
    let contents = fs::read_to_string(path)?;
    let bank = QuestionBank::from_toml_str(&contents, seed)?;
    tracing::debug!("Loaded {} questions from {:?}", bank.len(), path);
    Ok(bank)
}
