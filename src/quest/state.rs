//! Phase, quest stage and the active challenge

use serde::{Deserialize, Serialize};

use crate::questions::Question;

/// Top-level session mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Exploring,
    /// A question is awaiting an answer
    Challenge,
    /// The player fell; terminal
    Ended,
}

/// Stage of the single fixed quest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum QuestProgress {
    #[default]
    NotOffered = 0,
    Active = 1,
    Complete = 2,
}

impl QuestProgress {
    /// Numeric stage: 0 not offered, 1 active, 2 complete
    pub fn stage(self) -> u8 {
        self as u8
    }

    /// Objective line for the HUD
    pub fn objective(self) -> &'static str {
        match self {
            QuestProgress::NotOffered => "Talk to Echo the Owl.",
            QuestProgress::Active => "Quest: Defeat the Spelling Wraith.",
            QuestProgress::Complete => "Quest Complete: Forest Saved.",
        }
    }
}

/// The question currently put to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub question: Question,
}

impl Challenge {
    pub fn new(question: Question) -> Self {
        Self { question }
    }

    pub fn prompt(&self) -> &str {
        &self.question.prompt
    }
}
