//! Quest and combat state machine
//!
//! Exploring -> (talk) -> Exploring, advancing the quest on first contact.
//! Exploring -> (engage) -> Challenge.
//! Challenge -> (answer) -> Exploring, or Ended if the player falls.
//! Ended is terminal.

pub mod resolution;
pub mod session;
pub mod state;
pub mod transitions;

pub use resolution::{resolve_answer, AnswerOutcome, AnswerVerdict};
pub use session::Session;
pub use state::{Challenge, Phase, QuestProgress};
pub use transitions::{start_challenge, talk_to_companion};
