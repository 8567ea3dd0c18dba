//! The play session: the only way callers touch world state
//!
//! `Session` owns the `World` and the question source. The input layer
//! drives it through `set_intent`, `try_talk`, `try_engage`,
//! `set_answer_draft` and `submit_answer`; the host calls `tick` once per
//! display refresh; the renderer reads through the accessors or `snapshot`.
//! Once the player falls every mutating call is a no-op.

use crate::core::config::GameConfig;
use crate::entity::{Companion, Enemy, Player};
use crate::quest::resolution::{resolve_answer, AnswerOutcome};
use crate::quest::state::{Challenge, Phase, QuestProgress};
use crate::quest::transitions::{start_challenge, talk_to_companion};
use crate::questions::{QuestionBank, QuestionSource};
use crate::simulation::interaction::{available_prompts, InteractionPrompts};
use crate::simulation::movement::MovementIntent;
use crate::simulation::tick::run_simulation_tick;
use crate::simulation::world::World;
use crate::ui::snapshot::SessionSnapshot;
use crate::ui::state::NarrativeLog;

pub struct Session {
    world: World,
    questions: Box<dyn QuestionSource>,
}

impl Session {
    /// New session using the built-in question set, seeded from the config
    pub fn new(config: GameConfig) -> Self {
        let questions = QuestionBank::basics(config.session.seed);
        Self::with_questions(config, questions)
    }

    pub fn with_questions(config: GameConfig, questions: impl QuestionSource + 'static) -> Self {
        Self {
            world: World::new(config),
            questions: Box::new(questions),
        }
    }

    /// Advance the simulation to host time `now_seconds`
    pub fn tick(&mut self, now_seconds: f64) {
        run_simulation_tick(&mut self.world, now_seconds);
    }

    /// Replace the set of held movement keys
    pub fn set_intent(&mut self, intent: MovementIntent) {
        if self.world.is_ended() {
            return;
        }
        self.world.intent = intent;
    }

    /// Talk to the companion if in range. Returns whether dialogue happened.
    pub fn try_talk(&mut self) -> bool {
        talk_to_companion(&mut self.world)
    }

    /// Engage the enemy if in range. Returns whether a challenge started.
    pub fn try_engage(&mut self) -> bool {
        start_challenge(&mut self.world, &mut *self.questions)
    }

    /// Update the pending answer text while a challenge is open
    pub fn set_answer_draft(&mut self, text: &str) {
        if self.world.phase != Phase::Challenge {
            return;
        }
        self.world.answer_draft.clear();
        self.world.answer_draft.push_str(text);
    }

    /// Resolve the active challenge with `text`
    pub fn submit_answer(&mut self, text: &str) -> Option<AnswerOutcome> {
        resolve_answer(&mut self.world, text)
    }

    /// Resolve the active challenge with the pending draft
    pub fn submit_draft(&mut self) -> Option<AnswerOutcome> {
        let draft = std::mem::take(&mut self.world.answer_draft);
        self.submit_answer(&draft)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.world.config
    }

    pub fn player(&self) -> &Player {
        &self.world.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.world.enemy
    }

    pub fn companion(&self) -> &Companion {
        &self.world.companion
    }

    pub fn phase(&self) -> Phase {
        self.world.phase
    }

    pub fn quest_progress(&self) -> QuestProgress {
        self.world.quest
    }

    pub fn camera_disturbance(&self) -> f32 {
        self.world.camera_disturbance
    }

    pub fn challenge(&self) -> Option<&Challenge> {
        self.world.challenge.as_ref()
    }

    pub fn answer_draft(&self) -> &str {
        &self.world.answer_draft
    }

    pub fn log(&self) -> &NarrativeLog {
        &self.world.log
    }

    pub fn elapsed(&self) -> f64 {
        self.world.elapsed()
    }

    pub fn prompts(&self) -> InteractionPrompts {
        available_prompts(&self.world)
    }

    pub fn is_over(&self) -> bool {
        self.world.is_ended()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.world)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
