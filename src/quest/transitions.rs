//! Dialogue and combat triggers
//!
//! Both triggers are ignored outside `Phase::Exploring` or out of range, so
//! a stale call from the input layer is harmless.

use crate::quest::state::{Challenge, Phase, QuestProgress};
use crate::questions::QuestionSource;
use crate::simulation::interaction::{can_engage, can_talk};
use crate::simulation::world::World;

/// Talk to the companion. Returns whether the dialogue happened.
pub fn talk_to_companion(world: &mut World) -> bool {
    if !can_talk(world) {
        tracing::debug!("Talk ignored (phase {:?})", world.phase);
        return false;
    }

    match world.quest {
        QuestProgress::NotOffered => {
            world.log.normal("Echo: 'Hoo-hoo! The Silence Storm is here!'");
            world.log.reward("Echo: 'Defeat the Spelling Wraith to save us!'");
            world.quest = QuestProgress::Active;

            let spawn = world.config.enemy.spawn;
            world.enemy.spawn(spawn);
            world.log.damage("A Spelling Wraith has materialized!");
            tracing::info!("Quest accepted; enemy spawned at ({}, {})", spawn.x, spawn.y);
        }
        QuestProgress::Active => {
            world.log.normal("Echo: 'The Wraith is dangerous. Be careful!'");
        }
        QuestProgress::Complete => {
            world.log.reward("Echo: 'Great work, hero! The forest is safe.'");
        }
    }
    true
}

/// Engage the enemy: draw a question and enter the challenge phase.
/// Returns whether a challenge started.
pub fn start_challenge(world: &mut World, questions: &mut dyn QuestionSource) -> bool {
    if !can_engage(world) {
        tracing::debug!("Engage ignored (phase {:?}, enemy alive {})", world.phase, world.enemy.alive);
        return false;
    }

    let question = questions.draw_question();
    tracing::debug!("Challenge started: {}", question.prompt);
    world.challenge = Some(Challenge::new(question));
    world.phase = Phase::Challenge;
    world.answer_draft.clear();
    true
}
