//! Answer resolution: rewards, damage, leveling and termination

use serde::{Deserialize, Serialize};

use crate::quest::state::{Phase, QuestProgress};
use crate::questions::normalize_answer;
use crate::simulation::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerVerdict {
    Correct,
    Wrong,
}

/// What a single submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub verdict: AnswerVerdict,
    pub levels_gained: u32,
    pub enemy_defeated: bool,
    pub player_fell: bool,
}

/// Resolve the active challenge against `submitted`
///
/// Returns `None` (and changes nothing) when no challenge is active. The
/// challenge is consumed before evaluation, so exactly one branch applies
/// per challenge.
pub fn resolve_answer(world: &mut World, submitted: &str) -> Option<AnswerOutcome> {
    if world.phase != Phase::Challenge {
        tracing::debug!("Answer ignored (phase {:?})", world.phase);
        return None;
    }
    let challenge = world.challenge.take()?;
    world.phase = Phase::Exploring;

    let outcome = if challenge.question.accepts(submitted) {
        apply_correct(world)
    } else {
        apply_wrong(world, &challenge.question.answer)
    };
    Some(outcome)
}

fn apply_correct(world: &mut World) -> AnswerOutcome {
    let combat = &world.config.combat;
    let (damage, coins, xp) = (combat.enemy_damage, combat.coin_reward, combat.xp_reward);
    let hp_per_level = world.config.progression.hp_per_level;

    let enemy_defeated = world.enemy.take_damage(damage);
    world
        .log
        .reward(format!("Correct! You blast the Wraith for {} damage.", damage));

    let player = &mut world.player;
    player.coins = player.coins.saturating_add(coins);
    let old_level = player.level;
    let levels_gained = player.gain_xp(xp, &world.progression, hp_per_level);
    for level in (old_level + 1)..=player.level {
        world
            .log
            .reward(format!("LEVEL UP! You are now level {}.", level));
        tracing::info!("Player reached level {}", level);
    }

    if enemy_defeated {
        world.quest = QuestProgress::Complete;
        world.log.reward("The Wraith dissolves into loose vowels!");
        world.log.reward("Quest Complete! The Forest is safe.");
        tracing::info!("Enemy defeated; quest complete");
    }

    AnswerOutcome {
        verdict: AnswerVerdict::Correct,
        levels_gained,
        enemy_defeated,
        player_fell: false,
    }
}

fn apply_wrong(world: &mut World, canonical: &str) -> AnswerOutcome {
    let damage = world.config.combat.player_damage;

    let player_fell = world.player.take_damage(damage);
    world.pulse_disturbance();
    world.log.damage(format!(
        "Wrong! Answer was '{}'.",
        normalize_answer(canonical)
    ));
    world
        .log
        .damage(format!("The Wraith hits you for {} damage.", damage));

    if player_fell {
        world.phase = Phase::Ended;
        world.log.damage("You have fallen. Refresh to try again.");
        tracing::warn!("Player fell; session ended");
    }

    AnswerOutcome {
        verdict: AnswerVerdict::Wrong,
        levels_gained: 0,
        enemy_defeated: false,
        player_fell,
    }
}
