//! Proximity gates for player-initiated actions
//!
//! Pure predicates over the world. The input layer decides when to ask;
//! the quest module performs the transition when a gate holds.

use serde::{Deserialize, Serialize};

use crate::quest::state::Phase;
use crate::simulation::world::World;

/// Dialogue is possible while exploring within talk range of the companion
pub fn can_talk(world: &World) -> bool {
    world.phase == Phase::Exploring
        && world.player.bounds.distance_to(&world.companion.bounds)
            < world.config.interaction.talk_radius
}

/// A challenge is possible while exploring within engage range of a living enemy
pub fn can_engage(world: &World) -> bool {
    world.phase == Phase::Exploring
        && world.enemy.alive
        && world.player.bounds.distance_to(&world.enemy.bounds)
            < world.config.interaction.engage_radius
}

/// Which interaction hints a renderer should show right now
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionPrompts {
    pub talk: bool,
    pub engage: bool,
}

pub fn available_prompts(world: &World) -> InteractionPrompts {
    InteractionPrompts {
        talk: can_talk(world),
        engage: can_engage(world),
    }
}
