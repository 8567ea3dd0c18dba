//! Serializable read-only views of a session for renderers and reports

use serde::{Deserialize, Serialize};

use crate::entity::{Bounds, Facing};
use crate::quest::state::{Phase, QuestProgress};
use crate::simulation::interaction::available_prompts;
use crate::simulation::world::World;
use crate::ui::state::LogEntry;

pub use crate::simulation::interaction::InteractionPrompts;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub bounds: Bounds,
    pub hp: i32,
    pub max_hp: i32,
    pub level: u32,
    pub xp: u32,
    pub coins: u32,
    pub facing: Facing,
    pub moving: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySnapshot {
    pub bounds: Bounds,
    /// Floored at zero
    pub hp: i32,
    pub max_hp: i32,
    pub hover_offset: f32,
    pub spawned: bool,
    pub alive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub quest_stage: u8,
    pub objective: String,
    pub camera_disturbance: f32,
    pub elapsed: f64,
    pub player: PlayerSnapshot,
    pub companion: Bounds,
    pub enemy: EnemySnapshot,
    pub challenge_prompt: Option<String>,
    pub prompts: InteractionPrompts,
    /// Most recent first
    pub log: Vec<LogEntry>,
}

impl SessionSnapshot {
    pub fn capture(world: &World) -> Self {
        let player = &world.player;
        let enemy = &world.enemy;
        let quest: QuestProgress = world.quest;

        Self {
            phase: world.phase,
            quest_stage: quest.stage(),
            objective: quest.objective().to_string(),
            camera_disturbance: world.camera_disturbance,
            elapsed: world.elapsed(),
            player: PlayerSnapshot {
                bounds: player.bounds,
                hp: player.hp.max(0),
                max_hp: player.max_hp,
                level: player.level,
                xp: player.xp,
                coins: player.coins,
                facing: player.facing,
                moving: player.moving,
            },
            companion: world.companion.bounds,
            enemy: EnemySnapshot {
                bounds: enemy.bounds,
                hp: enemy.display_hp(),
                max_hp: enemy.max_hp,
                hover_offset: enemy.hover_offset,
                spawned: enemy.spawned,
                alive: enemy.alive,
            },
            challenge_prompt: world.challenge.as_ref().map(|c| c.prompt().to_string()),
            prompts: available_prompts(world),
            log: world.log.recent().cloned().collect(),
        }
    }

    /// One-line HUD summary
    pub fn status_line(&self) -> String {
        format!(
            "HP {}/{} | Level {} | XP {} | Coins {} | {}",
            self.player.hp,
            self.player.max_hp,
            self.player.level,
            self.player.xp,
            self.player.coins,
            self.objective
        )
    }
}
