//! Game configuration with documented constants
//!
//! Every tunable number of the arena, the actors and the combat rules lives
//! here. `Default` reproduces the Forest of Basics layout; a TOML file can
//! override any subset of fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::core::types::Vec2;

/// Complete configuration for one play session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub player: PlayerConfig,
    pub companion: CompanionConfig,
    pub enemy: EnemyConfig,
    pub interaction: InteractionConfig,
    pub combat: CombatConfig,
    pub progression: ProgressionConfig,
    pub session: SessionConfig,
}

/// Playable area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    /// Inset from every edge that no part of the player may cross
    pub margin: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            margin: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Top-left corner at session start
    pub start: Vec2,
    pub size: Vec2,
    /// Arena units per second
    pub speed: f32,
    pub max_hp: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: Vec2::new(400.0, 450.0),
            size: Vec2::new(32.0, 32.0),
            speed: 200.0,
            max_hp: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    pub position: Vec2,
    pub size: Vec2,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            position: Vec2::new(350.0, 350.0),
            size: Vec2::new(30.0, 30.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Where the enemy sits before the quest is offered
    pub start: Vec2,
    /// Where the enemy materializes when the quest is accepted
    pub spawn: Vec2,
    pub size: Vec2,
    pub max_hp: i32,
    /// Arena units per second while pursuing
    pub speed: f32,
    /// Pursuit stops at or inside this distance (melee range)
    pub pursuit_inner_radius: f32,
    /// Pursuit stops at or beyond this distance
    pub pursuit_outer_radius: f32,
    /// Angular frequency of the idle hover, radians per simulated second
    pub hover_frequency: f32,
    /// Peak hover displacement in arena units
    pub hover_amplitude: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            start: Vec2::new(400.0, 200.0),
            spawn: Vec2::new(400.0, 100.0),
            size: Vec2::new(40.0, 50.0),
            max_hp: 60,
            speed: 40.0,
            pursuit_inner_radius: 50.0,
            pursuit_outer_radius: 300.0,
            hover_frequency: 2.0,
            hover_amplitude: 5.0,
        }
    }
}

/// Proximity gates for player-initiated actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub talk_radius: f32,
    pub engage_radius: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            talk_radius: 60.0,
            engage_radius: 80.0,
        }
    }
}

/// Answer resolution and frame pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Damage dealt to the enemy by a correct answer
    pub enemy_damage: i32,
    /// Damage dealt to the player by a wrong answer
    pub player_damage: i32,
    pub coin_reward: u32,
    pub xp_reward: u32,
    /// Camera disturbance magnitude set by a wrong answer
    pub disturbance_pulse: f32,
    /// Disturbance units removed per simulated second
    pub disturbance_decay_rate: f32,
    /// Upper bound on a single tick's delta, in seconds
    ///
    /// Protects against a suspended host producing one huge step.
    pub max_tick_delta: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            enemy_damage: 20,
            player_damage: 15,
            coin_reward: 10,
            xp_reward: 20,
            disturbance_pulse: 5.0,
            disturbance_decay_rate: 10.0,
            max_tick_delta: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// Entry L is the cumulative xp needed to advance from level L to L+1
    pub thresholds: Vec<u32>,
    /// Max hp gained per level-up
    pub hp_per_level: i32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            thresholds: vec![0, 50, 120, 220, 360],
            hp_per_level: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for question selection
    pub seed: u64,
    /// Narrative log keeps this many most-recent entries
    pub log_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            log_capacity: 10,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate().map_err(GameError::InvalidConfig)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        let arena = &self.arena;
        if arena.width <= 0.0 || arena.height <= 0.0 || arena.margin < 0.0 {
            return Err("Arena dimensions must be positive and margin non-negative".into());
        }

        let player = &self.player;
        if player.size.x <= 0.0 || player.size.y <= 0.0 {
            return Err("Player size must be positive".into());
        }
        // The clamp range [margin, extent - margin - size] must not be empty
        if arena.width - 2.0 * arena.margin < player.size.x
            || arena.height - 2.0 * arena.margin < player.size.y
        {
            return Err(format!(
                "Playable area ({} x {}) is smaller than the player ({} x {})",
                arena.width - 2.0 * arena.margin,
                arena.height - 2.0 * arena.margin,
                player.size.x,
                player.size.y
            ));
        }
        if player.speed < 0.0 || player.max_hp <= 0 {
            return Err("Player speed must be non-negative and max_hp positive".into());
        }

        let enemy = &self.enemy;
        if enemy.max_hp <= 0 || enemy.speed < 0.0 {
            return Err("Enemy max_hp must be positive and speed non-negative".into());
        }
        if enemy.pursuit_inner_radius >= enemy.pursuit_outer_radius {
            return Err(format!(
                "pursuit_inner_radius ({}) should be < pursuit_outer_radius ({})",
                enemy.pursuit_inner_radius, enemy.pursuit_outer_radius
            ));
        }

        if self.interaction.talk_radius <= 0.0 || self.interaction.engage_radius <= 0.0 {
            return Err("Interaction radii must be positive".into());
        }

        let combat = &self.combat;
        if combat.max_tick_delta <= 0.0 {
            return Err("max_tick_delta must be positive".into());
        }
        if combat.enemy_damage <= 0 || combat.player_damage <= 0 {
            return Err(format!(
                "Damage must be positive (enemy_damage = {}, player_damage = {})",
                combat.enemy_damage, combat.player_damage
            ));
        }
        if combat.disturbance_pulse < 0.0 || combat.disturbance_decay_rate < 0.0 {
            return Err("Disturbance pulse and decay rate must be non-negative".into());
        }

        if self
            .progression
            .thresholds
            .windows(2)
            .any(|pair| pair[0] > pair[1])
        {
            return Err("Progression thresholds must be non-decreasing".into());
        }
        if self.progression.hp_per_level < 0 {
            return Err("hp_per_level must be non-negative".into());
        }

        if self.session.log_capacity == 0 {
            return Err("log_capacity must be at least 1".into());
        }

        Ok(())
    }
}

/// Load and validate a config from a TOML file
pub fn load_config(path: &Path) -> Result<GameConfig> {
    let contents = fs::read_to_string(path)?;
    let config = GameConfig::from_toml_str(&contents)?;
    tracing::debug!("Loaded game config from {:?}", path);
    Ok(config)
}
