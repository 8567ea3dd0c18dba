//! The roaming enemy

use serde::{Deserialize, Serialize};

use crate::core::config::EnemyConfig;
use crate::core::types::Vec2;
use crate::entity::bounds::Bounds;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub bounds: Bounds,
    /// May go negative on an overkill blow; see `display_hp`
    pub hp: i32,
    pub max_hp: i32,
    /// Arena units per second
    pub speed: f32,
    /// Vertical hover offset, animation only
    pub hover_offset: f32,
    /// Has ever appeared
    pub spawned: bool,
    /// Currently present and engageable
    pub alive: bool,
}

impl Enemy {
    pub fn from_config(config: &EnemyConfig) -> Self {
        Self {
            bounds: Bounds::new(config.start, config.size),
            hp: config.max_hp,
            max_hp: config.max_hp,
            speed: config.speed,
            hover_offset: 0.0,
            spawned: false,
            alive: false,
        }
    }

    /// Materialize at `position` with full health
    pub fn spawn(&mut self, position: Vec2) {
        self.bounds.position = position;
        self.spawned = true;
        self.alive = true;
        self.hp = self.max_hp;
    }

    /// Apply damage without flooring. Returns true exactly when this blow
    /// takes a living enemy to zero or below.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp -= amount;
        if self.alive && self.hp <= 0 {
            self.alive = false;
            return true;
        }
        false
    }

    pub fn display_hp(&self) -> i32 {
        self.hp.max(0)
    }
}
