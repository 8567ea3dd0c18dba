//! Positioned actors in the arena
//!
//! Every actor is an axis-aligned box. Proximity between actors is always
//! measured between box centers.

pub mod bounds;
pub mod enemy;
pub mod player;
pub mod progression;

pub use bounds::Bounds;
pub use enemy::Enemy;
pub use player::{Facing, Player};
pub use progression::ProgressionTable;

use serde::{Deserialize, Serialize};

use crate::core::config::CompanionConfig;

/// Stationary non-combat NPC who offers the quest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Companion {
    pub bounds: Bounds,
}

impl Companion {
    pub fn from_config(config: &CompanionConfig) -> Self {
        Self {
            bounds: Bounds::new(config.position, config.size),
        }
    }
}
