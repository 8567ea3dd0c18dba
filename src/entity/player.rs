//! The player character

use serde::{Deserialize, Serialize};

use crate::core::config::PlayerConfig;
use crate::entity::bounds::Bounds;
use crate::entity::progression::ProgressionTable;

/// Direction the player sprite faces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Down,
    Up,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub bounds: Bounds,
    /// Arena units per second
    pub speed: f32,
    pub hp: i32,
    pub max_hp: i32,
    /// Starts at 1
    pub level: u32,
    pub xp: u32,
    pub coins: u32,
    pub facing: Facing,
    /// True while any directional input was applied this tick
    pub moving: bool,
}

impl Player {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            bounds: Bounds::new(config.start, config.size),
            speed: config.speed,
            hp: config.max_hp,
            max_hp: config.max_hp,
            level: 1,
            xp: 0,
            coins: 0,
            facing: Facing::default(),
            moving: false,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Subtract hp, flooring at zero. Returns true if the player fell.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp -= amount;
        if self.hp <= 0 {
            self.hp = 0;
            return true;
        }
        false
    }

    /// Add experience and apply every level-up it unlocks
    ///
    /// Returns the number of levels gained.
    pub fn gain_xp(&mut self, amount: u32, table: &ProgressionTable, hp_per_level: i32) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        self.apply_level_ups(table, hp_per_level)
    }

    /// Advance levels while the table has a threshold for the current level
    /// and accumulated xp meets it. Each level raises max hp and fully heals.
    pub fn apply_level_ups(&mut self, table: &ProgressionTable, hp_per_level: i32) -> u32 {
        let mut gained = 0;
        while let Some(threshold) = table.threshold_for(self.level) {
            if self.xp < threshold {
                break;
            }
            self.level += 1;
            self.max_hp += hp_per_level;
            self.hp = self.max_hp;
            gained += 1;
        }
        gained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::from_config(&PlayerConfig::default())
    }

    #[test]
    fn test_new_player_stats() {
        let p = player();
        assert_eq!(p.level, 1);
        assert_eq!(p.hp, 100);
        assert_eq!(p.max_hp, 100);
        assert_eq!(p.xp, 0);
        assert_eq!(p.coins, 0);
        assert_eq!(p.facing, Facing::Down);
        assert!(!p.moving);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut p = player();
        p.hp = 10;
        assert!(p.take_damage(15));
        assert_eq!(p.hp, 0);
        assert!(p.is_dead());
    }

    #[test]
    fn test_take_damage_non_lethal() {
        let mut p = player();
        assert!(!p.take_damage(15));
        assert_eq!(p.hp, 85);
    }

    #[test]
    fn test_single_level_up_heals() {
        let mut p = player();
        p.hp = 40;
        let gained = p.gain_xp(50, &ProgressionTable::default(), 10);
        assert_eq!(gained, 1);
        assert_eq!(p.level, 2);
        assert_eq!(p.max_hp, 110);
        assert_eq!(p.hp, 110);
    }

    #[test]
    fn test_large_grant_cascades() {
        let mut p = player();
        let gained = p.gain_xp(400, &ProgressionTable::default(), 10);
        assert_eq!(gained, 4);
        assert_eq!(p.level, 5);
        assert_eq!(p.max_hp, 140);
        assert_eq!(p.hp, 140);
    }

    #[test]
    fn test_no_level_up_below_threshold() {
        let mut p = player();
        assert_eq!(p.gain_xp(49, &ProgressionTable::default(), 10), 0);
        assert_eq!(p.level, 1);
    }

    #[test]
    fn test_exhausted_table_caps_level() {
        let mut p = player();
        p.gain_xp(10_000, &ProgressionTable::default(), 10);
        assert_eq!(p.level, 5);
        assert_eq!(p.gain_xp(10_000, &ProgressionTable::default(), 10), 0);
        assert_eq!(p.level, 5);
    }
}
