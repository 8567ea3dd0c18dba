//! Player movement from held directional input
//!
//! Input collapses to a unit-or-zero vector, so diagonal movement is no
//! faster than axial movement. The result is clamped so the whole sprite
//! stays inside the arena margin.

use serde::{Deserialize, Serialize};

use crate::core::config::ArenaConfig;
use crate::core::types::Vec2;
use crate::entity::{Bounds, Facing, Player};

/// Which movement keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementIntent {
    pub const fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    pub const fn none() -> Self {
        Self::new(false, false, false, false)
    }

    /// Raw axis sum; opposing keys cancel
    fn axes(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.up {
            v.y -= 1.0;
        }
        if self.down {
            v.y += 1.0;
        }
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        v
    }

    /// Unit-length direction, or zero when nothing (or only opposing keys) is held
    pub fn direction(&self) -> Vec2 {
        self.axes().normalize()
    }

    /// Facing implied by the held keys, evaluated up, down, left, right with
    /// the last held key winning
    pub fn facing(&self) -> Option<Facing> {
        let mut facing = None;
        if self.up {
            facing = Some(Facing::Up);
        }
        if self.down {
            facing = Some(Facing::Down);
        }
        if self.left {
            facing = Some(Facing::Left);
        }
        if self.right {
            facing = Some(Facing::Right);
        }
        facing
    }
}

/// Clamp a box so it lies within `[margin, extent - margin - size]` on each axis
pub fn clamp_to_arena(bounds: &mut Bounds, arena: &ArenaConfig) {
    let max_x = arena.width - arena.margin - bounds.size.x;
    let max_y = arena.height - arena.margin - bounds.size.y;
    bounds.position.x = bounds.position.x.max(arena.margin).min(max_x);
    bounds.position.y = bounds.position.y.max(arena.margin).min(max_y);
}

/// Advance the player by one step of held input
pub fn resolve_movement(player: &mut Player, intent: MovementIntent, arena: &ArenaConfig, dt: f32) {
    if let Some(facing) = intent.facing() {
        player.facing = facing;
    }

    let direction = intent.direction();
    player.moving = !direction.is_zero();
    if !player.moving {
        return;
    }

    player.bounds.position += direction * (player.speed * dt);
    clamp_to_arena(&mut player.bounds, arena);
}
