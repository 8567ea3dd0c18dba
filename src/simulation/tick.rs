//! Per-frame simulation step

use crate::quest::state::Phase;
use crate::simulation::enemy_ai::run_enemy_ai;
use crate::simulation::movement::resolve_movement;
use crate::simulation::world::World;

/// Advance the world to host time `now_seconds`
///
/// Order: movement (exploring only), enemy AI (living enemy, exploring
/// only), disturbance decay. Does nothing at all once the session has ended.
pub fn run_simulation_tick(world: &mut World, now_seconds: f64) {
    if world.phase == Phase::Ended {
        return;
    }

    let dt = world.clock.advance(now_seconds);

    if world.phase == Phase::Exploring {
        resolve_movement(&mut world.player, world.intent, &world.config.arena, dt);
    }

    if world.enemy.alive && world.phase == Phase::Exploring {
        let elapsed = world.clock.elapsed();
        run_enemy_ai(
            &mut world.enemy,
            &world.player.bounds,
            &world.config.enemy,
            elapsed,
            dt,
        );
    }

    world.decay_disturbance(dt);
}
