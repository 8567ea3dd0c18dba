//! Enemy behavior: idle hover plus keep-away pursuit
//!
//! The enemy closes on the player only inside the engagement band. Too far
//! away it loses interest; inside melee range it holds, leaving the last
//! step to the player.

use crate::core::config::EnemyConfig;
use crate::entity::{Bounds, Enemy};

/// Hover displacement for the given simulated time
pub fn hover_offset(elapsed: f64, config: &EnemyConfig) -> f32 {
    (elapsed * f64::from(config.hover_frequency)).sin() as f32 * config.hover_amplitude
}

/// True when `distance` lies strictly inside the engagement band
pub fn in_engagement_band(distance: f32, config: &EnemyConfig) -> bool {
    distance < config.pursuit_outer_radius && distance > config.pursuit_inner_radius
}

/// Step toward the target's center if it is inside the engagement band.
/// Returns whether the enemy moved.
pub fn pursue(enemy: &mut Enemy, target: &Bounds, config: &EnemyConfig, dt: f32) -> bool {
    let distance = enemy.bounds.distance_to(target);
    if !in_engagement_band(distance, config) {
        return false;
    }

    let from = enemy.bounds.center();
    let to = target.center();
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let step = enemy.speed * dt;
    enemy.bounds.position.x += angle.cos() * step;
    enemy.bounds.position.y += angle.sin() * step;
    true
}

/// One AI step: refresh the hover phase, then pursue
pub fn run_enemy_ai(enemy: &mut Enemy, player: &Bounds, config: &EnemyConfig, elapsed: f64, dt: f32) {
    enemy.hover_offset = hover_offset(elapsed, config);
    pursue(enemy, player, config, dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec2;

    fn enemy_at(x: f32, y: f32) -> Enemy {
        let mut e = Enemy::from_config(&EnemyConfig::default());
        e.spawn(Vec2::new(x, y));
        e
    }

    fn target_at(x: f32, y: f32) -> Bounds {
        Bounds::new(Vec2::new(x, y), Vec2::new(32.0, 32.0))
    }

    #[test]
    fn test_pursues_inside_band() {
        let config = EnemyConfig::default();
        let mut e = enemy_at(400.0, 100.0);
        let target = target_at(400.0, 300.0);
        let before = e.bounds.distance_to(&target);
        assert!(pursue(&mut e, &target, &config, 0.1));
        let after = e.bounds.distance_to(&target);
        assert!((before - after - 4.0).abs() < 1e-3, "closed {}", before - after);
    }

    #[test]
    fn test_holds_when_too_far() {
        let config = EnemyConfig::default();
        let mut e = enemy_at(0.0, 0.0);
        let target = target_at(700.0, 450.0);
        assert!(!pursue(&mut e, &target, &config, 0.1));
        assert_eq!(e.bounds.position, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_holds_inside_melee_range() {
        let config = EnemyConfig::default();
        let mut e = enemy_at(400.0, 100.0);
        let target = target_at(410.0, 120.0);
        assert!(e.bounds.distance_to(&target) < config.pursuit_inner_radius);
        assert!(!pursue(&mut e, &target, &config, 0.1));
    }

    #[test]
    fn test_band_edges_are_exclusive() {
        let config = EnemyConfig::default();
        assert!(!in_engagement_band(50.0, &config));
        assert!(!in_engagement_band(300.0, &config));
        assert!(in_engagement_band(50.1, &config));
        assert!(in_engagement_band(299.9, &config));
    }

    #[test]
    fn test_hover_stays_within_amplitude() {
        let config = EnemyConfig::default();
        for i in 0..100 {
            let offset = hover_offset(f64::from(i) * 0.37, &config);
            assert!(offset.abs() <= config.hover_amplitude + 1e-4);
        }
        assert_eq!(hover_offset(0.0, &config), 0.0);
    }
}
