//! The session's world state
//!
//! One mutable record owns every actor plus the phase, quest progress,
//! camera disturbance, clock, held intent, active challenge and narrative
//! log. Gameplay code mutates it through the simulation and quest modules;
//! outside callers only ever see it through `Session`.

use crate::core::config::GameConfig;
use crate::entity::{Companion, Enemy, Player, ProgressionTable};
use crate::quest::state::{Challenge, Phase, QuestProgress};
use crate::simulation::clock::SimulationClock;
use crate::simulation::movement::MovementIntent;
use crate::ui::state::NarrativeLog;

#[derive(Debug, Clone)]
pub struct World {
    pub config: GameConfig,
    pub progression: ProgressionTable,
    pub player: Player,
    pub companion: Companion,
    pub enemy: Enemy,
    pub phase: Phase,
    pub quest: QuestProgress,
    /// Non-negative shake magnitude, decays toward zero every tick
    pub camera_disturbance: f32,
    pub clock: SimulationClock,
    /// Keys held as of the last `set_intent`
    pub intent: MovementIntent,
    pub challenge: Option<Challenge>,
    /// Answer text typed so far during a challenge
    pub answer_draft: String,
    pub log: NarrativeLog,
}

impl World {
    pub fn new(config: GameConfig) -> Self {
        let mut log = NarrativeLog::new(config.session.log_capacity);
        log.normal("You wake up in the Forest of Basics.");
        log.normal("Use arrow keys to move.");

        Self {
            progression: ProgressionTable::new(config.progression.thresholds.clone()),
            player: Player::from_config(&config.player),
            companion: Companion::from_config(&config.companion),
            enemy: Enemy::from_config(&config.enemy),
            phase: Phase::Exploring,
            quest: QuestProgress::NotOffered,
            camera_disturbance: 0.0,
            clock: SimulationClock::new(config.combat.max_tick_delta),
            intent: MovementIntent::none(),
            challenge: None,
            answer_draft: String::new(),
            log,
            config,
        }
    }

    /// Simulated seconds since the session started
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    pub fn is_ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Start a shake at the configured pulse magnitude
    pub fn pulse_disturbance(&mut self) {
        self.camera_disturbance = self.config.combat.disturbance_pulse;
    }

    /// Decay the shake by `rate * dt`, floored at zero
    pub fn decay_disturbance(&mut self, dt: f32) {
        if self.camera_disturbance > 0.0 {
            let decayed = self.camera_disturbance - dt * self.config.combat.disturbance_decay_rate;
            self.camera_disturbance = decayed.max(0.0);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
