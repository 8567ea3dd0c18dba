//! Frame clock turning host timestamps into bounded simulation deltas

use serde::{Deserialize, Serialize};

/// Default cap on a single step, in seconds
pub const DEFAULT_MAX_DELTA: f32 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationClock {
    last_timestamp: Option<f64>,
    elapsed: f64,
    max_delta: f32,
}

impl SimulationClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_timestamp: None,
            elapsed: 0.0,
            max_delta,
        }
    }

    /// Record `now_seconds` and return the clamped delta since the last call
    ///
    /// The first call only establishes the reference point and returns 0.
    /// A timestamp earlier than the previous one also yields 0.
    pub fn advance(&mut self, now_seconds: f64) -> f32 {
        let raw = match self.last_timestamp {
            Some(previous) => (now_seconds - previous).max(0.0),
            None => 0.0,
        };
        self.last_timestamp = Some(now_seconds);

        let dt = (raw as f32).min(self.max_delta);
        self.elapsed += f64::from(dt);
        dt
    }

    /// Total simulated time, the sum of all clamped deltas
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DELTA)
    }
}
