//! Axis-aligned boxes and center-to-center distance

use serde::{Deserialize, Serialize};

use crate::core::types::Vec2;

/// Position (top-left corner) and size of an actor
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub position: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Distance between the centers of two boxes
    pub fn distance_to(&self, other: &Bounds) -> f32 {
        self.center().distance(&other.center())
    }
}
