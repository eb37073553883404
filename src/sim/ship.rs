//! The player's ship pose
//!
//! `heading` drives both movement and the drawn orientation, so the two are
//! only ever changed together through [`Ship::rotate`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{rotate_deg, wrap_degrees};

/// Heading the ship starts each round with (up the screen)
pub const START_HEADING: Vec2 = Vec2::new(0.0, -1.0);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub position: Vec2,
    /// Unit movement axis
    pub heading: Vec2,
    /// Visual rotation relative to the sprite's resting pose (degrees)
    pub orientation_deg: f32,
}

impl Ship {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            heading: START_HEADING,
            orientation_deg: 0.0,
        }
    }

    /// Rotate heading and visual pose together
    pub fn rotate(&mut self, angle_deg: f32) {
        // Re-normalize so repeated small rotations don't drift off unit length
        self.heading = rotate_deg(self.heading, angle_deg).normalize();
        self.orientation_deg = wrap_degrees(self.orientation_deg + angle_deg);
    }

    /// Move along the heading
    pub fn thrust(&mut self, distance: f32) {
        self.position += self.heading * distance;
    }

    /// Muzzle point, half the ship's width ahead of its center
    pub fn nose(&self, width: f32) -> Vec2 {
        self.position + self.heading * (width * 0.5)
    }
}
