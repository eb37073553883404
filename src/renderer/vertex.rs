//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[inline]
    pub fn at(point: Vec2, color: [f32; 4]) -> Self {
        Self::new(point.x, point.y, color)
    }
}

/// Colors for game elements
pub mod colors {
    pub const ARENA_BORDER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SHIP: [f32; 4] = [0.6, 0.9, 1.0, 1.0];
    pub const ASTEROID: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PROJECTILE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
}
