//! Procedurally generated asteroids
//!
//! An asteroid is a convex polygon approximating a circle whose per-vertex
//! radius is randomized. It spawns just outside one arena edge and drifts
//! toward an aim target.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::rng::RandomSource;
use crate::tuning::AsteroidRecipe;
use crate::{direction_toward, polar_to_cartesian, rotate_deg, wrap_degrees};

/// Arena edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl ArenaEdge {
    const ALL: [ArenaEdge; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// Point on this edge pushed outward by `margin`; `t` in [0, 1] runs along the edge
    pub fn spawn_point(self, arena: Vec2, margin: f32, t: f32) -> Vec2 {
        match self {
            Self::Top => Vec2::new(t * arena.x, -margin),
            Self::Bottom => Vec2::new(t * arena.x, arena.y + margin),
            Self::Left => Vec2::new(-margin, t * arena.y),
            Self::Right => Vec2::new(arena.x + margin, t * arena.y),
        }
    }
}

/// A polygonal obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    /// Local-space vertices, centered on their own centroid
    pub shape: Vec<Vec2>,
    /// Mean of the generated vertices before recentering
    pub centroid: Vec2,
    pub position: Vec2,
    pub orientation_deg: f32,
    /// Unit heading
    pub direction: Vec2,
    pub speed: f32,
    /// Spin in degrees per second
    pub rotation_speed: f32,
    pub smallest_vertex_radius: f32,
    pub largest_vertex_radius: f32,
    /// Spawner-created; fragments are never large
    pub is_large: bool,
    /// Edge the factory placed it on (fragments keep the factory's pick)
    pub edge: ArenaEdge,
}

impl Asteroid {
    /// Advance position and spin by one step
    pub fn advance(&mut self, dt: f32) {
        self.position += self.direction * self.speed * dt;
        self.orientation_deg = wrap_degrees(self.orientation_deg + self.rotation_speed * dt);
    }

    /// Move to `position` and head toward `aim`
    pub fn relocate(&mut self, position: Vec2, aim: Vec2) {
        self.position = position;
        self.direction = direction_toward(position, aim, self.direction);
    }

    /// Vertices in world space
    pub fn world_vertices(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.shape
            .iter()
            .map(move |&v| self.position + rotate_deg(v, self.orientation_deg))
    }

    /// Radius of each generated vertex, measured from the pre-centering origin
    #[cfg(test)]
    fn vertex_radii(&self) -> impl Iterator<Item = f32> + '_ {
        self.shape.iter().map(move |&v| (v + self.centroid).length())
    }
}

/// Build one asteroid from a recipe.
///
/// Samples are drawn in a fixed order: one radius per vertex, speed,
/// rotation speed, edge, position along the edge.
pub fn create_asteroid<R: RandomSource + ?Sized>(
    recipe: &AsteroidRecipe,
    arena: Vec2,
    aim: Vec2,
    rng: &mut R,
) -> Asteroid {
    debug_assert!(recipe.sides >= 3, "asteroid needs at least 3 sides");

    let mut shape = Vec::with_capacity(recipe.sides as usize);
    let mut smallest = f32::MAX;
    let mut largest = f32::MIN;
    let mut sum = Vec2::ZERO;

    for i in 0..recipe.sides {
        let theta = TAU * i as f32 / recipe.sides as f32;
        let r = rng.uniform(recipe.radius.min, recipe.radius.max);
        smallest = smallest.min(r);
        largest = largest.max(r);
        let vertex = polar_to_cartesian(r, theta);
        sum += vertex;
        shape.push(vertex);
    }

    let centroid = sum / recipe.sides as f32;
    for vertex in &mut shape {
        *vertex -= centroid;
    }

    let speed = rng.uniform(recipe.speed.min, recipe.speed.max);
    let rotation_speed = rng.uniform(recipe.rotation.min, recipe.rotation.max);

    let edge = ArenaEdge::ALL[rng.index(4) as usize];
    let along = rng.uniform(0.0, 1.0);
    let position = edge.spawn_point(arena, largest, along);

    // Spawn points sit outside the arena, so the center is always a valid fallback
    let direction = direction_toward(position, aim, direction_toward(position, arena / 2.0, Vec2::Y));

    Asteroid {
        shape,
        centroid,
        position,
        orientation_deg: 0.0,
        direction,
        speed,
        rotation_speed,
        smallest_vertex_radius: smallest,
        largest_vertex_radius: largest,
        is_large: true,
        edge,
    }
}
