//! Line-list generation for simulation entities
//!
//! Every builder appends pairs of vertices (one segment each) so a host can
//! upload the whole frame as a single line list.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::polar_to_cartesian;
use crate::sim::{Asteroid, Projectile, Ship};

/// Segments used to approximate a projectile circle
const PROJECTILE_SEGMENTS: usize = 8;

/// Append a closed polyline as line-list segments
fn push_loop(out: &mut Vec<Vertex>, points: &[Vec2], color: [f32; 4]) {
    if points.len() < 2 {
        return;
    }
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        out.push(Vertex::at(a, color));
        out.push(Vertex::at(b, color));
    }
}

/// Rectangle around the arena
pub fn arena_border(out: &mut Vec<Vertex>, arena: Vec2) {
    let corners = [
        Vec2::ZERO,
        Vec2::new(arena.x, 0.0),
        arena,
        Vec2::new(0.0, arena.y),
    ];
    push_loop(out, &corners, colors::ARENA_BORDER);
}

/// Asteroid outline in world space
pub fn asteroid_outline(out: &mut Vec<Vertex>, asteroid: &Asteroid) {
    let points: Vec<Vec2> = asteroid.world_vertices().collect();
    push_loop(out, &points, colors::ASTEROID);
}

/// Small circle around a projectile's hit-circle
pub fn projectile_circle(out: &mut Vec<Vertex>, projectile: &Projectile) {
    let points: Vec<Vec2> = (0..PROJECTILE_SEGMENTS)
        .map(|i| {
            let theta = TAU * i as f32 / PROJECTILE_SEGMENTS as f32;
            projectile.position + polar_to_cartesian(projectile.radius, theta)
        })
        .collect();
    push_loop(out, &points, colors::PROJECTILE);
}

/// Arrowhead pointing along the ship's heading
pub fn ship_arrow(out: &mut Vec<Vertex>, ship: &Ship, width: f32) {
    let half = width * 0.5;
    let forward = ship.heading;
    let side = forward.perp();
    let points = [
        ship.position + forward * half,
        ship.position - forward * half + side * half,
        ship.position - forward * (half * 0.5),
        ship.position - forward * half - side * half,
    ];
    push_loop(out, &points, colors::SHIP);
}
