//! Render handoff
//!
//! Turns read-only simulation state into a line-list vertex buffer. Drawing,
//! windowing and color filters belong to the host.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::sim::{GameState, RandomSource};

/// Build every segment for the current frame: border, asteroids, projectiles, ship
pub fn frame_lines<R: RandomSource>(state: &GameState<R>) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(8 + state.asteroids.len() * 12 + state.projectiles.len() * 16 + 8);

    shapes::arena_border(&mut out, state.tuning.arena());
    for asteroid in &state.asteroids {
        shapes::asteroid_outline(&mut out, asteroid);
    }
    for projectile in &state.projectiles {
        shapes::projectile_circle(&mut out, projectile);
    }
    shapes::ship_arrow(&mut out, &state.ship, state.tuning.ship_width);

    out
}

/// Raw bytes of a vertex list, ready for a GPU upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
