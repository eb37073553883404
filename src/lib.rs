//! Asteroid Drift - simulation core for a minimal arena shooter
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (ship, projectiles, asteroids, collisions)
//! - `session`: Round control for the host loop (Idle/Active, input polling)
//! - `renderer`: Render handoff (vertex lists built from read-only state)
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::{Action, FrameInput, FrameOutcome, InputSource, RoundPhase, Session};
pub use tuning::{AsteroidRecipe, Span, Tuning, TuningError};

use glam::Vec2;

/// Host loop constants
pub mod consts {
    /// Fixed simulation timestep used by the native runner (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta the runner will feed into the accumulator
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Rotate a vector by an angle in degrees.
///
/// Screen Y grows downward, so a positive angle turns clockwise on screen.
#[inline]
pub fn rotate_deg(v: Vec2, angle_deg: f32) -> Vec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Unit direction from `from` toward `to`, or `fallback` when the points coincide
#[inline]
pub fn direction_toward(from: Vec2, to: Vec2, fallback: Vec2) -> Vec2 {
    (to - from).try_normalize().unwrap_or(fallback)
}
