//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform concerns:
//! - Time only enters through the `dt` handed to `tick`
//! - Randomness only enters through a `RandomSource`
//! - Collections are owned by `GameState` and mutated only inside `tick`

pub mod asteroid;
pub mod autopilot;
pub mod collision;
pub mod projectile;
pub mod rng;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::{ArenaEdge, Asteroid, create_asteroid};
pub use collision::{circle_outside_arena, circles_overlap, find_projectile_hit, ship_hit};
pub use projectile::Projectile;
pub use rng::{RandomSource, SequenceSource};
pub use ship::Ship;
pub use state::{AsteroidView, GameEvent, GameState, Snapshot};
pub use tick::{TickInput, tick};
