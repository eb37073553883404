//! Round state owned by the ship controller
//!
//! A round is everything in [`GameState`]: the ship pose, score, both
//! cooldown timers and the live projectile and asteroid collections.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::asteroid::Asteroid;
use super::collision::ship_hit;
use super::projectile::Projectile;
use super::rng::RandomSource;
use super::ship::Ship;
use crate::tuning::Tuning;

/// Something notable that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    ProjectileFired { position: Vec2 },
    AsteroidSpawned { position: Vec2 },
    /// Left the arena; `points` is zero for fragments
    AsteroidEscaped { position: Vec2, large: bool, points: u32 },
    /// Hit by a projectile; `fragments` children were created
    AsteroidDestroyed { position: Vec2, large: bool, fragments: usize },
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    pub tuning: Tuning,
    pub ship: Ship,
    pub score: u32,
    /// Seconds since the last shot (counts up toward `fire_cooldown`)
    pub shoot_timer: f32,
    /// Seconds since the last spawn (counts up toward `spawn_cooldown`)
    pub spawn_timer: f32,
    pub projectiles: Vec<Projectile>,
    pub asteroids: Vec<Asteroid>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub(super) rng: R,
}

impl GameState<Pcg32> {
    /// Create a round driven by a seeded PCG generator
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), tuning)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a round with an explicit random source
    pub fn with_rng(rng: R, tuning: Tuning) -> Self {
        Self {
            ship: Ship::new(tuning.ship_start()),
            tuning,
            score: 0,
            shoot_timer: 0.0,
            spawn_timer: 0.0,
            projectiles: Vec::new(),
            asteroids: Vec::new(),
            events: Vec::new(),
            rng,
        }
    }

    /// Start a fresh round; the random stream carries on
    pub fn reset(&mut self) {
        self.ship = Ship::new(self.tuning.ship_start());
        self.score = 0;
        self.shoot_timer = 0.0;
        self.spawn_timer = 0.0;
        self.projectiles.clear();
        self.asteroids.clear();
        self.events.clear();
    }

    /// True when any asteroid overlaps the ship's hitbox
    pub fn check_for_loss(&self) -> bool {
        ship_hit(&self.asteroids, self.ship.position, self.tuning.ship_hitbox_radius)
    }

    /// Serializable read-only view for debugging dumps
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            ship_position: self.ship.position,
            ship_heading: self.ship.heading,
            asteroids: self
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    position: a.position,
                    large: a.is_large,
                    outline: a.world_vertices().collect(),
                })
                .collect(),
            projectiles: self.projectiles.iter().map(|p| p.position).collect(),
        }
    }
}

/// Render/debug view of an asteroid
#[derive(Debug, Clone, Serialize)]
pub struct AsteroidView {
    pub position: Vec2,
    pub large: bool,
    pub outline: Vec<Vec2>,
}

/// Render/debug view of a whole round
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub score: u32,
    pub ship_position: Vec2,
    pub ship_heading: Vec2,
    pub asteroids: Vec<AsteroidView>,
    pub projectiles: Vec<Vec2>,
}
