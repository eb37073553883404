//! Projectiles fired by the ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A fired shot travelling in a straight line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec2,
    /// Unit heading
    pub direction: Vec2,
    pub speed: f32,
    /// Hit-circle radius
    pub radius: f32,
}

impl Projectile {
    pub fn new(position: Vec2, direction: Vec2, speed: f32, radius: f32) -> Self {
        debug_assert!(direction.is_normalized(), "projectile direction must be unit length");
        Self {
            position,
            direction,
            speed,
            radius,
        }
    }

    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.position += self.direction * self.speed * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() {
        let mut p = Projectile::new(Vec2::new(10.0, 10.0), Vec2::new(0.0, -1.0), 300.0, 2.0);
        p.advance(0.1);
        assert!((p.position - Vec2::new(10.0, -20.0)).length() < 1e-4);
        assert_eq!(p.direction, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut p = Projectile::new(Vec2::new(5.0, 6.0), Vec2::X, 300.0, 2.0);
        p.advance(0.0);
        assert_eq!(p.position, Vec2::new(5.0, 6.0));
    }
}
