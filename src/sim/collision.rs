//! Hit-circle tests
//!
//! Every entity is approximated by a circle. Asteroids use their largest
//! vertex radius against projectiles and for culling, but their smallest
//! vertex radius against the ship, which makes ship contact forgiving.

use glam::Vec2;

use super::asteroid::Asteroid;
use super::projectile::Projectile;

/// Strict overlap of two circles whose radii sum to `combined_radius`
#[inline]
pub fn circles_overlap(a: Vec2, b: Vec2, combined_radius: f32) -> bool {
    a.distance_squared(b) < combined_radius * combined_radius
}

/// True once a circle has fully left the arena rectangle on any side
#[inline]
pub fn circle_outside_arena(center: Vec2, radius: f32, arena: Vec2) -> bool {
    center.x + radius < 0.0
        || center.x - radius > arena.x
        || center.y + radius < 0.0
        || center.y - radius > arena.y
}

/// Index of the projectile that strikes `asteroid`, searching newest first
pub fn find_projectile_hit(asteroid: &Asteroid, projectiles: &[Projectile]) -> Option<usize> {
    projectiles.iter().rposition(|p| {
        circles_overlap(
            asteroid.position,
            p.position,
            asteroid.largest_vertex_radius + p.radius,
        )
    })
}

/// Whether any asteroid touches the ship's hitbox
pub fn ship_hit(asteroids: &[Asteroid], ship_position: Vec2, hitbox_radius: f32) -> bool {
    asteroids.iter().any(|a| {
        circles_overlap(
            a.position,
            ship_position,
            a.smallest_vertex_radius + hitbox_radius,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::asteroid::ArenaEdge;

    const ARENA: Vec2 = Vec2::new(320.0, 160.0);

    fn rock(position: Vec2, smallest: f32, largest: f32) -> Asteroid {
        Asteroid {
            shape: vec![Vec2::X, Vec2::Y, Vec2::NEG_X],
            centroid: Vec2::ZERO,
            position,
            orientation_deg: 0.0,
            direction: Vec2::X,
            speed: 0.0,
            rotation_speed: 0.0,
            smallest_vertex_radius: smallest,
            largest_vertex_radius: largest,
            is_large: true,
            edge: ArenaEdge::Top,
        }
    }

    #[test]
    fn test_circles_overlap_is_strict() {
        assert!(circles_overlap(Vec2::ZERO, Vec2::new(2.9, 0.0), 3.0));
        assert!(!circles_overlap(Vec2::ZERO, Vec2::new(3.0, 0.0), 3.0));
    }

    #[test]
    fn test_circle_outside_arena_each_side() {
        assert!(!circle_outside_arena(Vec2::new(160.0, 80.0), 5.0, ARENA));
        // Straddling an edge still counts as inside
        assert!(!circle_outside_arena(Vec2::new(-4.0, 80.0), 5.0, ARENA));
        assert!(circle_outside_arena(Vec2::new(-6.0, 80.0), 5.0, ARENA));
        assert!(circle_outside_arena(Vec2::new(326.0, 80.0), 5.0, ARENA));
        assert!(circle_outside_arena(Vec2::new(160.0, -6.0), 5.0, ARENA));
        assert!(circle_outside_arena(Vec2::new(160.0, 166.0), 5.0, ARENA));
    }

    #[test]
    fn test_projectile_hit_uses_largest_radius() {
        let asteroid = rock(Vec2::new(100.0, 100.0), 5.0, 20.0);
        let near = Projectile::new(Vec2::new(121.0, 100.0), Vec2::X, 300.0, 2.0);
        let far = Projectile::new(Vec2::new(123.0, 100.0), Vec2::X, 300.0, 2.0);
        assert_eq!(find_projectile_hit(&asteroid, &[far.clone(), near]), Some(1));
        assert_eq!(find_projectile_hit(&asteroid, &[far]), None);
        assert_eq!(find_projectile_hit(&asteroid, &[]), None);
    }

    #[test]
    fn test_projectile_hit_with_several_overlapping() {
        let asteroid = rock(Vec2::new(100.0, 100.0), 5.0, 20.0);
        let a = Projectile::new(Vec2::new(100.0, 100.0), Vec2::X, 300.0, 2.0);
        let b = Projectile::new(Vec2::new(105.0, 100.0), Vec2::X, 300.0, 2.0);
        let miss = Projectile::new(Vec2::new(200.0, 100.0), Vec2::X, 300.0, 2.0);
        // Either overlapping projectile may be picked, never the miss
        let hit = find_projectile_hit(&asteroid, &[a, miss, b]);
        assert!(matches!(hit, Some(0) | Some(2)));
    }

    #[test]
    fn test_ship_hit_uses_smallest_radius() {
        let ship = Vec2::new(100.0, 100.0);
        // Within largest + hitbox but outside smallest + hitbox: no loss
        let asteroids = [rock(Vec2::new(120.0, 100.0), 5.0, 20.0)];
        assert!(!ship_hit(&asteroids, ship, 10.0));

        let asteroids = [rock(Vec2::new(114.9, 100.0), 5.0, 20.0)];
        assert!(ship_hit(&asteroids, ship, 10.0));

        // Exactly touching is not a hit
        let asteroids = [rock(Vec2::new(115.0, 100.0), 5.0, 20.0)];
        assert!(!ship_hit(&asteroids, ship, 10.0));

        assert!(!ship_hit(&[], ship, 10.0));
    }
}
