//! Demo-mode pilot
//!
//! Turns toward the nearest asteroid and fires once roughly lined up.
//! Used by the headless runner and handy for soak tests.

use super::rng::RandomSource;
use super::state::GameState;
use super::tick::TickInput;

/// Fire when the target is within this many degrees of the heading
const FIRE_CONE_DEG: f32 = 10.0;
/// Stop turning inside this cone to avoid jittering around the target
const DEAD_ZONE_DEG: f32 = 2.0;

/// Pick controls for the next tick
pub fn steer<R: RandomSource>(state: &GameState<R>) -> TickInput {
    let ship = &state.ship;
    let nearest = state.asteroids.iter().min_by(|a, b| {
        a.position
            .distance_squared(ship.position)
            .total_cmp(&b.position.distance_squared(ship.position))
    });

    let Some(target) = nearest else {
        return TickInput::default();
    };
    let Some(to_target) = (target.position - ship.position).try_normalize() else {
        return TickInput::default();
    };

    // Signed angle from heading to target; positive is clockwise on screen
    let angle = ship
        .heading
        .perp_dot(to_target)
        .atan2(ship.heading.dot(to_target))
        .to_degrees();

    TickInput {
        rotate_left: angle < -DEAD_ZONE_DEG,
        rotate_right: angle > DEAD_ZONE_DEG,
        thrust: false,
        fire: angle.abs() <= FIRE_CONE_DEG,
    }
}
