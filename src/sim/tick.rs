//! Per-frame simulation step
//!
//! Order within a tick: ship input, firing, projectiles, spawning, then one
//! reverse pass over asteroids that moves, culls and resolves hits.

use glam::Vec2;

use super::asteroid::{Asteroid, create_asteroid};
use super::collision::{circle_outside_arena, find_projectile_hit};
use super::projectile::Projectile;
use super::rng::RandomSource;
use super::state::{GameEvent, GameState};
use crate::rotate_deg;

/// Held controls for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

/// Advance an active round by `dt` seconds
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput, dt: f32) {
    state.events.clear();

    steer_ship(state, input, dt);
    fire(state, input, dt);
    advance_projectiles(state, dt);
    spawn_asteroids(state, dt);
    advance_asteroids(state, dt);
}

fn steer_ship<R: RandomSource>(state: &mut GameState<R>, input: &TickInput, dt: f32) {
    let turn = state.tuning.ship_rotation_speed * dt;
    if input.rotate_left {
        state.ship.rotate(-turn);
    }
    if input.rotate_right {
        state.ship.rotate(turn);
    }
    if input.thrust {
        state.ship.thrust(state.tuning.ship_movement_speed * dt);
    }
}

fn fire<R: RandomSource>(state: &mut GameState<R>, input: &TickInput, dt: f32) {
    state.shoot_timer += dt;

    if input.fire && state.shoot_timer >= state.tuning.fire_cooldown {
        state.shoot_timer = 0.0;
        let position = state.ship.nose(state.tuning.ship_width);
        state.projectiles.push(Projectile::new(
            position,
            state.ship.heading,
            state.tuning.projectile_speed,
            state.tuning.projectile_radius,
        ));
        state.events.push(GameEvent::ProjectileFired { position });
    }
}

fn advance_projectiles<R: RandomSource>(state: &mut GameState<R>, dt: f32) {
    let arena = state.tuning.arena();
    for i in (0..state.projectiles.len()).rev() {
        let projectile = &mut state.projectiles[i];
        projectile.advance(dt);
        if circle_outside_arena(projectile.position, projectile.radius, arena) {
            state.projectiles.remove(i);
        }
    }
}

fn spawn_asteroids<R: RandomSource>(state: &mut GameState<R>, dt: f32) {
    state.spawn_timer += dt;

    if state.spawn_timer >= state.tuning.spawn_cooldown {
        state.spawn_timer = 0.0;
        let asteroid = create_asteroid(
            &state.tuning.spawn,
            state.tuning.arena(),
            state.ship.position,
            &mut state.rng,
        );
        log::debug!(
            "Asteroid spawned on {:?} edge at ({:.1}, {:.1}), radius {:.1}..{:.1}",
            asteroid.edge,
            asteroid.position.x,
            asteroid.position.y,
            asteroid.smallest_vertex_radius,
            asteroid.largest_vertex_radius
        );
        state.events.push(GameEvent::AsteroidSpawned {
            position: asteroid.position,
        });
        state.asteroids.push(asteroid);
    }
}

fn advance_asteroids<R: RandomSource>(state: &mut GameState<R>, dt: f32) {
    let arena = state.tuning.arena();
    let padding = state.tuning.cull_padding;
    // Fragments join after the pass so they are first visited next tick
    let mut fragments = Vec::new();

    for i in (0..state.asteroids.len()).rev() {
        let asteroid = &mut state.asteroids[i];
        asteroid.advance(dt);

        if circle_outside_arena(asteroid.position, asteroid.largest_vertex_radius + padding, arena) {
            let points = if asteroid.is_large { state.tuning.escape_points } else { 0 };
            let event = GameEvent::AsteroidEscaped {
                position: asteroid.position,
                large: asteroid.is_large,
                points,
            };
            state.score += points;
            state.events.push(event);
            log::trace!("Asteroid escaped (+{points})");
            state.asteroids.remove(i);
            continue;
        }

        let Some(hit) = find_projectile_hit(&state.asteroids[i], &state.projectiles) else {
            continue;
        };

        let projectile = state.projectiles.remove(hit);
        let parent = state.asteroids.remove(i);
        state.score += state.tuning.destroy_points;

        let before = fragments.len();
        if parent.is_large {
            split_asteroid(state, &parent, projectile.direction, &mut fragments);
        }
        let spawned = fragments.len() - before;

        log::debug!(
            "Asteroid destroyed at ({:.1}, {:.1}), {} fragments, score {}",
            parent.position.x,
            parent.position.y,
            spawned,
            state.score
        );
        state.events.push(GameEvent::AsteroidDestroyed {
            position: parent.position,
            large: parent.is_large,
            fragments: spawned,
        });
    }

    state.asteroids.append(&mut fragments);
}

/// Break a large asteroid into fragments fanned around the shot direction
fn split_asteroid<R: RandomSource>(
    state: &mut GameState<R>,
    parent: &Asteroid,
    shot_direction: Vec2,
    out: &mut Vec<Asteroid>,
) {
    let recipe = state.tuning.fragment.recipe_for(
        parent.smallest_vertex_radius,
        parent.largest_vertex_radius,
        parent.speed,
    );
    let arena = state.tuning.arena();

    for angle in state.tuning.fragment.spread_deg {
        let aim = parent.position + rotate_deg(shot_direction, angle);
        let mut fragment = create_asteroid(&recipe, arena, aim, &mut state.rng);
        fragment.relocate(parent.position, aim);
        fragment.is_large = false;
        out.push(fragment);
    }
}
