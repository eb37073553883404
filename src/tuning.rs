//! Data-driven game balance
//!
//! Every gameplay constant lives here so hosts can load an override file
//! instead of recompiling.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Inclusive scalar range sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Scale both ends by a constant factor
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Parameters handed to the asteroid factory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidRecipe {
    /// Polygon vertex count
    pub sides: u32,
    /// Per-vertex radius range
    pub radius: Span,
    /// Movement speed range (units/s)
    pub speed: Span,
    /// Spin range (degrees/s)
    pub rotation: Span,
}

/// Periodic spawner defaults
impl Default for AsteroidRecipe {
    fn default() -> Self {
        Self {
            sides: 6,
            radius: Span::new(5.0, 30.0),
            speed: Span::new(50.0, 100.0),
            rotation: Span::new(-180.0, 180.0),
        }
    }
}

/// How destroyed large asteroids break apart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FragmentTuning {
    pub sides: u32,
    /// Applied to the parent's smallest/largest vertex radius
    pub radius_scale: f32,
    /// Applied to the parent's speed to form the fragment speed range
    pub speed_scale: Span,
    /// Spin range (degrees/s)
    pub rotation: Span,
    /// Aim offsets relative to the destroying projectile's direction (degrees)
    pub spread_deg: [f32; 3],
}

impl Default for FragmentTuning {
    fn default() -> Self {
        Self {
            sides: 4,
            radius_scale: 0.5,
            speed_scale: Span::new(0.5, 1.5),
            rotation: Span::new(-270.0, 270.0),
            spread_deg: [-30.0, 0.0, 30.0],
        }
    }
}

impl FragmentTuning {
    /// Factory recipe for a fragment of an asteroid with the given radii and speed
    pub fn recipe_for(&self, smallest_radius: f32, largest_radius: f32, speed: f32) -> AsteroidRecipe {
        AsteroidRecipe {
            sides: self.sides,
            radius: Span::new(
                smallest_radius * self.radius_scale,
                largest_radius * self.radius_scale,
            ),
            speed: self.speed_scale.scaled(speed),
            rotation: self.rotation,
        }
    }
}

/// Game balance constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ship ===
    /// Start position is the arena center pushed down by this much
    pub ship_start_offset_y: f32,
    /// Units per second while thrusting
    pub ship_movement_speed: f32,
    /// Degrees per second while a rotate input is held
    pub ship_rotation_speed: f32,
    pub ship_hitbox_radius: f32,
    /// Visual width; projectiles leave from half of it ahead of the ship
    pub ship_width: f32,

    // === Weapons ===
    pub fire_cooldown: f32,
    pub projectile_speed: f32,
    pub projectile_radius: f32,

    // === Asteroids ===
    pub spawn_cooldown: f32,
    pub spawn: AsteroidRecipe,
    pub fragment: FragmentTuning,
    /// Extra margin past the largest vertex radius before an asteroid is culled
    pub cull_padding: f32,

    // === Scoring ===
    pub escape_points: u32,
    pub destroy_points: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: 320.0,
            arena_height: 160.0,

            ship_start_offset_y: 40.0,
            ship_movement_speed: 150.0,
            ship_rotation_speed: 180.0,
            ship_hitbox_radius: 10.0,
            ship_width: 16.0,

            fire_cooldown: 0.5,
            projectile_speed: 300.0,
            projectile_radius: 2.0,

            spawn_cooldown: 1.5,
            spawn: AsteroidRecipe::default(),
            fragment: FragmentTuning::default(),
            cull_padding: 5.0,

            escape_points: 2,
            destroy_points: 10,
        }
    }
}

impl Tuning {
    /// Arena size as a vector (width, height)
    #[inline]
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Where the ship starts each round
    pub fn ship_start(&self) -> Vec2 {
        Vec2::new(
            self.arena_width / 2.0,
            self.arena_height / 2.0 + self.ship_start_offset_y,
        )
    }

    /// Parse and validate a JSON tuning document (missing fields keep defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(TuningError::Parse)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        let result = std::fs::read_to_string(path)
            .map_err(TuningError::Io)
            .and_then(|json| Self::from_json(&json));

        match result {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Check every value the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ship_movement_speed", self.ship_movement_speed),
            ("ship_rotation_speed", self.ship_rotation_speed),
            ("ship_hitbox_radius", self.ship_hitbox_radius),
            ("ship_width", self.ship_width),
            ("fire_cooldown", self.fire_cooldown),
            ("projectile_speed", self.projectile_speed),
            ("projectile_radius", self.projectile_radius),
            ("spawn_cooldown", self.spawn_cooldown),
            ("spawn.radius.min", self.spawn.radius.min),
            // Fragment speed ranges scale the parent speed, so it must stay positive
            ("spawn.speed.min", self.spawn.speed.min),
            ("fragment.radius_scale", self.fragment.radius_scale),
            ("fragment.speed_scale.min", self.fragment.speed_scale.min),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field });
            }
            if value <= 0.0 {
                return Err(TuningError::NonPositive { field });
            }
        }

        let finite = [
            ("ship_start_offset_y", self.ship_start_offset_y),
            ("cull_padding", self.cull_padding),
            ("fragment.spread_deg[0]", self.fragment.spread_deg[0]),
            ("fragment.spread_deg[1]", self.fragment.spread_deg[1]),
            ("fragment.spread_deg[2]", self.fragment.spread_deg[2]),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field });
            }
        }

        let ranges = [
            ("spawn.radius", self.spawn.radius),
            ("spawn.speed", self.spawn.speed),
            ("spawn.rotation", self.spawn.rotation),
            ("fragment.speed_scale", self.fragment.speed_scale),
            ("fragment.rotation", self.fragment.rotation),
        ];
        for (field, span) in ranges {
            if !span.min.is_finite() || !span.max.is_finite() {
                return Err(TuningError::NotFinite { field });
            }
            if span.min > span.max {
                return Err(TuningError::InvertedRange {
                    field,
                    min: span.min,
                    max: span.max,
                });
            }
        }

        for (field, sides) in [("spawn.sides", self.spawn.sides), ("fragment.sides", self.fragment.sides)] {
            if sides < 3 {
                return Err(TuningError::TooFewSides { field, sides });
            }
        }

        Ok(())
    }
}

/// Why a tuning document was rejected
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    NonPositive { field: &'static str },
    NotFinite { field: &'static str },
    InvertedRange { field: &'static str, min: f32, max: f32 },
    TooFewSides { field: &'static str, sides: u32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read tuning: {e}"),
            Self::Parse(e) => write!(f, "invalid tuning json: {e}"),
            Self::NonPositive { field } => write!(f, "{field} must be greater than zero"),
            Self::NotFinite { field } => write!(f, "{field} must be finite"),
            Self::InvertedRange { field, min, max } => {
                write!(f, "{field} range is inverted: min={min}, max={max}")
            }
            Self::TooFewSides { field, sides } => {
                write!(f, "{field} needs at least 3 sides, got {sides}")
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.arena(), Vec2::new(320.0, 160.0));
        assert_eq!(tuning.ship_start(), Vec2::new(160.0, 120.0));
    }

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{ "fire_cooldown": 0.25, "destroy_points": 25 }"#)
            .expect("valid json");
        assert_eq!(tuning.fire_cooldown, 0.25);
        assert_eq!(tuning.destroy_points, 25);
        // Untouched fields keep defaults
        assert_eq!(tuning.spawn_cooldown, 1.5);
        assert_eq!(tuning.spawn.sides, 6);
    }

    #[test]
    fn test_from_json_nested_partial_override() {
        let tuning = Tuning::from_json(
            r#"{ "spawn": { "sides": 8 }, "fragment": { "spread_deg": [-45.0, 0.0, 45.0] } }"#,
        )
        .expect("valid json");
        assert_eq!(tuning.spawn.sides, 8);
        assert_eq!(tuning.spawn.radius, Span::new(5.0, 30.0));
        assert_eq!(tuning.spawn.speed, Span::new(50.0, 100.0));
        assert_eq!(tuning.fragment.spread_deg, [-45.0, 0.0, 45.0]);
        assert_eq!(tuning.fragment.sides, 4);
        assert_eq!(tuning.fragment.speed_scale, Span::new(0.5, 1.5));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(Tuning::from_json("not json"), Err(TuningError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut tuning = Tuning::default();
        tuning.spawn.speed = Span::new(100.0, 50.0);
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::InvertedRange { field: "spawn.speed", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_degenerate_polygon() {
        let mut tuning = Tuning::default();
        tuning.fragment.sides = 2;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::TooFewSides { sides: 2, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_spawn_speed() {
        let mut tuning = Tuning::default();
        tuning.spawn.speed = Span::new(-100.0, -50.0);
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositive { field: "spawn.speed.min" })
        ));

        // Through the loader as well
        let json = r#"{ "spawn": { "speed": { "min": -100.0, "max": -50.0 } } }"#;
        assert!(matches!(
            Tuning::from_json(json),
            Err(TuningError::NonPositive { field: "spawn.speed.min" })
        ));
    }

    #[test]
    fn test_validated_speeds_give_ordered_fragment_ranges() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        for parent_speed in [tuning.spawn.speed.min, tuning.spawn.speed.max] {
            let recipe = tuning.fragment.recipe_for(5.0, 30.0, parent_speed);
            assert!(recipe.speed.min <= recipe.speed.max);
            assert!(recipe.radius.min <= recipe.radius.max);
        }
    }

    #[test]
    fn test_validate_rejects_zero_cooldown() {
        let mut tuning = Tuning::default();
        tuning.fire_cooldown = 0.0;
        let err = tuning.validate().unwrap_err();
        assert_eq!(err.to_string(), "fire_cooldown must be greater than zero");
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let tuning = Tuning::load(Path::new("/nonexistent/asteroid-drift/tuning.json"));
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_fragment_recipe_scales_parent() {
        let recipe = Tuning::default().fragment.recipe_for(8.0, 20.0, 60.0);
        assert_eq!(recipe.sides, 4);
        assert_eq!(recipe.radius, Span::new(4.0, 10.0));
        assert_eq!(recipe.speed, Span::new(30.0, 90.0));
        assert_eq!(recipe.rotation, Span::new(-270.0, 270.0));
    }
}
