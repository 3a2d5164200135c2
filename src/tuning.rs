//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives in [`Tuning`]. The
//! defaults mirror [`crate::consts`]; a JSON override may replace any subset.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading a tuning override
#[derive(Debug)]
pub enum TuningError {
    /// The JSON could not be parsed into a `Tuning`
    Parse(serde_json::Error),
    /// A field parsed but holds a value the simulation cannot run with
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "failed to parse tuning: {}", e),
            TuningError::Invalid { field, reason } => {
                write!(f, "invalid tuning value for `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Gameplay constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Surface ===
    pub surface_width: f32,
    pub surface_height: f32,
    pub ground_height: f32,

    // === Player ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub gravity: f32,
    pub jump_force: f32,

    // === Obstacles ===
    pub obstacle_speed: f32,
    pub min_spacing_ms: f64,
    pub max_spacing_ms: f64,
    pub min_distance_between_obstacles: f32,
    pub obstacle_min_width: f32,
    pub obstacle_max_width: f32,
    pub obstacle_min_height: f32,
    pub obstacle_max_height: f32,

    // === Score ===
    pub score_interval_ms: f64,
    /// Carry sub-interval remainders between frames instead of flooring
    /// each frame on its own (at 60 Hz the per-frame floor is always 0)
    pub carry_score_remainder: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            ground_height: GROUND_HEIGHT,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,

            obstacle_speed: OBSTACLE_SPEED,
            min_spacing_ms: MIN_SPACING,
            max_spacing_ms: MAX_SPACING,
            min_distance_between_obstacles: MIN_DISTANCE_BETWEEN_OBSTACLES,
            obstacle_min_width: OBSTACLE_MIN_WIDTH,
            obstacle_max_width: OBSTACLE_MAX_WIDTH,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: OBSTACLE_MAX_HEIGHT,

            score_interval_ms: SCORE_INTERVAL_MS,
            carry_score_remainder: false,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if self.surface_width <= 0.0 || self.surface_height <= 0.0 {
            return invalid("surface_width", "surface size must be positive");
        }
        if self.ground_height > self.surface_height {
            return invalid("ground_height", "must lie on the surface");
        }
        if self.ground_height <= self.player_height {
            return invalid("ground_height", "must leave room for the player");
        }
        if self.player_width <= 0.0 || self.player_height <= 0.0 {
            return invalid("player_width", "player size must be positive");
        }
        if self.gravity <= 0.0 {
            return invalid("gravity", "must pull downward");
        }
        if self.jump_force >= 0.0 {
            return invalid("jump_force", "must be an upward (negative) impulse");
        }
        if self.obstacle_speed <= 0.0 {
            return invalid("obstacle_speed", "must be positive");
        }
        if self.min_spacing_ms < 0.0 || self.max_spacing_ms < self.min_spacing_ms {
            return invalid("max_spacing_ms", "spacing window is inverted");
        }
        if self.min_distance_between_obstacles < 0.0 {
            return invalid("min_distance_between_obstacles", "must not be negative");
        }
        if self.obstacle_min_width <= 0.0 || self.obstacle_max_width < self.obstacle_min_width {
            return invalid("obstacle_max_width", "width range is inverted");
        }
        if self.obstacle_min_height <= 0.0 || self.obstacle_max_height < self.obstacle_min_height
        {
            return invalid("obstacle_max_height", "height range is inverted");
        }
        if self.score_interval_ms <= 0.0 {
            return invalid("score_interval_ms", "must be positive");
        }
        Ok(())
    }

    /// Resting y of the player's top edge
    pub fn player_ground_y(&self) -> f32 {
        self.ground_height - self.player_height
    }
}
