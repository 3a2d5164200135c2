//! Dash Jump - A side-scrolling jump game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, score)
//! - `renderer`: Canvas 2D drawing of a game state
//! - `platform`: Browser glue (frame clock, key bindings, canvas mounting)
//! - `session`: A playable session driven by key presses and frame timestamps
//! - `settings`: Player preferences read from LocalStorage
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use settings::{Palette, Settings};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Drawing surface dimensions (logical pixels)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 500.0;
    /// Y coordinate of the ground line; everything stands on it
    pub const GROUND_HEIGHT: f32 = 400.0;

    /// Player defaults - x never changes, only y moves
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.6;
    /// Upward impulse applied on jump (pixels/frame, negative = up)
    pub const JUMP_FORCE: f32 = -12.0;

    /// Leftward scroll per frame (pixels/frame)
    pub const OBSTACLE_SPEED: f32 = 5.0;
    /// Spawn threshold window (ms)
    pub const MIN_SPACING: f64 = 1000.0;
    pub const MAX_SPACING: f64 = 2000.0;
    /// Newest obstacle must have scrolled this far from the right edge
    pub const MIN_DISTANCE_BETWEEN_OBSTACLES: f32 = 300.0;
    /// Obstacle size ranges, half-open [min, max)
    pub const OBSTACLE_MIN_WIDTH: f32 = 30.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 50.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 50.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 100.0;

    /// One point per this many elapsed milliseconds (per frame, floored)
    pub const SCORE_INTERVAL_MS: f64 = 100.0;
    /// Frame deltas above this are treated as clock anomalies
    pub const MAX_FRAME_DELTA_MS: f64 = 1000.0;
}
