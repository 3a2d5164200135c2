//! Game state and core simulation types
//!
//! The whole session lives in one owned [`GameState`], mutated once per
//! frame by [`super::tick`] and by the two input intents.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;

/// Session-level phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Player hit an obstacle; only a restart leaves this phase
    GameOver,
}

/// The player's sprite
///
/// `x` never changes; only `y` and `velocity_y` evolve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    /// Top edge (screen space, y grows downward)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical speed in pixels per frame, positive = downward
    pub velocity_y: f32,
    /// True between a jump and the next ground contact
    pub airborne: bool,
}

impl Player {
    /// Player standing on the ground at its start position
    pub fn grounded(tuning: &Tuning) -> Self {
        Self {
            x: tuning.player_x,
            y: tuning.player_ground_y(),
            width: tuning.player_width,
            height: tuning.player_height,
            velocity_y: 0.0,
            airborne: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Advance one fixed physics step, clamping to the ground
    pub fn integrate(&mut self, gravity: f32, ground_height: f32) {
        let new_y = self.y + self.velocity_y;
        let new_velocity_y = self.velocity_y + gravity;

        let rest_y = ground_height - self.height;
        if new_y >= rest_y {
            self.y = rest_y;
            self.velocity_y = 0.0;
            self.airborne = false;
        } else {
            self.y = new_y;
            self.velocity_y = new_velocity_y;
        }
    }
}

/// An obstacle standing on the ground, scrolling left
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Bounding box, anchored so the bottom edge sits on the ground
    pub fn rect(&self, ground_height: f32) -> Rect {
        Rect::new(self.x, ground_height - self.height, self.width, self.height)
    }

    /// Fully scrolled past the left edge of the surface
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width <= 0.0
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance values this session runs with
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Elapsed-time score
    pub score: u64,
    /// Milliseconds accumulated since the last spawn
    pub spawn_timer_ms: f64,
    /// Unscored milliseconds (only with `carry_score_remainder`)
    #[serde(default)]
    pub score_carry_ms: f64,
    /// Frames stepped while running
    pub frame_count: u64,
    pub player: Player,
    /// Oldest first; the last element is always the rightmost
    pub obstacles: Vec<Obstacle>,
    /// Next obstacle ID
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Create a fresh session with the given balance values
    pub fn new(tuning: Tuning) -> Self {
        let player = Player::grounded(&tuning);
        Self {
            tuning,
            phase: GamePhase::Running,
            score: 0,
            spawn_timer_ms: 0.0,
            score_carry_ms: 0.0,
            frame_count: 0,
            player,
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Return every session value to its initial state, keeping the tuning
    pub fn reset(&mut self) {
        let tuning = std::mem::take(&mut self.tuning);
        *self = Self::new(tuning);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Allocate a new obstacle ID
    pub fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
