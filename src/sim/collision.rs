//! Collision detection between the player and obstacles
//!
//! Everything is an axis-aligned box in screen space (y grows downward).

use glam::Vec2;

use super::state::{Obstacle, Player};

/// Axis-aligned rectangle, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Strict overlap on both axes (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// True when the player's box intersects an obstacle standing on the ground
///
/// The player never sinks below the ground line, so vertically this only
/// ever depends on the player's bottom edge against the obstacle's top.
pub fn player_hits_obstacle(player: &Player, obstacle: &Obstacle, ground_height: f32) -> bool {
    player.rect().overlaps(&obstacle.rect(ground_height))
}

/// First obstacle (in sequence order) the player intersects
pub fn first_hit<'a>(
    player: &Player,
    obstacles: &'a [Obstacle],
    ground_height: f32,
) -> Option<&'a Obstacle> {
    obstacles
        .iter()
        .find(|o| player_hits_obstacle(player, o, ground_height))
}
