//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed physics step per frame
//! - Injected RNG only
//! - Stable obstacle order (oldest first)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, first_hit, player_hits_obstacle};
pub use input::{Intent, apply_intent};
#[cfg(test)]
pub use rng::ScriptedRandom;
pub use rng::{RandomSource, seeded};
pub use state::{GamePhase, GameState, Obstacle, Player};
pub use tick::{TickOutcome, tick};
