//! Logical input intents
//!
//! Key presses are resolved to intents outside the frame cadence and applied
//! to the state immediately.

use super::state::{GamePhase, GameState};

/// What a key press means for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Upward impulse, only from the ground while running
    Jump,
    /// Start a new session after game over
    Restart,
}

impl Intent {
    /// Intent carried by the jump key in the current phase
    pub fn for_jump_key(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Running => Intent::Jump,
            GamePhase::GameOver => Intent::Restart,
        }
    }
}

/// Apply an intent to the state; returns false when it had no effect
pub fn apply_intent(state: &mut GameState, intent: Intent) -> bool {
    match intent {
        Intent::Jump => {
            if state.is_over() || state.player.airborne {
                return false;
            }
            state.player.velocity_y = state.tuning.jump_force;
            state.player.airborne = true;
            true
        }
        Intent::Restart => {
            if !state.is_over() {
                return false;
            }
            log::info!("Restarting (previous score {})", state.score);
            state.reset();
            true
        }
    }
}
