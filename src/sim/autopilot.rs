//! Demo bot that plays the game
//!
//! Jumps so the top of the jump arc lines up with the middle of the next
//! obstacle. Good enough to smoke-run the loop; not a perfect player.

use super::input::{Intent, apply_intent};
use super::state::GameState;

/// Whether the bot wants to jump this frame
pub fn should_jump(state: &GameState) -> bool {
    if state.is_over() || state.player.airborne {
        return false;
    }

    let tuning = &state.tuning;
    let player = state.player.rect();
    // Frames from takeoff to the top of the arc
    let frames_to_peak = -tuning.jump_force / tuning.gravity;

    state
        .obstacles
        .iter()
        .map(|o| (o.x - player.right(), o.width))
        .filter(|(gap, _)| *gap >= 0.0)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .is_some_and(|(gap, width)| {
            let lead = tuning.obstacle_speed * frames_to_peak - (player.size.x + width) / 2.0;
            gap <= lead
        })
}

/// Jump if the bot wants to; returns whether a jump happened
pub fn drive(state: &mut GameState) -> bool {
    should_jump(state) && apply_intent(state, Intent::Jump)
}
