//! Per-frame simulation step
//!
//! Physics advances one fixed step per rendered frame; `delta_ms` only drives
//! the spawn timer and the score.

use super::collision::first_hit;
use super::rng::RandomSource;
use super::spawn::{advance_obstacles, try_spawn};
use super::state::{GamePhase, GameState};
use crate::consts::MAX_FRAME_DELTA_MS;

/// What happened during one step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// ID of the obstacle spawned this frame
    pub spawned: Option<u32>,
    /// Obstacles removed after scrolling off screen
    pub culled: usize,
    /// Obstacle that ended the run this frame
    pub collided_with: Option<u32>,
    /// Points added this frame
    pub points: u64,
}

/// Points earned for an elapsed frame time
pub fn points_for(delta_ms: f64, score_interval_ms: f64) -> u64 {
    if delta_ms > 0.0 {
        (delta_ms / score_interval_ms).floor() as u64
    } else {
        0
    }
}

/// Advance the game state by one frame
///
/// Does nothing once the session is over. The collision check runs against
/// the player and obstacle positions as they were when the frame began, so a
/// hit registers one frame after the overlap is first drawn.
pub fn tick(state: &mut GameState, delta_ms: f64, rng: &mut impl RandomSource) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if state.phase == GamePhase::GameOver {
        return outcome;
    }

    // Clock anomalies feed neither the spawn timer nor the score
    let delta_ms = if delta_ms.is_finite() && delta_ms > 0.0 && delta_ms <= MAX_FRAME_DELTA_MS {
        delta_ms
    } else {
        0.0
    };

    let ground = state.tuning.ground_height;
    outcome.collided_with = first_hit(&state.player, &state.obstacles, ground).map(|o| o.id);

    // Player physics
    state.player.integrate(state.tuning.gravity, ground);

    // Obstacles
    outcome.culled = advance_obstacles(&mut state.obstacles, state.tuning.obstacle_speed);
    state.spawn_timer_ms += delta_ms;
    outcome.spawned = try_spawn(state, rng);

    // Score
    outcome.points = if state.tuning.carry_score_remainder {
        state.score_carry_ms += delta_ms;
        let points = points_for(state.score_carry_ms, state.tuning.score_interval_ms);
        state.score_carry_ms -= points as f64 * state.tuning.score_interval_ms;
        points
    } else {
        points_for(delta_ms, state.tuning.score_interval_ms)
    };
    state.score = state.score.saturating_add(outcome.points);
    state.frame_count += 1;

    if let Some(id) = outcome.collided_with {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: hit obstacle {} after {} frames, score {}",
            id,
            state.frame_count,
            state.score
        );
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::{Intent, apply_intent};
    use crate::sim::rng::{ScriptedRandom, seeded};
    use crate::sim::state::Obstacle;
    use proptest::prelude::*;

    #[test]
    fn test_idle_frames_stay_grounded_without_points() {
        let mut state = GameState::default();
        let mut rng = ScriptedRandom::constant(0.0);
        for _ in 0..10 {
            tick(&mut state, 16.0, &mut rng);
        }
        assert_eq!(state.player.y, 360.0);
        assert_eq!(state.player.velocity_y, 0.0);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.spawn_timer_ms, 160.0);
        assert_eq!(state.frame_count, 10);
    }

    #[test]
    fn test_score_floors_per_frame() {
        let mut state = GameState::default();
        let mut rng = ScriptedRandom::constant(0.99);
        tick(&mut state, 250.0, &mut rng);
        assert_eq!(state.score, 2);
        tick(&mut state, 99.9, &mut rng);
        assert_eq!(state.score, 2);
        tick(&mut state, 100.0, &mut rng);
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_carried_remainder_scores_at_60hz() {
        let tuning = crate::tuning::Tuning {
            carry_score_remainder: true,
            ..Default::default()
        };
        let mut state = GameState::new(tuning);
        let mut rng = ScriptedRandom::constant(0.99);
        for _ in 0..60 {
            tick(&mut state, 1000.0 / 60.0, &mut rng);
        }
        // About one second elapsed
        assert!((9..=10).contains(&state.score));
        assert!(state.score_carry_ms < 100.0);
    }

    #[test]
    fn test_clock_anomalies_are_ignored() {
        let mut state = GameState::default();
        let mut rng = ScriptedRandom::constant(0.0);
        tick(&mut state, -500.0, &mut rng);
        tick(&mut state, f64::NAN, &mut rng);
        assert_eq!(state.score, 0);
        assert_eq!(state.spawn_timer_ms, 0.0);
        // Physics still steps once per frame
        assert_eq!(state.frame_count, 2);
    }

    #[test]
    fn test_oversized_deltas_are_ignored() {
        let mut state = GameState::default();
        let mut rng = ScriptedRandom::constant(0.0);
        tick(&mut state, 1e30, &mut rng);
        tick(&mut state, 1e30, &mut rng);
        tick(&mut state, MAX_FRAME_DELTA_MS + 0.5, &mut rng);
        assert_eq!(state.score, 0);
        assert_eq!(state.spawn_timer_ms, 0.0);
        assert_eq!(state.frame_count, 3);

        // The limit itself still counts
        tick(&mut state, MAX_FRAME_DELTA_MS, &mut rng);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_score_saturates() {
        let mut state = GameState::default();
        state.score = u64::MAX - 1;
        let mut rng = ScriptedRandom::constant(0.99);
        tick(&mut state, 500.0, &mut rng);
        assert_eq!(state.score, u64::MAX);
    }

    #[test]
    fn test_collision_ends_run() {
        let mut state = GameState::default();
        state.obstacles.push(Obstacle { id: 9, x: 60.0, width: 30.0, height: 60.0 });
        let mut rng = ScriptedRandom::constant(0.99);

        let outcome = tick(&mut state, 16.0, &mut rng);
        assert_eq!(outcome.collided_with, Some(9));
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_collision_uses_positions_from_frame_start() {
        let mut state = GameState::default();
        let mut rng = ScriptedRandom::constant(0.99);
        // Right edge of the player is 90; after this frame's scroll the
        // obstacle's left edge reaches 89 and overlaps, but the check sees 94.
        state.obstacles.push(Obstacle { id: 1, x: 94.0, width: 30.0, height: 60.0 });

        let outcome = tick(&mut state, 16.0, &mut rng);
        assert_eq!(outcome.collided_with, None);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.obstacles[0].x, 89.0);

        let outcome = tick(&mut state, 16.0, &mut rng);
        assert_eq!(outcome.collided_with, Some(1));
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = GameState::default();
        state.phase = GamePhase::GameOver;
        state.score = 55;
        state.obstacles.push(Obstacle { id: 1, x: 300.0, width: 30.0, height: 60.0 });
        let mut rng = ScriptedRandom::constant(0.0);

        for _ in 0..5 {
            assert_eq!(tick(&mut state, 500.0, &mut rng), TickOutcome::default());
        }
        assert_eq!(state.score, 55);
        assert_eq!(state.obstacles[0].x, 300.0);
        assert_eq!(state.spawn_timer_ms, 0.0);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut state = GameState::default();
        let mut rng = ScriptedRandom::constant(0.99);
        apply_intent(&mut state, Intent::Jump);

        let mut min_y = state.player.y;
        let mut frames = 0;
        loop {
            tick(&mut state, 16.0, &mut rng);
            frames += 1;
            min_y = min_y.min(state.player.y);
            if !state.player.airborne {
                break;
            }
            assert!(frames < 100, "player never landed");
        }
        assert!(min_y < 300.0);
        assert_eq!(state.player.y, 360.0);
        assert_eq!(state.player.velocity_y, 0.0);
    }

    #[test]
    fn test_spawn_scrolls_from_next_frame() {
        let mut state = GameState::default();
        state.spawn_timer_ms = 1990.0;
        let mut rng = ScriptedRandom::constant(0.0);

        let outcome = tick(&mut state, 16.0, &mut rng);
        assert_eq!(outcome.spawned, Some(1));
        assert_eq!(state.obstacles[0].x, 800.0);
        assert_eq!(state.spawn_timer_ms, 0.0);

        tick(&mut state, 16.0, &mut rng);
        assert_eq!(state.obstacles[0].x, 795.0);
    }

    #[test]
    fn test_restart_after_crash() {
        let mut state = GameState::default();
        let mut rng = seeded(3);
        state.obstacles.push(Obstacle { id: 1, x: 60.0, width: 30.0, height: 60.0 });
        tick(&mut state, 300.0, &mut rng);
        assert!(state.is_over());
        assert_eq!(state.score, 3);

        apply_intent(&mut state, Intent::Restart);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.y, 360.0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::default();
        let mut state2 = GameState::default();
        let mut rng1 = seeded(99999);
        let mut rng2 = seeded(99999);

        for frame in 0..2000 {
            if frame % 37 == 0 {
                apply_intent(&mut state1, Intent::Jump);
                apply_intent(&mut state2, Intent::Jump);
            }
            tick(&mut state1, 16.7, &mut rng1);
            tick(&mut state2, 16.7, &mut rng2);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.obstacles, state2.obstacles);
        assert_eq!(state1.player, state2.player);
    }

    proptest! {
        #[test]
        fn prop_ground_clamp(y in 0.0f32..360.0, overshoot in 0.0f32..40.0) {
            let velocity_y = 360.0 - y + overshoot;
            prop_assume!(y + velocity_y >= 360.0);
            let mut state = GameState::default();
            state.player.y = y;
            state.player.velocity_y = velocity_y;
            state.player.airborne = true;
            let mut rng = ScriptedRandom::constant(0.99);

            tick(&mut state, 16.0, &mut rng);
            prop_assert_eq!(state.player.y, 360.0);
            prop_assert_eq!(state.player.velocity_y, 0.0);
            prop_assert!(!state.player.airborne);
        }

        #[test]
        fn prop_player_never_below_ground(seed in any::<u64>(), jumps in proptest::collection::vec(any::<bool>(), 1..300)) {
            let mut state = GameState::default();
            let mut rng = seeded(seed);
            for jump in jumps {
                if jump {
                    apply_intent(&mut state, Intent::Jump);
                }
                tick(&mut state, 16.0, &mut rng);
                prop_assert!(state.player.y + state.player.height <= state.tuning.ground_height);
            }
        }

        #[test]
        fn prop_score_monotonic(seed in any::<u64>(), deltas in proptest::collection::vec(-50.0f64..400.0, 1..300)) {
            let mut state = GameState::default();
            let mut rng = seeded(seed);
            let mut last = state.score;
            for delta in deltas {
                let was_over = state.is_over();
                tick(&mut state, delta, &mut rng);
                prop_assert!(state.score >= last);
                if was_over {
                    prop_assert_eq!(state.score, last);
                }
                last = state.score;
            }
        }
    }
}
