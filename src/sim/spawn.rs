//! Obstacle spawning and scrolling

use super::rng::RandomSource;
use super::state::{GameState, Obstacle};
use crate::tuning::Tuning;

/// Roll this frame's spawn threshold in `[min_spacing, max_spacing)` ms
pub fn roll_threshold(tuning: &Tuning, rng: &mut impl RandomSource) -> f64 {
    tuning.min_spacing_ms + rng.next_unit() * (tuning.max_spacing_ms - tuning.min_spacing_ms)
}

/// The newest obstacle has scrolled far enough from the right edge
pub fn spacing_allows(obstacles: &[Obstacle], tuning: &Tuning) -> bool {
    match obstacles.last() {
        None => true,
        Some(last) => last.x < tuning.surface_width - tuning.min_distance_between_obstacles,
    }
}

/// Scroll every obstacle left and drop the ones fully off screen
///
/// Returns how many were removed. Order is preserved.
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, speed: f32) -> usize {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed;
    }
    let before = obstacles.len();
    obstacles.retain(|o| !o.is_off_screen());
    before - obstacles.len()
}

/// Spawn an obstacle at the right edge when the timer and spacing allow
///
/// A failed spacing check leaves the timer untouched so the spawn is
/// retried next frame. Returns the new obstacle's ID.
pub fn try_spawn(state: &mut GameState, rng: &mut impl RandomSource) -> Option<u32> {
    let threshold = roll_threshold(&state.tuning, rng);
    if state.spawn_timer_ms <= threshold || !spacing_allows(&state.obstacles, &state.tuning) {
        return None;
    }

    let width = rng.range(state.tuning.obstacle_min_width, state.tuning.obstacle_max_width);
    let height = rng.range(state.tuning.obstacle_min_height, state.tuning.obstacle_max_height);
    let id = state.next_obstacle_id();
    state.obstacles.push(Obstacle {
        id,
        x: state.tuning.surface_width,
        width,
        height,
    });
    state.spawn_timer_ms = 0.0;

    log::debug!(
        "Spawned obstacle {} ({:.0}x{:.0}) after {:.0}ms threshold",
        id,
        width,
        height,
        threshold
    );
    Some(id)
}
