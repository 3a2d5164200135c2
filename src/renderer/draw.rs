//! Draws a game state onto a [`Surface`]

use super::surface::Surface;
use crate::settings::Palette;
use crate::sim::{GamePhase, GameState};

/// Thickness of the ground line (pixels)
pub const GROUND_LINE_THICKNESS: f64 = 2.0;
/// Score text placement (top-left)
pub const SCORE_POS: (f64, f64) = (10.0, 30.0);
pub const SCORE_FONT: &str = "20px sans-serif";

/// Redraw the whole frame
///
/// The score is only drawn while running; after game over the page overlay
/// shows the final score instead.
pub fn draw_frame<S: Surface>(surface: &mut S, state: &GameState, palette: &Palette) {
    let tuning = &state.tuning;
    let width = tuning.surface_width as f64;
    let ground = tuning.ground_height as f64;

    surface.clear(0.0, 0.0, width, tuning.surface_height as f64);

    surface.set_fill(&palette.ground);
    surface.fill_rect(0.0, ground, width, GROUND_LINE_THICKNESS);

    surface.set_fill(&palette.obstacle);
    for obstacle in &state.obstacles {
        let r = obstacle.rect(tuning.ground_height);
        surface.fill_rect(
            r.left() as f64,
            r.top() as f64,
            r.size.x as f64,
            r.size.y as f64,
        );
    }

    let p = state.player.rect();
    surface.set_fill(&palette.player);
    surface.fill_rect(p.left() as f64, p.top() as f64, p.size.x as f64, p.size.y as f64);

    if state.phase == GamePhase::Running {
        surface.set_fill(&palette.text);
        surface.set_font(SCORE_FONT);
        surface.fill_text(&format!("Score: {}", state.score), SCORE_POS.0, SCORE_POS.1);
    }
}
