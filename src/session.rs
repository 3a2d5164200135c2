//! A mounted play session
//!
//! Owns the game state together with everything needed to drive it from the
//! outside: the RNG stream, the frame clock and the key bindings. The
//! platform layer only ever calls [`Session::key_down`], [`Session::frame`]
//! and [`Session::draw`].

use rand_pcg::Pcg32;

use crate::platform::keys::KeyBindings;
use crate::platform::time::FrameClock;
use crate::renderer::{Surface, draw_frame};
use crate::settings::{Palette, Settings};
use crate::sim::{GameState, Intent, RandomSource, TickOutcome, apply_intent, seeded, tick};
use crate::tuning::Tuning;

pub struct Session<R = Pcg32> {
    state: GameState,
    rng: R,
    clock: FrameClock,
    keys: KeyBindings,
}

impl Session<Pcg32> {
    /// Session seeded with a PCG stream
    pub fn new(tuning: Tuning, keys: KeyBindings, seed: u64) -> Self {
        log::info!("New session with seed {}", seed);
        Self::with_rng(tuning, keys, seeded(seed))
    }

    /// Session configured from player settings, falling back to `seed`
    /// when the settings do not pin one
    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        Self::new(
            settings.effective_tuning(),
            settings.keys.clone(),
            settings.seed.unwrap_or(seed),
        )
    }
}

impl<R: RandomSource> Session<R> {
    pub fn with_rng(tuning: Tuning, keys: KeyBindings, rng: R) -> Self {
        Self {
            state: GameState::new(tuning),
            rng,
            clock: FrameClock::default(),
            keys,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the key is one this session reacts to
    pub fn is_bound(&self, key: &str) -> bool {
        self.keys.is_jump(key)
    }

    /// Handle a key press; returns the intent that took effect, if any
    pub fn key_down(&mut self, key: &str) -> Option<Intent> {
        if !self.is_bound(key) {
            log::trace!("Ignoring key {:?}", key);
            return None;
        }
        let intent = Intent::for_jump_key(self.state.phase);
        apply_intent(&mut self.state, intent).then_some(intent)
    }

    /// Step the simulation for an animation-frame timestamp (ms)
    pub fn frame(&mut self, timestamp_ms: f64) -> TickOutcome {
        let delta_ms = self.clock.delta(timestamp_ms);
        tick(&mut self.state, delta_ms, &mut self.rng)
    }

    /// Draw the current state
    pub fn draw<S: Surface>(&self, surface: &mut S, palette: &Palette) {
        draw_frame(surface, &self.state, palette);
    }

    /// Let the bot press the jump key when it wants to
    pub fn autopilot(&mut self) -> bool {
        crate::sim::autopilot::drive(&mut self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::RecordingSurface;
    use crate::sim::{GamePhase, Obstacle, ScriptedRandom};

    fn scripted_session(draw: f64) -> Session<ScriptedRandom> {
        Session::with_rng(
            Tuning::default(),
            KeyBindings::default(),
            ScriptedRandom::constant(draw),
        )
    }

    #[test]
    fn test_ten_quiet_frames() {
        let mut session = scripted_session(0.99);
        for i in 0..10 {
            session.frame(1000.0 + 16.0 * i as f64);
        }
        let state = session.state();
        assert_eq!(state.player.y, 360.0);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        // First frame contributes nothing
        assert_eq!(state.spawn_timer_ms, 144.0);
    }

    #[test]
    fn test_only_jump_key_reacts() {
        let mut session = scripted_session(0.99);
        assert_eq!(session.key_down("Enter"), None);
        assert_eq!(session.key_down("ArrowDown"), None);
        assert!(!session.state().player.airborne);

        assert_eq!(session.key_down(" "), Some(Intent::Jump));
        assert!(session.state().player.airborne);
        // Already airborne
        assert_eq!(session.key_down(" "), None);
    }

    #[test]
    fn test_crash_then_restart_with_same_key() {
        let mut session = scripted_session(0.99);
        session.state.obstacles.push(Obstacle { id: 1, x: 60.0, width: 30.0, height: 60.0 });

        session.frame(0.0);
        session.frame(250.0);
        assert_eq!(session.state().phase, GamePhase::GameOver);
        let final_score = session.state().score;

        // Frames keep arriving but nothing changes
        session.frame(500.0);
        assert_eq!(session.state().score, final_score);

        assert_eq!(session.key_down(" "), Some(Intent::Restart));
        let state = session.state();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!((state.player.x, state.player.y), (50.0, 360.0));
    }

    #[test]
    fn test_draw_reflects_state() {
        let mut session = scripted_session(0.99);
        session.frame(0.0);
        session.frame(300.0);

        let mut surface = RecordingSurface::default();
        session.draw(&mut surface, &Palette::default());
        assert_eq!(surface.texts(), vec!["Score: 3"]);
    }

    #[test]
    fn test_settings_seed_wins() {
        let settings = Settings {
            seed: Some(5),
            ..Settings::default()
        };
        let mut a = Session::from_settings(&settings, 1);
        let mut b = Session::from_settings(&settings, 2);
        for i in 0..600 {
            a.frame(16.0 * i as f64);
            b.frame(16.0 * i as f64);
        }
        assert_eq!(a.state().obstacles, b.state().obstacles);
        assert!(!a.state().obstacles.is_empty());
    }

    #[test]
    fn test_autopilot_survives_a_while() {
        let mut session = Session::new(Tuning::default(), KeyBindings::default(), 2024);
        let mut spawned = 0;
        for i in 0..1200 {
            session.autopilot();
            if session.frame(16.0 * i as f64).spawned.is_some() {
                spawned += 1;
            }
        }
        assert!(spawned >= 5);
        assert!(!session.state().is_over());
        assert_eq!(session.state().frame_count, 1200);
    }
}
