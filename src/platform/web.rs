//! Browser mounting: canvas, animation frames and keyboard
//!
//! [`mount`] wires a [`Session`] to a canvas element. The returned
//! [`GameHandle`] owns the frame callback and the keydown listener;
//! unmounting (or dropping the handle) cancels the pending frame request and
//! removes the listener so nothing keeps firing against a stale canvas.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, Window};

use crate::session::Session;
use crate::settings::{Palette, Settings};
use crate::sim::{GamePhase, GameState};

type FrameCallback = Closure<dyn FnMut(f64)>;
type KeyCallback = Closure<dyn FnMut(KeyboardEvent)>;

/// Everything a frame step touches
struct Game {
    session: Session,
    ctx: CanvasRenderingContext2d,
    palette: Palette,
    document: Option<Document>,
    last_phase: GamePhase,
    /// Pending `requestAnimationFrame` id
    pending: Option<i32>,
    mounted: bool,
}

impl Game {
    /// One animation frame: simulate, draw, refresh the page overlay
    fn step(&mut self, time: f64) {
        let outcome = self.session.frame(time);
        if outcome.spawned.is_some() || outcome.culled > 0 {
            log::trace!("Frame at {:.1}ms: {:?}", time, outcome);
        }

        self.session.draw(&mut self.ctx, &self.palette);

        let phase = self.session.state().phase;
        if phase != self.last_phase {
            if let Some(document) = &self.document {
                update_overlay(document, self.session.state());
            }
            self.last_phase = phase;
        }
    }
}

/// Show or hide the game-over overlay (`#game-over`, `#final-score`)
fn update_overlay(document: &Document, state: &GameState) {
    if let Some(el) = document.get_element_by_id("game-over") {
        if state.phase == GamePhase::GameOver {
            let _ = el.set_attribute("class", "");
            if let Some(score_el) = document.get_element_by_id("final-score") {
                score_el.set_text_content(Some(&state.score.to_string()));
            }
        } else {
            let _ = el.set_attribute("class", "hidden");
        }
    }
}

/// Hide the page's loading indicator (`#loading`), if it has one
fn hide_loading(document: &Document) {
    if let Some(loading) = document.get_element_by_id("loading") {
        let _ = loading.set_attribute("class", "hidden");
    }
}

/// A game mounted on a canvas; unmounts on drop
#[wasm_bindgen]
pub struct GameHandle {
    window: Window,
    game: Rc<RefCell<Game>>,
    on_frame: Rc<RefCell<Option<FrameCallback>>>,
    on_key: Option<KeyCallback>,
}

#[wasm_bindgen]
impl GameHandle {
    /// Stop the loop: cancel the pending frame and detach the key listener
    pub fn unmount(&mut self) {
        let mut game = self.game.borrow_mut();
        if !game.mounted {
            return;
        }
        game.mounted = false;

        if let Some(id) = game.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
        if let Some(on_key) = self.on_key.take() {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove keydown listener: {:?}", e);
            }
        }
        // Breaks the callback's reference to itself
        self.on_frame.borrow_mut().take();

        log::info!("Game unmounted (score {})", game.session.state().score);
    }

    /// Current score
    pub fn score(&self) -> f64 {
        self.game.borrow().session.state().score as f64
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.borrow().session.state().is_over()
    }
}

impl Drop for GameHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount with settings from LocalStorage, seeded from the clock
#[wasm_bindgen(js_name = mount)]
pub fn mount_js(canvas_id: &str) -> Result<GameHandle, JsValue> {
    mount(canvas_id, &Settings::load(), js_sys::Date::now() as u64)
}

/// Mount a new session on the canvas with the given element id
pub fn mount(canvas_id: &str, settings: &Settings, seed: u64) -> Result<GameHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document();

    let canvas: HtmlCanvasElement = document
        .as_ref()
        .and_then(|d| d.get_element_by_id(canvas_id))
        .ok_or_else(|| JsValue::from_str(&format!("no element #{}", canvas_id)))?
        .dyn_into()?;

    let session = Session::from_settings(settings, seed);
    let tuning = &session.state().tuning;
    canvas.set_width(tuning.surface_width as u32);
    canvas.set_height(tuning.surface_height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    if let Some(document) = &document {
        hide_loading(document);
        update_overlay(document, session.state());
    }

    let game = Rc::new(RefCell::new(Game {
        session,
        ctx,
        palette: settings.palette.clone(),
        document,
        last_phase: GamePhase::Running,
        pending: None,
        mounted: true,
    }));

    // Frame loop: step, then request the next frame for as long as we stay mounted
    let on_frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    {
        let game = game.clone();
        let window = window.clone();
        let this = on_frame.clone();
        *on_frame.borrow_mut() = Some(Closure::new(move |time: f64| {
            let mut g = game.borrow_mut();
            g.pending = None;
            if !g.mounted {
                return;
            }
            g.step(time);

            if let Some(callback) = this.borrow().as_ref() {
                match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    Ok(id) => g.pending = Some(id),
                    Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
                }
            }
        }));
    }

    // Keyboard
    let on_key: KeyCallback = {
        let game = game.clone();
        Closure::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            let key = event.key();
            if !g.session.is_bound(&key) {
                return;
            }
            // Keep space from scrolling the page
            event.prevent_default();
            if let Some(intent) = g.session.key_down(&key) {
                log::debug!("Key {:?} -> {:?}", key, intent);
            }
        })
    };
    window.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;

    if let Some(callback) = on_frame.borrow().as_ref() {
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        game.borrow_mut().pending = Some(id);
    }

    log::info!("Game mounted on #{}", canvas_id);

    Ok(GameHandle {
        window,
        game,
        on_frame,
        on_key: Some(on_key),
    })
}
