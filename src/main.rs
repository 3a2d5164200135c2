//! Dash Jump entry point
//!
//! On the web this mounts the game on `#canvas`; natively it runs a headless
//! session driven by the autopilot and reports how it went.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use dash_jump::Settings;
    use dash_jump::platform::web::{GameHandle, mount};

    thread_local! {
        static GAME: RefCell<Option<GameHandle>> = const { RefCell::new(None) };
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
        }

        log::info!("Dash Jump starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let handle = mount("canvas", &settings, seed)?;
        GAME.with(|g| *g.borrow_mut() = Some(handle));

        // Tear the loop down with the page
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            GAME.with(|g| g.borrow_mut().take());
        });
        window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        closure.forget();

        log::info!("Dash Jump running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dash_jump::session::Session;
    use dash_jump::{Settings, Tuning};

    env_logger::init();

    // Optional args: seed, frame count, tuning JSON file
    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(clock_seed);
    let frames = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(3600);
    let tuning_path = args.next();

    log::info!("Dash Jump (native) running {} headless frames", frames);
    log::info!("Browser build: run with `trunk serve`");

    let mut settings = Settings::load();
    if let Some(path) = tuning_path {
        match std::fs::read_to_string(&path) {
            Ok(json) => match Tuning::from_json(&json) {
                Ok(tuning) => settings.tuning = Some(tuning),
                Err(e) => log::warn!("{}: {}; using default tuning", path, e),
            },
            Err(e) => log::warn!("Cannot read {}: {}; using default tuning", path, e),
        }
    }
    let mut session = Session::from_settings(&settings, seed);

    // 60 Hz timestamps
    let mut spawned = 0u32;
    let mut culled = 0usize;
    for i in 0..frames {
        session.autopilot();
        let outcome = session.frame(i as f64 * 1000.0 / 60.0);
        spawned += outcome.spawned.is_some() as u32;
        culled += outcome.culled;
        if session.state().is_over() {
            break;
        }
    }

    let state = session.state();
    println!(
        "seed {}: {} after {} frames, score {}, {} obstacles spawned, {} cleared",
        seed,
        if state.is_over() { "crashed" } else { "survived" },
        state.frame_count,
        state.score,
        spawned,
        culled
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
