//! Platform abstraction layer
//!
//! Handles browser concerns for:
//! - Time (animation-frame timestamps to frame deltas)
//! - Input (key bindings)
//! - Mounting on a canvas, with teardown (wasm32 only)

pub mod keys;
pub mod time;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use keys::KeyBindings;
pub use time::FrameClock;
