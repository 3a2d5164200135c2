//! Keyboard bindings
//!
//! Keys are matched on `KeyboardEvent.key` values (`" "`, `"ArrowUp"`, ...).

use serde::{Deserialize, Serialize};

/// Keys that act as the jump key (and restart after game over)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub jump: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            jump: vec![" ".to_string()],
        }
    }
}

impl KeyBindings {
    /// Whether a key press is bound to jump; every other key is ignored
    pub fn is_jump(&self, key: &str) -> bool {
        self.jump.iter().any(|k| k == key || (k.len() > 1 && k.eq_ignore_ascii_case(key)))
    }
}
