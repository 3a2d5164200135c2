//! Game settings and preferences
//!
//! Read once from LocalStorage at startup; the game never writes them back.

use serde::{Deserialize, Serialize};

use crate::platform::keys::KeyBindings;
use crate::tuning::Tuning;

/// Fill colors for the canvas (any CSS color string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub ground: String,
    pub obstacle: String,
    pub player: String,
    pub text: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ground: "#333333".to_string(),
            obstacle: "#e74c3c".to_string(),
            player: "#3498db".to_string(),
            text: "#111111".to_string(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Jump/restart keys
    pub keys: KeyBindings,
    /// Canvas colors
    pub palette: Palette,
    /// Fixed RNG seed for reproducible runs (None = seed from the clock)
    pub seed: Option<u64>,
    /// Balance override; invalid values fall back to defaults
    pub tuning: Option<Tuning>,
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "dash_jump_settings";

    /// Parse settings JSON, falling back to defaults on any error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Tuning to play with: the override when it validates, else defaults
    pub fn effective_tuning(&self) -> Tuning {
        match &self.tuning {
            Some(tuning) => match tuning.validate() {
                Ok(()) => tuning.clone(),
                Err(e) => {
                    log::warn!("{}; using default tuning", e);
                    Tuning::default()
                }
            },
            None => Tuning::default(),
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native builds have no LocalStorage
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42 }"#);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.keys, KeyBindings::default());
        assert_eq!(settings.palette, Palette::default());
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let settings = Settings::from_json("[1, 2");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_tuning_override_falls_back() {
        let settings = Settings::from_json(r#"{ "tuning": { "gravity": -1.0 } }"#);
        assert!(settings.tuning.is_some());
        assert_eq!(settings.effective_tuning(), Tuning::default());

        let settings = Settings::from_json(r#"{ "tuning": { "obstacle_speed": 8.0 } }"#);
        assert_eq!(settings.effective_tuning().obstacle_speed, 8.0);
    }

    #[test]
    fn test_keys_and_palette_override() {
        let settings = Settings::from_json(
            r##"{ "keys": { "jump": ["ArrowUp"] }, "palette": { "player": "#ffffff" } }"##,
        );
        assert_eq!(settings.keys.jump, vec!["ArrowUp".to_string()]);
        assert_eq!(settings.palette.player, "#ffffff");
        assert_eq!(settings.palette.ground, Palette::default().ground);
    }
}
