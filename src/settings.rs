//! Game settings and preferences
//!
//! Paddle width, color theme, and input options. Persisted separately from
//! high scores in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::{PADDLE_DEFAULT_WIDTH, PADDLE_MAX_WIDTH, PADDLE_MIN_WIDTH};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Paddle width in field units (clamped to 20-300)
    pub paddle_width: f32,

    // === Theme (CSS color strings fed straight to the canvas) ===
    pub ball_color: String,
    pub paddle_color: String,
    /// One color per brick row, cycling if there are more rows than colors
    pub brick_colors: Vec<String>,
    pub background_color: String,

    // === Input ===
    /// Enable touch drag to move the paddle
    pub touch_controls: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_DEFAULT_WIDTH,
            ball_color: "#FF0000".to_string(),
            paddle_color: "#00FF00".to_string(),
            brick_colors: vec![
                "#F00".to_string(),
                "#0F0".to_string(),
                "#00F".to_string(),
                "#FF0".to_string(),
            ],
            background_color: "#000000".to_string(),
            touch_controls: true,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "brickfall_settings";

    /// Paddle width with the configured bounds applied
    pub fn effective_paddle_width(&self) -> f32 {
        self.paddle_width.clamp(PADDLE_MIN_WIDTH, PADDLE_MAX_WIDTH)
    }

    /// Color for a given brick row
    pub fn brick_color(&self, row: usize) -> &str {
        if self.brick_colors.is_empty() {
            return &self.paddle_color;
        }
        &self.brick_colors[row % self.brick_colors.len()]
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
