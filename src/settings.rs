//! Presentation settings and key bindings
//!
//! None of these affect simulation rules; field size and speeds are
//! compile-time constants in `consts`.

use serde::{Deserialize, Serialize};

use crate::platform::Key;

/// Up/down keys for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left_up: Key,
    pub left_down: Key,
    pub right_up: Key,
    pub right_down: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: Key::W,
            left_down: Key::S,
            right_up: Key::ArrowUp,
            right_down: Key::ArrowDown,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title and the text drawn at center field
    pub title: String,
    pub title_font_size: f32,
    pub score_font_size: f32,

    /// Clear color (RGBA, 0-255)
    pub background: [u8; 4],
    /// Color for paddles, ball and text
    pub foreground: [u8; 4],

    /// Circle tessellation for the ball
    pub ball_segments: u32,

    pub keys: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "PONG".to_string(),
            title_font_size: 42.0,
            score_font_size: 60.0,

            background: [8, 33, 25, 255],
            foreground: [158, 183, 175, 255],

            ball_segments: 24,

            keys: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Convert an 8-bit RGBA color to normalized floats
pub fn rgba_to_f32(color: [u8; 4]) -> [f32; 4] {
    color.map(|c| c as f32 / 255.0)
}
