//! Pong - two paddles, one ball, one rectangular field
//!
//! Core modules:
//! - `sim`: Per-frame simulation (paddle clamp, ball integration, scoring)
//! - `platform`: Key state mapping and fixed-cadence frame clock
//! - `renderer`: Read-only scene description for the drawing backend
//! - `settings`: Presentation settings (colors, fonts, key bindings)

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{KeyBindings, Settings};

/// Game configuration constants
pub mod consts {
    /// Field dimensions (origin top-left, y grows downward)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 450.0;

    /// Target simulation rate
    pub const TICKS_PER_SECOND: u32 = 60;
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame the clock will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Vertical displacement per tick while a key is held
    pub const PADDLE_SPEED: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_START_SPEED: f32 = 8.0;
    /// Added to ball speed on every paddle hit
    pub const PADDLE_SPEEDUP: f32 = 0.5;

    /// Range each reset direction component is drawn from
    pub const RESET_DIR_MIN: f32 = 0.3;
    pub const RESET_DIR_MAX: f32 = 0.7;
}
