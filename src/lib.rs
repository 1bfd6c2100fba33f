//! Brickfall - a browser-playable Breakout/block-breaker
//!
//! Core modules:
//! - `sim`: Per-frame simulation (collisions, score/lives/level, events)
//! - `renderer`: Canvas-2D rendering (wasm only)
//! - `settings`: User-tunable options persisted to LocalStorage
//! - `highscores`: Top-10 leaderboard persisted to LocalStorage

pub mod highscores;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical canvas units)
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Serve velocity, also used on every respawn
    pub const BALL_START_VEL: (f32, f32) = (2.0, -2.0);
    /// Velocity multiplier applied to both components on level clear
    pub const LEVEL_SPEEDUP: f32 = 1.2;

    /// Paddle defaults - width is user-configurable, height is not
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_DEFAULT_WIDTH: f32 = 75.0;
    pub const PADDLE_MIN_WIDTH: f32 = 20.0;
    pub const PADDLE_MAX_WIDTH: f32 = 300.0;
    /// Horizontal paddle movement per frame while a key is held
    pub const PADDLE_STEP: f32 = 7.0;

    /// Brick grid layout
    pub const BRICK_COLUMNS: usize = 5;
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;

    /// Session counters
    pub const POINTS_PER_BRICK: u32 = 10;
    pub const STARTING_LIVES: u32 = 3;
}
