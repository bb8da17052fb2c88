//! DS Pong - two-paddle volley on a fixed 256x192 sprite display
//!
//! Core modules:
//! - `sim`: Deterministic integer simulation (paddles, opponent AI, ball, scoring)
//! - `renderer`: Projection of the game state onto sprite draw calls
//! - `audio`: Fire-and-forget sound effect triggers
//! - `settings`: JSON configuration for the native driver
//! - `game`: Per-frame driver tying the three together

pub mod audio;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, AudioSink, SoundEffect};
pub use game::Game;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Display refresh rate the simulation is stepped at
    pub const FRAMES_PER_SECOND: u32 = 60;

    /// Play-field dimensions (the whole screen)
    pub const FIELD_WIDTH: i32 = 256;
    pub const FIELD_HEIGHT: i32 = 192;

    /// Paddles are square sprites
    pub const PADDLE_SIZE: i32 = 32;
    /// Vertical distance a paddle moves per frame
    pub const PADDLE_STEP: i32 = 2;

    /// Ball bounding box edge
    pub const BALL_SIZE: i32 = 8;
    /// Ball speed on each axis after a reset
    pub const BALL_SERVE_SPEED: i32 = 2;

    /// Transparent margin between the screen edge and the paddle graphic
    pub const PADDLE_INSET: i32 = 10;
    /// Visible width of the paddle graphic
    pub const PADDLE_FACE: i32 = 11;
}

/// Center an inner span inside an outer one.
///
/// Integer division truncates toward zero, so results differ from the
/// geometric center; positions and collision columns depend on this exact form.
#[inline]
pub const fn middle(outer: i32, inner: i32) -> i32 {
    ((outer - inner) / 2) / 2
}
