//! BlockBlock - dodge the blocks sliding in from the edges
//!
//! Core modules:
//! - `clock`: Frame-driven scheduler (intervals and deferred tasks)
//! - `sim`: Deterministic entity kinematics, spawning and bounds
//! - `game`: The controller that composes a frame
//! - `renderer`: Canvas 2D drawing behind a `Surface` trait
//! - `input`: Keyboard mapping
//! - `config`: Construction options

pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod sim;

pub use clock::{CallbackResult, Clock, FrameTime, Timers};
pub use config::GameConfig;
pub use error::ConfigError;
pub use game::{BlockBlock, Stats};

/// Game configuration constants
pub mod consts {
    /// Default canvas size (pixels)
    pub const DEFAULT_WIDTH: u32 = 720;
    pub const DEFAULT_HEIGHT: u32 = 480;

    /// Player square side (pixels)
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Block side (pixels)
    pub const BLOCK_SIZE: f32 = 40.0;
    /// Block travel speed (pixels per ms)
    pub const BLOCK_SPEED: f32 = 0.25;
    /// How far past an edge a block may go before it is culled
    pub const CULL_MARGIN: f32 = BLOCK_SIZE;

    /// Jump apex height (pixels)
    pub const JUMP_HEIGHT: f32 = 100.0;
    /// Jump time scale (per ms); airtime is 2·√H / S
    pub const JUMP_TIME_SCALE: f32 = 0.035;

    /// How long a facing change sticks before reverting (ms)
    pub const FACING_REVERT_MS: f64 = 100.0;
    /// Time between block spawns (ms)
    pub const SPAWN_INTERVAL_MS: f64 = 500.0;
}
