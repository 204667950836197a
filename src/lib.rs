//! Flappy Pipes - a gapped-pipe arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `clock`: Frame-time to fixed-step conversion
//! - `error`: Configuration errors
//!
//! Rendering, audio and input binding are left to the caller: it feeds
//! `sim::TickInput`s in, reads `sim::Snapshot`s out and reacts to
//! `sim::GameEvent`s.

pub mod clock;
pub mod error;
pub mod sim;
pub mod tuning;

pub use clock::FixedStep;
pub use error::ConfigError;
pub use tuning::{GapPolicy, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Avatar defaults (units per tick)
    pub const AVATAR_X: f32 = 100.0;
    pub const AVATAR_RADIUS: f32 = 20.0;
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_STRENGTH: f32 = -7.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const OBSTACLE_COUNT: usize = 3;
    pub const GAP_MARGIN: f32 = 50.0;
}
