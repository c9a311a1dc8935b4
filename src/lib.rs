//! Heart Flap - A one-button scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, game state)
//! - `renderer`: Render sinks that consume per-tick snapshots
//! - `platform`: Input sources
//! - `tuning`: Data-driven game balance
//! - `game`: Driver that wires the collaborators around a session

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{InvariantViolation, TuningError};
pub use game::Game;
pub use tuning::Tuning;

/// Game configuration constants
///
/// These are the defaults baked into [`Tuning::default`]; the simulation
/// itself only reads values through a `Tuning`.
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the driver will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions (y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 900.0;
    /// Vertical velocity set by a flap (negative = up)
    pub const FLAP_IMPULSE: f32 = -300.0;
    /// Horizontal obstacle velocity (negative = leftward)
    pub const SCROLL_SPEED: f32 = -200.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;

    /// Obstacle spawning
    pub const SPAWN_INTERVAL_MS: u32 = 1500;
    pub const GAP_HEIGHT: f32 = 160.0;
    pub const GAP_CENTER_MIN: i32 = 150;
    pub const GAP_CENTER_MAX: i32 = 450;
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const ZONE_WIDTH: f32 = 2.0;

    /// Cosmetic tilt range (radians)
    pub const TILT_MIN: f32 = -0.4;
    pub const TILT_MAX: f32 = 0.6;
    /// Vertical speed that maps to one radian of tilt
    pub const TILT_SPEED_SCALE: f32 = 600.0;
}

/// Cosmetic player tilt derived from vertical velocity
///
/// Renderers use this to nose the player down while falling. It never feeds
/// back into the simulation.
#[inline]
pub fn tilt_for_velocity(vel_y: f32) -> f32 {
    use consts::*;
    (vel_y / TILT_SPEED_SCALE).clamp(TILT_MIN, TILT_MAX)
}

/// Convert a millisecond count to seconds
#[inline]
pub fn ms_to_secs(ms: u32) -> f64 {
    f64::from(ms) / 1000.0
}
