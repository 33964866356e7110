//! Grinflap - a smile-controlled obstacle game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `control`: Jump signal handoff and smile debouncing
//! - `perception`: Classifier sample contract consumed by the control loop
//! - `engine`: Fixed-tick scheduler and lifecycle state machine
//! - `runner`: Threaded driver wiring perception to the scheduler
//! - `leaderboard`: Local top-score table
//! - `tuning`: Data-driven game balance with startup validation

pub mod control;
pub mod engine;
pub mod leaderboard;
pub mod perception;
pub mod runner;
pub mod sim;
pub mod tuning;

pub use engine::{Engine, ScoreSink};
pub use leaderboard::Leaderboard;
pub use tuning::Tuning;

/// Game configuration constants
///
/// Velocities are per logical tick, not per second: the simulation is a
/// discrete-time system advanced one step per scheduler tick.
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation tick period (50 Hz)
    pub const TICK_PERIOD: Duration = Duration::from_millis(20);

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 500.0;
    pub const SCREEN_HEIGHT: f32 = 500.0;

    /// Bird box
    pub const BIRD_WIDTH: f32 = 40.0;
    pub const BIRD_HEIGHT: f32 = 30.0;
    /// The bird never moves horizontally; its center stays on this column
    pub const BIRD_X: f32 = SCREEN_WIDTH / 4.0;

    /// Pipe geometry
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 150.0;
    /// Horizontal pipe advance per tick
    pub const PIPE_SPEED: f32 = 3.0;

    /// Downward velocity gained per tick
    pub const GRAVITY_PER_TICK: f32 = 0.25;
    /// Upward velocity the bird is reset to on a jump (positive magnitude)
    pub const JUMP_IMPULSE: f32 = 6.0;

    /// Smile confidence above which a sample qualifies as a jump request
    pub const SMILE_THRESHOLD: f32 = 0.30;
    /// Minimum spacing between accepted jump requests
    pub const JUMP_COOLDOWN: Duration = Duration::from_millis(300);
    /// Nominal perception poll period
    pub const PERCEPTION_POLL: Duration = Duration::from_millis(80);
}
