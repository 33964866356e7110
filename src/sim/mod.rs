//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical timestep only (one step per scheduler tick)
//! - Seeded RNG only
//! - No timers, rendering, or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Contact, check_collision};
pub use state::{FrameSnapshot, GameState, Phase};
pub use tick::step;
