//! Game state and core simulation types
//!
//! All state needed to reproduce a run from its seed lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Lifecycle phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No run in progress; nothing advances, no perception is consumed
    Idle,
    /// Run in progress: ticking, perception consumed
    Active,
    /// Run ended; state is a frozen snapshot until the next start
    Terminated,
}

/// Complete game state (deterministic, serializable)
///
/// Owned exclusively by the scheduler and mutated only inside a tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Bird center, vertical axis (screen coordinates, down is positive)
    pub bird_y: f32,
    /// Vertical velocity per tick (down is positive)
    pub bird_vel: f32,
    /// Pipe leading (left) edge
    pub pipe_x: f32,
    /// Top of the pipe gap
    pub gap_top: f32,
    /// Completed pipe recycles this run
    pub score: u32,
    /// Simulation tick counter
    pub ticks: u64,
    /// Current phase
    pub phase: Phase,
    /// Gap-offset RNG, advanced only on recycle
    pub rng: Pcg32,
}

impl GameState {
    /// Start a new run: bird centered, pipe entering from the right edge
    /// with a freshly drawn gap, score zero, phase Active.
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let gap_top = draw_gap_top(&mut rng, tuning);
        Self {
            seed,
            bird_y: tuning.screen_height / 2.0,
            bird_vel: 0.0,
            pipe_x: tuning.screen_width,
            gap_top,
            score: 0,
            ticks: 0,
            phase: Phase::Active,
            rng,
        }
    }

    /// Placeholder state before the first start. Geometry mirrors a fresh
    /// run so a renderer can draw the waiting screen, but nothing advances.
    pub fn idle(tuning: &Tuning) -> Self {
        let mut state = Self::new(0, tuning);
        state.phase = Phase::Idle;
        state
    }

    /// Read-only copy for the renderer and score reporting
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            bird_y: self.bird_y,
            bird_vel: self.bird_vel,
            pipe_x: self.pipe_x,
            gap_top: self.gap_top,
            score: self.score,
            ticks: self.ticks,
            phase: self.phase,
        }
    }
}

/// Draw a gap-top offset uniformly from `[0, screen_height - pipe_gap)`
pub(crate) fn draw_gap_top(rng: &mut Pcg32, tuning: &Tuning) -> f32 {
    use rand::Rng;
    rng.random_range(0.0..tuning.max_gap_top())
}

/// Per-tick read-only view handed to external renderers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub bird_y: f32,
    pub bird_vel: f32,
    pub pipe_x: f32,
    pub gap_top: f32,
    pub score: u32,
    pub ticks: u64,
    pub phase: Phase,
}
