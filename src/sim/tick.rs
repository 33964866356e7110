//! Fixed timestep physics
//!
//! One logical step per scheduler tick. Deliberately wall-clock independent:
//! velocities are per tick, so a run is exactly reproducible from its seed
//! and jump sequence.

use super::state::{GameState, Phase, draw_gap_top};
use crate::tuning::Tuning;

/// Advance the simulation by one tick.
///
/// Gravity is unconditional. A jump request overrides the velocity for this
/// tick (a reset to `-jump_impulse`, not an additive force) so jumping
/// cancels any accumulated fall. The pipe advances every tick; crossing the
/// left boundary recycles it to the right edge with a new gap and scores
/// exactly one point, regardless of any collision this same tick.
pub fn step(state: &mut GameState, jump_requested: bool, tuning: &Tuning) {
    debug_assert_eq!(state.phase, Phase::Active);
    debug_assert!(tuning.max_gap_top() > 0.0);

    state.ticks += 1;

    state.bird_vel += tuning.gravity_per_tick;
    if jump_requested {
        state.bird_vel = -tuning.jump_impulse;
    }
    state.bird_y += state.bird_vel;

    state.pipe_x -= tuning.pipe_speed;
    if state.pipe_x < -tuning.pipe_width {
        state.pipe_x = tuning.screen_width;
        state.gap_top = draw_gap_top(&mut state.rng, tuning);
        state.score += 1;
        log::debug!(
            "pipe recycled: score={} gap_top={:.1}",
            state.score,
            state.gap_top
        );
    }
}
