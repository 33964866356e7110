//! Collision detection over axis-aligned geometry
//!
//! Pure predicate over post-step state plus fixed constants. The boundary
//! convention is strict inequality on box edges: a bird exactly touching a
//! pipe or bound is NOT a collision. Tests depend on this staying exact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::tuning::Tuning;

/// First terminal contact found this tick. All variants map to the same
/// terminal outcome downstream; the distinction exists for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    TopPipe,
    BottomPipe,
    Floor,
    Ceiling,
}

/// Axis-aligned box, derived each tick and never stored
#[derive(Debug, Clone, Copy)]
struct Aabb {
    min: Vec2,
    max: Vec2,
}

impl Aabb {
    fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        let half = Vec2::new(width / 2.0, height / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap: shared edges do not count
    fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Decide terminal contact for the current geometry.
///
/// Checks, in order: top pipe segment, bottom pipe segment, floor, ceiling.
/// Any one is sufficient.
pub fn check_collision(state: &GameState, tuning: &Tuning) -> Option<Contact> {
    debug_assert!(
        state.gap_top >= 0.0 && state.gap_top + tuning.pipe_gap <= tuning.screen_height,
        "gap escaped its valid range"
    );

    let bird = Aabb::from_center(
        Vec2::new(tuning.bird_x, state.bird_y),
        tuning.bird_width,
        tuning.bird_height,
    );

    // Pipe segments span the full screen height outside the gap
    let top_pipe = Aabb {
        min: Vec2::new(state.pipe_x, 0.0),
        max: Vec2::new(state.pipe_x + tuning.pipe_width, state.gap_top),
    };
    let bottom_pipe = Aabb {
        min: Vec2::new(state.pipe_x, state.gap_top + tuning.pipe_gap),
        max: Vec2::new(state.pipe_x + tuning.pipe_width, tuning.screen_height),
    };

    if bird.overlaps(&top_pipe) {
        return Some(Contact::TopPipe);
    }
    if bird.overlaps(&bottom_pipe) {
        return Some(Contact::BottomPipe);
    }
    if bird.max.y > tuning.screen_height {
        return Some(Contact::Floor);
    }
    if bird.min.y < 0.0 {
        return Some(Contact::Ceiling);
    }
    None
}
