//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`] so tests and the demo binary
//! can reshape the game without touching simulation code. Validation happens
//! once at startup; per-tick code may assume a validated tuning.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Invalid configuration detected at startup
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("pipe gap ({gap}) does not fit the screen height ({screen})")]
    GapTooLarge { gap: f32, screen: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("smile threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f32),
    #[error("{0} period must be non-zero")]
    ZeroPeriod(&'static str),
}

/// Complete gameplay tuning (serializable, validated at startup)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub bird_x: f32,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    pub gravity_per_tick: f32,
    pub jump_impulse: f32,
    pub smile_threshold: f32,
    pub jump_cooldown: Duration,
    pub tick_period: Duration,
    pub perception_poll: Duration,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            bird_x: BIRD_X,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            gravity_per_tick: GRAVITY_PER_TICK,
            jump_impulse: JUMP_IMPULSE,
            smile_threshold: SMILE_THRESHOLD,
            jump_cooldown: JUMP_COOLDOWN,
            tick_period: TICK_PERIOD,
            perception_poll: PERCEPTION_POLL,
        }
    }
}

impl Tuning {
    /// Validate geometry and timing. Called once when an engine is built;
    /// invalid values are rejected here rather than clamped per tick.
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
            ("gravity_per_tick", self.gravity_per_tick),
            ("jump_impulse", self.jump_impulse),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { name, value });
            }
        }
        if self.pipe_gap >= self.screen_height {
            return Err(TuningError::GapTooLarge {
                gap: self.pipe_gap,
                screen: self.screen_height,
            });
        }
        if !(0.0..=1.0).contains(&self.smile_threshold) {
            return Err(TuningError::ThresholdOutOfRange(self.smile_threshold));
        }
        if self.tick_period.is_zero() {
            return Err(TuningError::ZeroPeriod("tick"));
        }
        if self.perception_poll.is_zero() {
            return Err(TuningError::ZeroPeriod("perception poll"));
        }
        Ok(())
    }

    /// Largest gap-top offset a recycle may draw
    pub fn max_gap_top(&self) -> f32 {
        self.screen_height - self.pipe_gap
    }
}
