//! Classifier sample contract
//!
//! The camera, model loading, and actual classification live outside this
//! crate. The core consumes an abstract stream of smile-confidence samples:
//! one sample per poll, maybe none (no face this frame), maybe a transient
//! error. Errors are never fatal to the game loop.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Detected face bounding box, in video-frame coordinates.
///
/// Carried along for the best-effort visual echo; gameplay ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One classification result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmileSample {
    /// Smile confidence in `[0, 1]`
    pub confidence: f32,
    pub region: Option<FaceRegion>,
}

/// A single classification call failed. The perception loop drops the frame
/// and continues on the next poll; no retry or backoff is needed since the
/// loop is already periodic.
#[derive(Debug, Error)]
pub enum PerceptionError {
    #[error("classifier model not ready")]
    NotReady,
    #[error("classification failed: {0}")]
    Transient(String),
}

/// Source of classification samples.
///
/// Called at the perception poll rate, which is independent of the tick
/// rate. Implementations must return within a bounded time: a stalled
/// sensor may return `Ok(None)` or an error, never block indefinitely.
pub trait PerceptionSource {
    fn next_sample(&mut self) -> Result<Option<SmileSample>, PerceptionError>;
}

/// Replays a fixed script of classification results. Test double, also
/// handy for reproducing field reports.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    frames: VecDeque<Result<Option<SmileSample>, PerceptionError>>,
}

impl ScriptedSource {
    pub fn new(
        frames: impl IntoIterator<Item = Result<Option<SmileSample>, PerceptionError>>,
    ) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Script that smiles with the given confidence on every poll.
    pub fn constant_smile(confidence: f32, polls: usize) -> Self {
        Self::new((0..polls).map(|_| {
            Ok(Some(SmileSample {
                confidence,
                region: None,
            }))
        }))
    }
}

impl PerceptionSource for ScriptedSource {
    /// Yields the next scripted frame, then "no face" forever.
    fn next_sample(&mut self) -> Result<Option<SmileSample>, PerceptionError> {
        self.frames.pop_front().unwrap_or(Ok(None))
    }
}

/// Demo source: smiles briefly at a fixed poll cadence, otherwise deadpan.
/// Lets the binary play itself without a camera.
#[derive(Debug)]
pub struct SyntheticSmiler {
    poll: u64,
    /// Smile every this many polls
    period: u64,
}

impl SyntheticSmiler {
    pub fn new(period: u64) -> Self {
        Self {
            poll: 0,
            period: period.max(1),
        }
    }
}

impl PerceptionSource for SyntheticSmiler {
    fn next_sample(&mut self) -> Result<Option<SmileSample>, PerceptionError> {
        self.poll += 1;
        let confidence = if self.poll % self.period == 0 { 0.9 } else { 0.05 };
        Ok(Some(SmileSample {
            confidence,
            region: None,
        }))
    }
}
