//! Fixed-tick scheduler and lifecycle state machine
//!
//! Owns the simulation state exclusively. Each tick runs in a fixed order:
//! consume-and-clear the jump flag, physics step, collision check. The
//! terminal notification fires exactly once per run, at the Active →
//! Terminated transition.

use crate::control::JumpLatch;
use crate::sim::{self, FrameSnapshot, GameState, Phase};
use crate::tuning::{Tuning, TuningError};

/// Consumes the final score when a run ends.
///
/// Fire-and-forget from the engine's perspective: implementations handle
/// their own persistence or submission failures and must not block the
/// next run from starting.
pub trait ScoreSink {
    fn notify(&mut self, final_score: u32);
}

/// Logs the final score. The no-frills sink for demos and tests.
#[derive(Debug, Default)]
pub struct LogSink;

impl ScoreSink for LogSink {
    fn notify(&mut self, final_score: u32) {
        log::info!("run over, final score {final_score}");
    }
}

/// The game loop scheduler: Idle --start--> Active --collision--> Terminated
/// --start--> Active (new run).
pub struct Engine<S: ScoreSink> {
    state: GameState,
    latch: JumpLatch,
    sink: S,
    tuning: Tuning,
}

impl<S: ScoreSink> Engine<S> {
    /// Build an engine in the Idle phase. Tuning is validated here, once;
    /// tick code assumes it holds.
    pub fn new(tuning: Tuning, latch: JumpLatch, sink: S) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            state: GameState::idle(&tuning),
            latch,
            sink,
            tuning,
        })
    }

    /// Start a run. While Idle or Terminated this fully resets the
    /// simulation; while Active it is a no-op (use [`Engine::restart`] to
    /// force a reset mid-run). Returns whether a new run began.
    pub fn start(&mut self, seed: u64) -> bool {
        if self.state.phase == Phase::Active {
            log::debug!("start ignored: run already active");
            return false;
        }
        self.begin(seed);
        true
    }

    /// Abandon any run in progress and start fresh. No terminal
    /// notification fires for the abandoned run.
    pub fn restart(&mut self, seed: u64) {
        self.begin(seed);
    }

    fn begin(&mut self, seed: u64) {
        self.state = GameState::new(seed, &self.tuning);
        // A stale request from a previous run must not jump the new bird
        self.latch.drain();
        log::info!("run started with seed {seed}");
    }

    /// Advance one tick. Outside Active this mutates nothing.
    ///
    /// Ordering within a tick is fixed: jump flag is consumed before the
    /// physics decision, physics completes before the collision check.
    pub fn tick(&mut self) -> Phase {
        if self.state.phase != Phase::Active {
            return self.state.phase;
        }

        let jump_requested = self.latch.consume();
        sim::step(&mut self.state, jump_requested, &self.tuning);

        if let Some(contact) = sim::check_collision(&self.state, &self.tuning) {
            self.state.phase = Phase::Terminated;
            log::info!(
                "terminal contact {contact:?} at tick {}, score {}",
                self.state.ticks,
                self.state.score
            );
            self.sink.notify(self.state.score);
        }

        self.state.phase
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Read-only view for renderers; cannot touch engine state.
    pub fn snapshot(&self) -> FrameSnapshot {
        self.state.snapshot()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{JumpTrigger, jump_flag};

    /// Counts notifications and remembers the last score.
    #[derive(Debug, Default)]
    struct RecordingSink {
        notified: Vec<u32>,
    }

    impl ScoreSink for RecordingSink {
        fn notify(&mut self, final_score: u32) {
            self.notified.push(final_score);
        }
    }

    fn engine_with(tuning: Tuning) -> (Engine<RecordingSink>, JumpTrigger) {
        let (trigger, latch) = jump_flag();
        let engine = Engine::new(tuning, latch, RecordingSink::default()).unwrap();
        (engine, trigger)
    }

    #[test]
    fn invalid_tuning_is_rejected_at_construction() {
        let mut tuning = Tuning::default();
        tuning.pipe_gap = tuning.screen_height * 2.0;
        let (_, latch) = jump_flag();
        assert!(Engine::new(tuning, latch, RecordingSink::default()).is_err());
    }

    #[test]
    fn idle_engine_never_ticks() {
        let (mut engine, _trigger) = engine_with(Tuning::default());
        let before = engine.snapshot();
        assert_eq!(engine.tick(), Phase::Idle);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn jump_flag_is_consumed_exactly_once() {
        let (mut engine, trigger) = engine_with(Tuning::default());
        engine.start(1);
        trigger.raise();
        engine.tick();
        let vel_after_jump = engine.snapshot().bird_vel;
        assert_eq!(vel_after_jump, -Tuning::default().jump_impulse);
        // Second tick sees a cleared flag: gravity only
        engine.tick();
        assert_eq!(
            engine.snapshot().bird_vel,
            vel_after_jump + Tuning::default().gravity_per_tick
        );
    }

    #[test]
    fn start_while_active_is_a_no_op() {
        let (mut engine, _trigger) = engine_with(Tuning::default());
        assert!(engine.start(1));
        for _ in 0..10 {
            engine.tick();
        }
        let mid_run = engine.snapshot();
        assert!(!engine.start(2));
        assert_eq!(engine.snapshot(), mid_run);
    }

    #[test]
    fn restart_forces_a_reset_mid_run() {
        let (mut engine, _trigger) = engine_with(Tuning::default());
        engine.start(1);
        for _ in 0..10 {
            engine.tick();
        }
        engine.restart(2);
        assert_eq!(engine.snapshot().ticks, 0);
        assert_eq!(engine.phase(), Phase::Active);
        // Abandoned run produced no notification
        assert!(engine.sink_mut().notified.is_empty());
    }

    #[test]
    fn stale_jump_request_does_not_leak_into_new_run() {
        let (mut engine, trigger) = engine_with(Tuning::default());
        engine.start(1);
        trigger.raise();
        engine.restart(2);
        engine.tick();
        // Gravity only: the pre-restart request was drained
        assert_eq!(
            engine.snapshot().bird_vel,
            Tuning::default().gravity_per_tick
        );
    }

    // Scenario A: no jumps, run until the bird falls out of the world.
    #[test]
    fn free_fall_terminates_on_the_floor() {
        let tuning = Tuning::default();
        let (mut engine, _trigger) = engine_with(tuning.clone());
        engine.start(11);

        let mut ticks = 0u32;
        while engine.tick() == Phase::Active {
            ticks += 1;
            assert!(ticks < 10_000, "run failed to terminate");
        }

        assert_eq!(engine.phase(), Phase::Terminated);
        let snap = engine.snapshot();
        // Floor hit: the bird's bottom passed the screen bottom
        assert!(snap.bird_y + tuning.bird_height / 2.0 > tuning.screen_height);
        // Score reflects completed recycles, reported exactly once
        assert_eq!(engine.sink_mut().notified, vec![snap.score]);
    }

    // Scenario C: degenerate gap right at bird height kills on tick one.
    #[test]
    fn first_tick_collision_notifies_zero_exactly_once() {
        let mut tuning = Tuning::default();
        // Bird column sits where the pipe lands after its first advance, and
        // the gap is narrower than the bird, so any gap position is lethal
        tuning.bird_x = 480.0;
        tuning.pipe_gap = 20.0;
        let (mut engine, _trigger) = engine_with(tuning);
        engine.start(5);

        assert_eq!(engine.tick(), Phase::Terminated);
        assert_eq!(engine.sink_mut().notified, vec![0]);

        // Further ticks mutate nothing and never re-notify
        let frozen = engine.snapshot();
        assert_eq!(engine.tick(), Phase::Terminated);
        assert_eq!(engine.snapshot(), frozen);
        assert_eq!(engine.sink_mut().notified, vec![0]);
    }

    // Scenario D: start while Terminated fully resets.
    #[test]
    fn start_after_termination_resets_everything() {
        let tuning = Tuning::default();
        let (mut engine, _trigger) = engine_with(tuning.clone());
        engine.start(11);
        while engine.tick() == Phase::Active {}
        assert_eq!(engine.phase(), Phase::Terminated);

        assert!(engine.start(12));
        let snap = engine.snapshot();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.bird_y, tuning.screen_height / 2.0);
        assert_eq!(snap.phase, Phase::Active);
        assert_eq!(snap.ticks, 0);
    }
}
