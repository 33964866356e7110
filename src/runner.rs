//! Threaded run driver
//!
//! Wires a perception source to the engine for one full run. Two
//! independently-clocked loops share exactly one atomic flag:
//!
//! - the scheduler loop ticks at the fixed tick period on the calling
//!   thread;
//! - the perception loop polls the classifier on its own thread at its own
//!   period, so a slow or stalled classification call can never delay or
//!   skip a simulation tick.
//!
//! When the run leaves Active the perception gate closes and the thread is
//! joined; nothing observes or mutates simulation state after that.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

use crate::control::{SmileDebouncer, jump_flag};
use crate::engine::{Engine, ScoreSink};
use crate::perception::PerceptionSource;
use crate::sim::Phase;
use crate::tuning::{Tuning, TuningError};

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub final_score: u32,
    pub ticks: u64,
}

/// Drive one run to termination.
///
/// The sink's terminal notification fires from inside the engine, exactly
/// once, before this returns.
pub fn run_until_terminated<P, S>(
    source: P,
    sink: S,
    tuning: Tuning,
    seed: u64,
) -> Result<RunReport, TuningError>
where
    P: PerceptionSource + Send + 'static,
    S: ScoreSink,
{
    let (trigger, latch) = jump_flag();
    let mut engine = Engine::new(tuning.clone(), latch, sink)?;

    engine.start(seed);

    // Perception runs only while this gate is open: from start until the
    // run leaves Active
    let gate = Arc::new(AtomicBool::new(true));
    let debouncer = SmileDebouncer::new(&tuning, trigger);
    let poller = spawn_perception_loop(source, debouncer, Arc::clone(&gate), &tuning);
    let tick_period = tuning.tick_period;
    let mut next_tick = Instant::now() + tick_period;
    while engine.tick() == Phase::Active {
        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
        }
        next_tick += tick_period;
    }

    gate.store(false, Ordering::Release);
    if poller.join().is_err() {
        log::error!("perception thread panicked");
    }

    let snap = engine.snapshot();
    Ok(RunReport {
        final_score: snap.score,
        ticks: snap.ticks,
    })
}

fn spawn_perception_loop<P>(
    mut source: P,
    mut debouncer: SmileDebouncer,
    gate: Arc<AtomicBool>,
    tuning: &Tuning,
) -> thread::JoinHandle<()>
where
    P: PerceptionSource + Send + 'static,
{
    let poll_period = tuning.perception_poll;
    thread::spawn(move || {
        let origin = Instant::now();
        while gate.load(Ordering::Acquire) {
            let poll_start = Instant::now();
            match source.next_sample() {
                Ok(sample) => {
                    if debouncer.observe(sample.as_ref(), origin.elapsed()) {
                        // Best-effort echo of the detected face; an external
                        // renderer may draw it, the core just reports it
                        if let Some(region) = sample.and_then(|s| s.region) {
                            log::debug!("face at {region:?}");
                        }
                    }
                }
                // A failed frame is identical to "nothing detected"
                Err(err) => log::debug!("classification frame dropped: {err}"),
            }
            let elapsed = poll_start.elapsed();
            if elapsed < poll_period {
                thread::sleep(poll_period - elapsed);
            }
        }
    })
}
