//! Smile-to-jump debouncing
//!
//! Converts the raw classification stream into discrete, rate-limited jump
//! requests. Samples below threshold or inside the cooldown window are
//! dropped silently and never replayed; the result is a rhythmic control
//! feel rather than continuous lift while the player holds a smile.

use std::time::Duration;

use crate::control::signal::JumpTrigger;
use crate::perception::SmileSample;
use crate::tuning::Tuning;

/// Cooldown-gated jump request writer.
///
/// Constructed fresh for each run, which also resets the cooldown deadline.
#[derive(Debug)]
pub struct SmileDebouncer {
    threshold: f32,
    cooldown: Duration,
    /// Monotonic deadline; samples before it are ignored
    deadline: Option<Duration>,
    trigger: JumpTrigger,
}

impl SmileDebouncer {
    pub fn new(tuning: &Tuning, trigger: JumpTrigger) -> Self {
        Self {
            threshold: tuning.smile_threshold,
            cooldown: tuning.jump_cooldown,
            deadline: None,
            trigger,
        }
    }

    /// Feed one classification result. `now` is monotonic time from any
    /// fixed origin. Returns whether a jump request was raised.
    ///
    /// `None` (no face detected) is treated exactly like a below-threshold
    /// sample: dropped, never an error.
    pub fn observe(&mut self, sample: Option<&SmileSample>, now: Duration) -> bool {
        let Some(sample) = sample else {
            return false;
        };
        if sample.confidence <= self.threshold {
            return false;
        }
        if let Some(deadline) = self.deadline {
            if now < deadline {
                log::trace!("smile at {now:?} dropped (cooldown until {deadline:?})");
                return false;
            }
        }
        self.deadline = Some(now + self.cooldown);
        self.trigger.raise();
        log::debug!("jump requested (confidence {:.2})", sample.confidence);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::signal::jump_flag;

    fn debouncer_with_cooldown(ms: u64) -> (SmileDebouncer, crate::control::JumpLatch) {
        let mut tuning = Tuning::default();
        tuning.jump_cooldown = Duration::from_millis(ms);
        let (trigger, latch) = jump_flag();
        (SmileDebouncer::new(&tuning, trigger), latch)
    }

    fn smile(confidence: f32) -> SmileSample {
        SmileSample {
            confidence,
            region: None,
        }
    }

    #[test]
    fn qualifying_smile_raises_flag() {
        let (mut deb, latch) = debouncer_with_cooldown(300);
        assert!(deb.observe(Some(&smile(0.9)), Duration::ZERO));
        assert!(latch.consume());
    }

    #[test]
    fn below_threshold_is_dropped() {
        let (mut deb, latch) = debouncer_with_cooldown(300);
        assert!(!deb.observe(Some(&smile(0.29)), Duration::ZERO));
        assert!(!latch.consume());
    }

    #[test]
    fn threshold_is_exclusive() {
        let (mut deb, _latch) = debouncer_with_cooldown(300);
        assert!(!deb.observe(Some(&smile(0.30)), Duration::ZERO));
    }

    #[test]
    fn no_detection_is_dropped_silently() {
        let (mut deb, latch) = debouncer_with_cooldown(300);
        assert!(!deb.observe(None, Duration::ZERO));
        assert!(!latch.consume());
    }

    #[test]
    fn cooldown_admits_at_most_one_request() {
        // Qualifying samples at t=0 and t=100ms with a 250ms cooldown:
        // exactly one jump.
        let (mut deb, latch) = debouncer_with_cooldown(250);
        assert!(deb.observe(Some(&smile(0.9)), Duration::ZERO));
        assert!(!deb.observe(Some(&smile(0.9)), Duration::from_millis(100)));
        assert!(latch.consume());
        assert!(!latch.consume());
    }

    #[test]
    fn suppressed_smiles_are_not_replayed_after_cooldown() {
        let (mut deb, latch) = debouncer_with_cooldown(250);
        assert!(deb.observe(Some(&smile(0.9)), Duration::ZERO));
        assert!(!deb.observe(Some(&smile(0.9)), Duration::from_millis(100)));
        assert!(latch.consume());
        // Nothing arrives after the cooldown expires, so nothing fires
        assert!(!latch.consume());
    }

    #[test]
    fn cooldown_reopens_at_deadline() {
        let (mut deb, latch) = debouncer_with_cooldown(250);
        assert!(deb.observe(Some(&smile(0.9)), Duration::ZERO));
        latch.consume();
        assert!(deb.observe(Some(&smile(0.9)), Duration::from_millis(250)));
        assert!(latch.consume());
    }

    #[test]
    fn dense_sample_burst_yields_one_request_per_window() {
        let (mut deb, latch) = debouncer_with_cooldown(300);
        let mut accepted = 0;
        // 80ms poll cadence over one second of constant smiling
        for poll in 0..13u64 {
            if deb.observe(Some(&smile(0.95)), Duration::from_millis(poll * 80)) {
                accepted += 1;
                assert!(latch.consume());
            }
        }
        // Windows open at 0, 320, 640, 960 (first poll at/after each deadline)
        assert_eq!(accepted, 4);
    }
}
