//! Single-writer / single-reader jump flag
//!
//! One atomic bool split into a write half and a read half, so the
//! one-writer-one-reader discipline holds by construction rather than by
//! convention. Neither half is cloneable. Not a queue: raising an already
//! raised flag coalesces into the same jump request.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Create a connected trigger/latch pair over one flag.
pub fn jump_flag() -> (JumpTrigger, JumpLatch) {
    let cell = Arc::new(AtomicBool::new(false));
    (JumpTrigger(Arc::clone(&cell)), JumpLatch(cell))
}

/// Write half, owned by the debouncer.
#[derive(Debug)]
pub struct JumpTrigger(Arc<AtomicBool>);

impl JumpTrigger {
    /// Request a jump. Idempotent until the next consume.
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }
}

/// Read half, owned by the tick scheduler.
#[derive(Debug)]
pub struct JumpLatch(Arc<AtomicBool>);

impl JumpLatch {
    /// Consume-and-clear: returns whether a jump was requested since the
    /// last consume, and resets the flag in the same atomic operation so a
    /// request is never read twice.
    pub fn consume(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    /// Discard any pending request without acting on it (used on run start).
    pub fn drain(&self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_clears_the_flag() {
        let (trigger, latch) = jump_flag();
        trigger.raise();
        assert!(latch.consume());
        assert!(!latch.consume());
    }

    #[test]
    fn repeated_raises_coalesce() {
        let (trigger, latch) = jump_flag();
        trigger.raise();
        trigger.raise();
        trigger.raise();
        assert!(latch.consume());
        assert!(!latch.consume());
    }

    #[test]
    fn drain_discards_pending_request() {
        let (trigger, latch) = jump_flag();
        trigger.raise();
        latch.drain();
        assert!(!latch.consume());
    }

    #[test]
    fn cross_thread_handoff() {
        let (trigger, latch) = jump_flag();
        let writer = std::thread::spawn(move || trigger.raise());
        writer.join().unwrap();
        assert!(latch.consume());
    }
}
