//! Jump control plumbing
//!
//! The perception loop and the tick scheduler run on independent clocks and
//! meet at exactly one place: a single edge-triggered jump flag. The
//! debouncer is the only writer, the tick in progress is the only reader.

pub mod debounce;
pub mod signal;

pub use debounce::SmileDebouncer;
pub use signal::{JumpLatch, JumpTrigger, jump_flag};
