//! Interval timer state machine.
//!
//! This module provides the countdown-per-set engine:
//! - Phase transitions (Idle → Configuring → Running → Finished)
//! - Cancellable delayed start
//! - Alert emission at countdown thresholds
//! - Background-drift recovery after suspension

pub mod error;
pub mod pending;
pub mod recovery;
pub mod timer;

pub use error::TimerError;
pub use pending::PendingStart;
pub use recovery::{recover_timer, RecoveredTimer};
pub use timer::IntervalTimer;
