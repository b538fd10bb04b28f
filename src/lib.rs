//! Interval Timer Library
//!
//! This library provides a headless, platform-independent interval timer
//! engine for multi-set workout sessions. It includes:
//! - Countdown state machine with set progression and cancellable
//!   delayed start
//! - Pause/resume-aware stopwatch resilient to suspension
//! - Background-drift recovery recomputing progress after missed ticks
//! - Semantic alert events delivered to a host-provided sink
//! - Advisory finish-time notices for host notification scheduling
//! - Flat snapshot record for host-managed persistence
//! - Tokio-based 1 Hz clock driver
//!
//! The engine performs no I/O, touches no audio or notification APIs,
//! and never reads the wall clock itself - every time-dependent
//! operation takes `now` as an argument.

pub mod alert;
pub mod driver;
pub mod engine;
pub mod notify;
pub mod session;
pub mod stopwatch;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    format_clock, SessionSnapshot, TimerConfig, TimerPhase, TimerState, DEFAULT_START_DELAY_SECS,
};

// Re-export engine types
pub use engine::{recover_timer, IntervalTimer, PendingStart, RecoveredTimer, TimerError};

// Re-export alert types
pub use alert::{
    AlertEvent, AlertSink, CrossbeamAlertSink, MockAlertSink, NullAlertSink, TokioAlertSink,
};

// Re-export notice types
pub use notify::{FinishNotice, FinishScheduler, MockFinishScheduler};

// Re-export composition types
pub use driver::SessionDriver;
pub use session::Session;
pub use stopwatch::Stopwatch;
