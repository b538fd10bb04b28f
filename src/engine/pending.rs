//! Pending-start bookkeeping.
//!
//! `start()` does not enter the running phase directly; it arms a pending
//! transition that fires after the configured grace period. The token
//! carries a generation counter so that a cancellation issued before the
//! deferred callback runs always wins: firing with a stale generation is
//! ignored by the engine.

use chrono::{DateTime, Utc};

/// Token for an armed start transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingStart {
    generation: u64,
    fire_at: DateTime<Utc>,
}

impl PendingStart {
    pub(crate) fn new(generation: u64, fire_at: DateTime<Utc>) -> Self {
        Self { generation, fire_at }
    }

    /// Generation this token belongs to. The engine only honours a fire
    /// request whose generation is still current.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wall-clock instant the running phase is due to begin.
    #[must_use]
    pub fn fire_at(&self) -> DateTime<Utc> {
        self.fire_at
    }

    /// Time remaining until the deadline, clamped to zero when the
    /// deadline has already passed.
    #[must_use]
    pub fn delay_from(&self, now: DateTime<Utc>) -> std::time::Duration {
        (self.fire_at - now).to_std().unwrap_or(std::time::Duration::ZERO)
    }
}
