//! Advisory finish-time notices.
//!
//! The engine knows when a running session will complete; the host may
//! want a platform notification at that instant even if the process is
//! suspended by then. This module carries that advisory: the session
//! computes the wall-clock finish instant and hands a [`FinishNotice`] to
//! a host-provided [`FinishScheduler`]. The engine itself never schedules
//! or presents anything.
//!
//! Notices are identified by uuid so a pause can cancel exactly the
//! notice it previously issued.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

// ============================================================================
// FinishNotice
// ============================================================================

/// Advisory "the session will finish at T".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishNotice {
    /// Unique identifier for later cancellation
    id: Uuid,
    /// Wall-clock instant the session is due to finish
    fires_at: DateTime<Utc>,
}

impl FinishNotice {
    /// Creates a notice for the given finish instant with a fresh id.
    #[must_use]
    pub fn new(fires_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            fires_at,
        }
    }

    /// Unique identifier of this notice.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Wall-clock instant the session is due to finish.
    #[must_use]
    pub fn fires_at(&self) -> DateTime<Utc> {
        self.fires_at
    }
}

// ============================================================================
// FinishScheduler
// ============================================================================

/// Trait for finish-notice scheduling implementations.
///
/// The host maps notices to whatever platform mechanism it has (a local
/// notification, a calendar entry, nothing at all). Purely advisory: the
/// engine does not care whether anything is actually scheduled.
pub trait FinishScheduler: Send {
    /// Informs the host that the session will finish at `notice.fires_at()`.
    fn schedule(&self, notice: &FinishNotice);

    /// Withdraws a previously issued notice, e.g. because the session was
    /// paused or reset.
    fn cancel(&self, id: Uuid);
}

// ============================================================================
// MockFinishScheduler
// ============================================================================

/// Recording scheduler for tests.
///
/// Clones share the same buffers, so a test can hand one clone to the
/// session and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MockFinishScheduler {
    scheduled: Arc<Mutex<Vec<FinishNotice>>>,
    cancelled: Arc<Mutex<Vec<Uuid>>>,
}

impl MockFinishScheduler {
    /// Creates an empty recording scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notice scheduled so far.
    #[must_use]
    pub fn scheduled(&self) -> Vec<FinishNotice> {
        self.scheduled.lock().expect("notice buffer poisoned").clone()
    }

    /// Returns every cancelled notice id.
    #[must_use]
    pub fn cancelled(&self) -> Vec<Uuid> {
        self.cancelled.lock().expect("notice buffer poisoned").clone()
    }
}

impl FinishScheduler for MockFinishScheduler {
    fn schedule(&self, notice: &FinishNotice) {
        self.scheduled
            .lock()
            .expect("notice buffer poisoned")
            .push(*notice);
    }

    fn cancel(&self, id: Uuid) {
        self.cancelled
            .lock()
            .expect("notice buffer poisoned")
            .push(id);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_ids_are_unique() {
        let at = Utc::now();
        let a = FinishNotice::new(at);
        let b = FinishNotice::new(at);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.fires_at(), b.fires_at());
    }

    #[test]
    fn test_mock_records_schedule_and_cancel() {
        let scheduler = MockFinishScheduler::new();
        let notice = FinishNotice::new(Utc::now());

        scheduler.schedule(&notice);
        scheduler.cancel(notice.id());

        assert_eq!(scheduler.scheduled(), vec![notice]);
        assert_eq!(scheduler.cancelled(), vec![notice.id()]);
    }

    #[test]
    fn test_mock_clones_share_buffers() {
        let scheduler = MockFinishScheduler::new();
        let observer = scheduler.clone();

        scheduler.schedule(&FinishNotice::new(Utc::now()));
        assert_eq!(observer.scheduled().len(), 1);
    }
}
