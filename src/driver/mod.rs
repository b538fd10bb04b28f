//! Clock driver for a shared session.
//!
//! The engine never creates its own concurrency: this module is the one
//! place where time actually passes. `run()` delivers one `tick()` per
//! elapsed second, and `spawn_pending_start()` sleeps out the start delay
//! before firing the armed transition. Both go through the session mutex,
//! so ticks are never reentrant and a cancellation that wins the lock
//! first always beats the deferred start.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::debug;

use crate::engine::PendingStart;
use crate::session::Session;

// ============================================================================
// SessionDriver
// ============================================================================

/// Drives one shared [`Session`] with a 1 Hz clock.
pub struct SessionDriver {
    /// The session being driven
    session: Arc<Mutex<Session>>,
}

impl SessionDriver {
    /// Creates a driver for the given shared session.
    pub fn new(session: Arc<Mutex<Session>>) -> Self {
        Self { session }
    }

    /// Returns a handle to the shared session.
    #[must_use]
    pub fn session(&self) -> Arc<Mutex<Session>> {
        Arc::clone(&self.session)
    }

    /// Runs the tick loop.
    ///
    /// Ticks every second while the session is running; seconds missed
    /// under load are skipped rather than replayed in a burst (suspension
    /// gaps are the restore path's job, not the ticker's). This method
    /// never returns on its own - spawn it and abort the task to stop.
    ///
    /// # Errors
    ///
    /// Returns an error if a tick is rejected by the engine.
    pub async fn run(&self) -> Result<()> {
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let mut session = self.session.lock().await;
            if !session.state().is_running() {
                continue;
            }

            session.tick().context("clock tick rejected")?;
        }
    }

    /// Arms the session's delayed start and schedules its firing.
    ///
    /// Convenience wrapper for `Session::start` followed by
    /// [`spawn_pending_start`](Self::spawn_pending_start).
    ///
    /// # Errors
    ///
    /// Returns an error if the session refuses to start.
    pub async fn start(&self) -> Result<(PendingStart, JoinHandle<bool>)> {
        let pending = {
            let mut session = self.session.lock().await;
            session
                .start(Utc::now())
                .context("failed to arm delayed start")?
        };
        Ok((pending, self.spawn_pending_start(pending)))
    }

    /// Sleeps until the pending deadline, then fires the transition.
    ///
    /// The task resolves to true if the session entered the running
    /// phase, false if the start had been cancelled or superseded in the
    /// meantime. Aborting the task also prevents the transition.
    pub fn spawn_pending_start(&self, pending: PendingStart) -> JoinHandle<bool> {
        let session = Arc::clone(&self.session);
        tokio::spawn(async move {
            let delay = pending.delay_from(Utc::now());
            tokio::time::sleep(delay).await;

            let mut session = session.lock().await;
            let fired = session.fire_pending_start(pending.generation(), Utc::now());
            debug!(generation = pending.generation(), fired, "pending start elapsed");
            fired
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
