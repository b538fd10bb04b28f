//! Session composition.
//!
//! A [`Session`] owns exactly one [`IntervalTimer`] and one [`Stopwatch`]
//! and is the unit the host binds to. It adds the cross-component
//! behaviour the components themselves stay ignorant of:
//! - snapshot/restore against the flat persistence record, including
//!   background-gap recovery for both components
//! - advisory finish-time notices, issued on start/resume and withdrawn
//!   on pause/reset
//! - stopwatch reset on session restart
//!
//! Each session instance owns its components exclusively; there is no
//! shared state across sessions.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::alert::AlertSink;
use crate::engine::{IntervalTimer, PendingStart, TimerError};
use crate::notify::{FinishNotice, FinishScheduler};
use crate::stopwatch::Stopwatch;
use crate::types::{SessionSnapshot, TimerConfig, TimerState};

// ============================================================================
// Session
// ============================================================================

/// One interval timer plus one stopwatch, with persistence and advisory
/// notice wiring.
pub struct Session {
    /// The countdown engine
    timer: IntervalTimer,
    /// The elapsed-time stopwatch
    stopwatch: Stopwatch,
    /// Optional host collaborator for finish-time notices
    scheduler: Option<Box<dyn FinishScheduler>>,
    /// Notice currently standing with the scheduler
    active_notice: Option<FinishNotice>,
}

impl Session {
    /// Creates a session emitting alerts into `sink`, with no notice
    /// scheduler attached.
    pub fn new(sink: Box<dyn AlertSink>) -> Self {
        Self {
            timer: IntervalTimer::new(sink),
            stopwatch: Stopwatch::new(),
            scheduler: None,
            active_notice: None,
        }
    }

    /// Attaches a finish-notice scheduler.
    #[must_use]
    pub fn with_finish_scheduler(mut self, scheduler: Box<dyn FinishScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// Returns the current timer state.
    pub fn state(&self) -> &TimerState {
        self.timer.state()
    }

    /// Returns the armed start transition, if one is pending.
    pub fn pending_start(&self) -> Option<PendingStart> {
        self.timer.pending_start()
    }

    /// Returns a reference to the stopwatch.
    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    /// Returns a mutable reference to the stopwatch.
    pub fn stopwatch_mut(&mut self) -> &mut Stopwatch {
        &mut self.stopwatch
    }

    /// Returns the notice currently standing with the scheduler, if any.
    pub fn active_notice(&self) -> Option<FinishNotice> {
        self.active_notice
    }

    /// Wall-clock instant the session will finish, if it is on course to.
    ///
    /// Defined while running (from `now`) and while a start is armed
    /// (from the start deadline); `None` otherwise.
    pub fn finish_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let state = self.timer.state();
        if state.is_running() {
            Some(now + Duration::seconds(i64::from(state.remaining_session_secs())))
        } else {
            self.timer.pending_start().map(|pending| {
                pending.fire_at() + Duration::seconds(i64::from(state.remaining_session_secs()))
            })
        }
    }

    // ── Timer operations ────────────────────────────────────────────────

    /// Loads a session configuration. Withdraws any standing notice.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidConfiguration` for an invalid duration
    /// or set count; prior state is unchanged on rejection.
    pub fn configure(&mut self, config: &TimerConfig) -> Result<(), TimerError> {
        self.timer.configure(config)?;
        self.withdraw_notice();
        Ok(())
    }

    /// Arms the delayed start and issues a finish notice for the
    /// projected completion instant.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::PreconditionViolation` unless the timer is
    /// configured and not yet started.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<PendingStart, TimerError> {
        let pending = self.timer.start(now)?;
        let remaining = self.timer.state().remaining_session_secs();
        self.issue_notice(pending.fire_at() + Duration::seconds(i64::from(remaining)));
        Ok(pending)
    }

    /// Completes an armed start. See [`IntervalTimer::fire_pending_start`].
    pub fn fire_pending_start(&mut self, generation: u64, now: DateTime<Utc>) -> bool {
        self.timer.fire_pending_start(generation, now)
    }

    /// Cancels an armed start and withdraws the finish notice.
    pub fn cancel_pending_start(&mut self) {
        self.timer.cancel_pending_start();
        self.withdraw_notice();
    }

    /// Pauses the countdown and withdraws the finish notice. Idempotent.
    pub fn pause(&mut self) {
        if self.timer.state().is_running() {
            self.timer.pause();
            self.withdraw_notice();
        }
    }

    /// Resumes a paused countdown and reissues the finish notice.
    /// Idempotent.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        if self.timer.state().is_paused() {
            self.timer.resume(now);
            let remaining = self.timer.state().remaining_session_secs();
            self.issue_notice(now + Duration::seconds(i64::from(remaining)));
        }
    }

    /// Advances the countdown by one second.
    ///
    /// # Errors
    ///
    /// See [`IntervalTimer::tick`].
    pub fn tick(&mut self) -> Result<(), TimerError> {
        self.timer.tick()?;
        if self.timer.state().is_finished() {
            // The notice has served its purpose; nothing to cancel.
            self.active_notice = None;
        }
        Ok(())
    }

    /// Resets the whole session: timer to idle, stopwatch to zero,
    /// standing notice withdrawn.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.stopwatch.reset();
        self.withdraw_notice();
        debug!("session reset");
    }

    /// Re-arms a finished session with its previous configuration,
    /// resetting the stopwatch and issuing a fresh finish notice.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::PreconditionViolation` unless the session has
    /// finished.
    pub fn restart(&mut self, now: DateTime<Utc>) -> Result<PendingStart, TimerError> {
        let pending = self.timer.restart(now)?;
        self.stopwatch.reset();
        let remaining = self.timer.state().remaining_session_secs();
        self.issue_notice(pending.fire_at() + Duration::seconds(i64::from(remaining)));
        Ok(pending)
    }

    /// Toggles the stopwatch between running and paused.
    pub fn toggle_stopwatch(&mut self, now: DateTime<Utc>) {
        self.stopwatch.toggle(now);
    }

    // ── Persistence ─────────────────────────────────────────────────────

    /// Captures the whole session as a flat record.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.timer.state();
        SessionSnapshot {
            started: state.phase.is_started(),
            finished: state.is_finished(),
            paused: state.is_paused(),
            number_of_sets: state.number_of_sets,
            current_set: state.current_set,
            alerts_enabled: state.alerts_enabled,
            time_left_in_set: state.time_left_in_set,
            seconds_per_set: state.seconds_per_set,
            session_start: state.session_start,
            stopwatch_elapsed_seconds: self.stopwatch.elapsed_seconds(),
            stopwatch_is_paused: self.stopwatch.is_paused(),
            stopwatch_last_resume: self.stopwatch.last_resume(),
        }
    }

    /// Repopulates both components from a snapshot taken earlier.
    ///
    /// When the timer was running at snapshot time, the wall-clock gap
    /// since `session_start` is fed through the recovery calculator and a
    /// fresh finish notice is issued if the session is still on course.
    /// A stopwatch that was left running is folded up to `now`. With
    /// `now` equal to the snapshot instant this is an exact round-trip.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::PreconditionViolation` when a running
    /// snapshot carries no session start or a zero per-set duration.
    pub fn restore(&mut self, snapshot: &SessionSnapshot, now: DateTime<Utc>) -> Result<(), TimerError> {
        let phase = snapshot.phase();
        self.timer.restore_state(TimerState {
            phase,
            seconds_per_set: snapshot.seconds_per_set,
            time_left_in_set: snapshot.time_left_in_set,
            number_of_sets: snapshot.number_of_sets,
            current_set: snapshot.current_set,
            alerts_enabled: snapshot.alerts_enabled,
            session_start: snapshot.session_start,
        });
        self.stopwatch = Stopwatch::from_parts(
            snapshot.stopwatch_elapsed_seconds,
            snapshot.stopwatch_is_paused,
            snapshot.stopwatch_last_resume,
        );
        self.active_notice = None;

        if self.timer.state().is_running() {
            let started = snapshot.session_start.ok_or_else(|| {
                TimerError::PreconditionViolation(
                    "running snapshot carries no session start".to_string(),
                )
            })?;
            let gap = (now - started).num_seconds().max(0) as u64;
            self.timer.recover(gap)?;

            if self.timer.state().is_running() {
                let remaining = self.timer.state().remaining_session_secs();
                self.issue_notice(now + Duration::seconds(i64::from(remaining)));
            }
        }

        self.stopwatch.catch_up(now);

        debug!(
            phase = self.timer.state().phase.as_str(),
            "session restored"
        );
        Ok(())
    }

    // ── Notice plumbing ─────────────────────────────────────────────────

    /// Issues a finish notice, replacing any standing one.
    fn issue_notice(&mut self, fires_at: DateTime<Utc>) {
        self.withdraw_notice();
        if let Some(scheduler) = &self.scheduler {
            let notice = FinishNotice::new(fires_at);
            scheduler.schedule(&notice);
            self.active_notice = Some(notice);
        }
    }

    /// Withdraws the standing notice, if any.
    fn withdraw_notice(&mut self) {
        if let (Some(scheduler), Some(notice)) = (&self.scheduler, self.active_notice.take()) {
            scheduler.cancel(notice.id());
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("timer", &self.timer)
            .field("stopwatch", &self.stopwatch)
            .field("active_notice", &self.active_notice)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
