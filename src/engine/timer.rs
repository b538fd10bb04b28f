//! Countdown engine for multi-set interval sessions.
//!
//! This module provides the core state machine:
//! - Phase transitions (Configuring → Running → Paused/Finished)
//! - One-second tick decrements with set progression
//! - Alert emission at fixed thresholds with a deterministic priority
//! - Cancellable delayed start
//! - Silent recomputation after suspension
//!
//! The engine creates no concurrency of its own: an external 1 Hz clock
//! source calls `tick()`, and the pending-start delay is fired by whoever
//! schedules it (see the driver module). Every operation that needs the
//! wall clock takes `now` as an argument.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::alert::{AlertEvent, AlertSink};
use crate::types::{TimerConfig, TimerPhase, TimerState, DEFAULT_START_DELAY_SECS};

use super::error::TimerError;
use super::pending::PendingStart;
use super::recovery::recover_timer;

// ============================================================================
// Alert thresholds
// ============================================================================

/// Seconds-left values that trigger a short blip.
const BLIP_WINDOW: std::ops::RangeInclusive<u32> = 1..=3;

/// Seconds-left value that announces the upcoming round.
const ROUND_INCOMING_AT: u32 = 10;

// ============================================================================
// IntervalTimer
// ============================================================================

/// Interval timer engine managing one countdown-per-set session.
pub struct IntervalTimer {
    /// Current timer state
    state: TimerState,
    /// Alert event sink
    sink: Box<dyn AlertSink>,
    /// Armed start transition, if any
    pending: Option<PendingStart>,
    /// Generation counter deciding pending-start races
    generation: u64,
    /// Grace period applied by `start()`, in seconds
    start_delay_secs: u32,
}

impl IntervalTimer {
    /// Creates a new engine in the idle phase, emitting alerts into `sink`.
    pub fn new(sink: Box<dyn AlertSink>) -> Self {
        Self {
            state: TimerState::new(),
            sink,
            pending: None,
            generation: 0,
            start_delay_secs: DEFAULT_START_DELAY_SECS,
        }
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Returns the armed start transition, if one is pending.
    pub fn pending_start(&self) -> Option<PendingStart> {
        self.pending
    }

    /// Loads a session configuration.
    ///
    /// Any armed start is disarmed. On rejection the previous state is
    /// left completely untouched.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidConfiguration` for an all-zero duration
    /// or a zero set count.
    pub fn configure(&mut self, config: &TimerConfig) -> Result<(), TimerError> {
        config
            .validate()
            .map_err(TimerError::InvalidConfiguration)?;

        self.disarm();
        self.state.apply_config(config);
        self.start_delay_secs = config.start_delay_secs;

        debug!(
            seconds_per_set = self.state.seconds_per_set,
            sets = self.state.number_of_sets,
            "timer configured"
        );
        Ok(())
    }

    /// Arms the delayed transition into the running phase.
    ///
    /// The countdown does not begin yet: the returned token names the
    /// deadline (`now` + start delay) at which `fire_pending_start` should
    /// be invoked, and the generation that invocation must present.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::PreconditionViolation` unless the timer is in
    /// the configuring phase.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<PendingStart, TimerError> {
        if self.state.phase != TimerPhase::Configuring {
            return Err(TimerError::PreconditionViolation(format!(
                "cannot start from the {} phase",
                self.state.phase.as_str()
            )));
        }

        self.generation += 1;
        let fire_at = now + Duration::seconds(i64::from(self.start_delay_secs));
        let pending = PendingStart::new(self.generation, fire_at);
        self.pending = Some(pending);

        debug!(
            generation = self.generation,
            delay_secs = self.start_delay_secs,
            "start armed"
        );
        Ok(pending)
    }

    /// Completes an armed start, entering the running phase.
    ///
    /// Returns false without touching state when the presented generation
    /// is stale, i.e. the start was cancelled, re-armed, or already
    /// fired. Cancellation issued before this call therefore always wins.
    pub fn fire_pending_start(&mut self, generation: u64, now: DateTime<Utc>) -> bool {
        match self.pending {
            Some(pending) if pending.generation() == generation => {
                self.pending = None;
                self.state.begin_running(now);
                info!(
                    seconds_per_set = self.state.seconds_per_set,
                    sets = self.state.number_of_sets,
                    "session running"
                );
                true
            }
            _ => {
                debug!(generation, "ignoring stale pending start");
                false
            }
        }
    }

    /// Cancels an armed start before it fires. No-op when nothing is armed.
    pub fn cancel_pending_start(&mut self) {
        if self.pending.is_some() {
            self.disarm();
            debug!("pending start cancelled");
        }
    }

    /// Pauses the countdown. Idempotent.
    pub fn pause(&mut self) {
        if self.state.is_running() {
            self.state.pause();
            debug!(time_left = self.state.time_left_in_set, "timer paused");
        }
    }

    /// Resumes a paused countdown. Idempotent.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        if self.state.is_paused() {
            self.state.resume(now);
            debug!(time_left = self.state.time_left_in_set, "timer resumed");
        }
    }

    /// Advances the countdown by one second.
    ///
    /// While running this decrements the current set, emits at most one
    /// alert event (blip before round-incoming before completion events),
    /// and handles set/session boundaries. A tick before the session has
    /// started mutates nothing but sounds the session boundary; ticks
    /// while paused or finished are silent no-ops.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::PreconditionViolation` when invoked on a
    /// running timer whose set count is below 1.
    pub fn tick(&mut self) -> Result<(), TimerError> {
        match self.state.phase {
            TimerPhase::Idle | TimerPhase::Configuring => {
                self.emit(AlertEvent::SessionBoundary);
                return Ok(());
            }
            TimerPhase::Paused | TimerPhase::Finished => return Ok(()),
            TimerPhase::Running => {}
        }

        if self.state.number_of_sets < 1 {
            return Err(TimerError::PreconditionViolation(
                "running timer has no sets".to_string(),
            ));
        }

        let set_completed = self.state.decrement();

        // At most one event per tick, fixed priority order: blip, then
        // round-incoming, then completion events.
        let event = if BLIP_WINDOW.contains(&self.state.time_left_in_set) {
            Some(AlertEvent::ShortBlip)
        } else if self.state.time_left_in_set == ROUND_INCOMING_AT {
            Some(AlertEvent::RoundIncoming)
        } else if set_completed {
            if self.state.current_set >= self.state.number_of_sets {
                self.state.finish();
                info!(sets = self.state.number_of_sets, "session finished");
                Some(AlertEvent::SessionBoundary)
            } else {
                self.state.advance_set();
                debug!(current_set = self.state.current_set, "new round");
                Some(AlertEvent::NewRound)
            }
        } else {
            None
        };

        if let Some(event) = event {
            self.emit(event);
        }
        Ok(())
    }

    /// Resets to the idle phase, disarming any pending start.
    pub fn reset(&mut self) {
        self.disarm();
        self.state.reset();
        debug!("timer reset");
    }

    /// Re-arms a finished session with its previous configuration.
    ///
    /// The timer re-enters the configuring phase and the start delay is
    /// applied again, exactly as for a fresh `start()`.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::PreconditionViolation` unless the session has
    /// finished.
    pub fn restart(&mut self, now: DateTime<Utc>) -> Result<PendingStart, TimerError> {
        if !self.state.is_finished() {
            return Err(TimerError::PreconditionViolation(format!(
                "cannot restart from the {} phase",
                self.state.phase.as_str()
            )));
        }

        self.state.phase = TimerPhase::Configuring;
        self.state.time_left_in_set = self.state.seconds_per_set;
        self.state.current_set = 1;
        self.state.session_start = None;
        self.start(now)
    }

    /// Recomputes progress after `elapsed_secs` of missed ticks.
    ///
    /// Only meaningful while running; any other phase is a no-op. No alert
    /// events are replayed for the skipped seconds.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::PreconditionViolation` when the running timer
    /// has a zero per-set duration.
    pub fn recover(&mut self, elapsed_secs: u64) -> Result<(), TimerError> {
        if !self.state.is_running() {
            return Ok(());
        }

        let recovered = recover_timer(
            self.state.seconds_per_set,
            self.state.number_of_sets,
            elapsed_secs,
        )?;

        if recovered.finished {
            self.state.finish();
        } else {
            self.state.current_set = recovered.current_set;
            self.state.time_left_in_set = recovered.time_left_in_set;
        }

        info!(
            elapsed_secs,
            current_set = self.state.current_set,
            time_left = self.state.time_left_in_set,
            finished = recovered.finished,
            "timer recovered after suspension"
        );
        Ok(())
    }

    /// Replaces the whole timer state, disarming any pending start.
    ///
    /// Used by session restore; the snapshot is trusted to satisfy the
    /// state invariants.
    pub(crate) fn restore_state(&mut self, state: TimerState) {
        self.disarm();
        self.state = state;
    }

    /// Disarms the pending start and invalidates its generation.
    fn disarm(&mut self) {
        self.pending = None;
        self.generation += 1;
    }

    /// Emits an alert event, honouring the alerts-enabled flag.
    fn emit(&self, event: AlertEvent) {
        if self.state.alerts_enabled {
            self.sink.alert(event);
        }
    }
}

impl std::fmt::Debug for IntervalTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalTimer")
            .field("state", &self.state)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
