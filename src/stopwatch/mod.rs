//! Elapsed-time stopwatch.
//!
//! A wall-clock accumulator that survives pause/resume cycles and host
//! suspension. While running, only the instant of the most recent resume
//! is stored; the elapsed total is folded in when the stopwatch pauses or
//! catches up after a suspension gap. Reading the elapsed time never
//! mutates state.
//!
//! All operations take `now` as an argument; the stopwatch never reads
//! the clock itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::format_clock;

/// Pause/resume-aware elapsed-time accumulator.
///
/// Invariant: while paused, `elapsed_seconds` is exact; while running, the
/// true total is `elapsed_seconds + (now - last_resume)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stopwatch {
    /// Accumulated elapsed seconds up to the last fold
    elapsed_seconds: f64,
    /// Whether the stopwatch is paused
    is_paused: bool,
    /// Wall-clock instant of the most recent resume; only meaningful
    /// while running
    #[serde(skip_serializing_if = "Option::is_none")]
    last_resume: Option<DateTime<Utc>>,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Creates a paused stopwatch with zero elapsed time.
    pub fn new() -> Self {
        Self {
            elapsed_seconds: 0.0,
            is_paused: true,
            last_resume: None,
        }
    }

    /// Rebuilds a stopwatch from persisted fields.
    ///
    /// Negative elapsed values are clamped to zero; a paused stopwatch
    /// discards any leftover resume instant.
    pub fn from_parts(
        elapsed_seconds: f64,
        is_paused: bool,
        last_resume: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            elapsed_seconds: elapsed_seconds.max(0.0),
            is_paused,
            last_resume: if is_paused { None } else { last_resume },
        }
    }

    /// Starts accumulating from `now`. No-op if already running.
    pub fn start(&mut self, now: DateTime<Utc>) {
        if self.is_paused {
            self.is_paused = false;
            self.last_resume = Some(now);
            debug!(elapsed = self.elapsed_seconds, "stopwatch running");
        }
    }

    /// Folds the running segment into the total and pauses.
    /// No-op if already paused.
    pub fn pause(&mut self, now: DateTime<Utc>) {
        if !self.is_paused {
            self.elapsed_seconds += Self::segment_secs(self.last_resume, now);
            self.is_paused = true;
            self.last_resume = None;
            debug!(elapsed = self.elapsed_seconds, "stopwatch paused");
        }
    }

    /// Equivalent to `start()` when currently paused.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        self.start(now);
    }

    /// Clears the elapsed total and pauses.
    pub fn reset(&mut self) {
        self.elapsed_seconds = 0.0;
        self.is_paused = true;
        self.last_resume = None;
        debug!("stopwatch reset");
    }

    /// Resumes if paused, pauses otherwise.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        if self.is_paused {
            self.resume(now);
        } else {
            self.pause(now);
        }
    }

    /// Total elapsed seconds at `now`. Never mutates state.
    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> f64 {
        if self.is_paused {
            self.elapsed_seconds
        } else {
            self.elapsed_seconds + Self::segment_secs(self.last_resume, now)
        }
    }

    /// Elapsed time at `now` as a clock string (hour field omitted when
    /// zero).
    #[must_use]
    pub fn display_string(&self, now: DateTime<Utc>) -> String {
        format_clock(self.elapsed(now) as u64)
    }

    /// Folds a suspension gap into the total without pausing.
    ///
    /// Used after the host process was suspended: the running segment up
    /// to `now` is accumulated and the resume instant is moved forward.
    /// No-op while paused.
    pub fn catch_up(&mut self, now: DateTime<Utc>) {
        if !self.is_paused {
            self.elapsed_seconds += Self::segment_secs(self.last_resume, now);
            self.last_resume = Some(now);
            debug!(elapsed = self.elapsed_seconds, "stopwatch caught up");
        }
    }

    /// Returns true if the stopwatch is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Accumulated seconds up to the last fold (excludes any running
    /// segment). This is the value the persistence snapshot carries.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    /// Wall-clock instant of the most recent resume, if running.
    #[must_use]
    pub fn last_resume(&self) -> Option<DateTime<Utc>> {
        self.last_resume
    }

    /// Seconds between the resume instant and `now`, clamped to zero for
    /// clock skew.
    fn segment_secs(last_resume: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
        match last_resume {
            Some(since) => ((now - since).num_milliseconds() as f64 / 1000.0).max(0.0),
            None => 0.0,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
