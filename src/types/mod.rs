//! Core data types for the interval timer engine.
//!
//! This module defines the data structures used for:
//! - Timer phase and state management
//! - Timer configuration with validation
//! - Persistence snapshot serialization

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Grace period between `start()` and the countdown actually beginning,
/// in seconds. Gives the user time to get into position.
pub const DEFAULT_START_DELAY_SECS: u32 = 5;

// ============================================================================
// TimerPhase
// ============================================================================

/// Represents the current phase of the interval timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// No configuration loaded
    Idle,
    /// Configured but not yet counting down (includes the start delay)
    Configuring,
    /// Actively counting down
    Running,
    /// Countdown suspended, progress preserved
    Paused,
    /// All sets exhausted
    Finished,
}

impl TimerPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Configuring => "configuring",
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
            TimerPhase::Finished => "finished",
        }
    }

    /// Returns true if the timer is actively counting down.
    pub fn is_active(&self) -> bool {
        matches!(self, TimerPhase::Running)
    }

    /// Returns true if a session is underway (running or paused).
    pub fn is_started(&self) -> bool {
        matches!(self, TimerPhase::Running | TimerPhase::Paused)
    }
}

impl Default for TimerPhase {
    fn default() -> Self {
        TimerPhase::Idle
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Configuration for one interval-timer session.
///
/// The per-set duration is given in hour/minute/second parts, the way the
/// duration picker presents it to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Hours component of the per-set duration
    pub hours: u32,
    /// Minutes component of the per-set duration
    pub minutes: u32,
    /// Seconds component of the per-set duration
    pub seconds: u32,
    /// Number of sets in the session (>= 1)
    pub sets: u32,
    /// Whether alert events are emitted during the countdown
    pub alerts_enabled: bool,
    /// Grace period before the countdown begins, in seconds
    pub start_delay_secs: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 30,
            sets: 1,
            alerts_enabled: true,
            start_delay_secs: DEFAULT_START_DELAY_SECS,
        }
    }
}

impl TimerConfig {
    /// Creates a new configuration with the specified per-set duration.
    pub fn with_duration(mut self, hours: u32, minutes: u32, seconds: u32) -> Self {
        self.hours = hours;
        self.minutes = minutes;
        self.seconds = seconds;
        self
    }

    /// Creates a new configuration with the specified set count.
    pub fn with_sets(mut self, sets: u32) -> Self {
        self.sets = sets;
        self
    }

    /// Creates a new configuration with alerts enabled or disabled.
    pub fn with_alerts(mut self, enabled: bool) -> Self {
        self.alerts_enabled = enabled;
        self
    }

    /// Creates a new configuration with a custom start delay.
    pub fn with_start_delay(mut self, secs: u32) -> Self {
        self.start_delay_secs = secs;
        self
    }

    /// Total per-set duration in seconds.
    #[must_use]
    pub fn seconds_per_set(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.seconds_per_set() == 0 {
            return Err("per-set duration must be greater than zero".to_string());
        }
        if self.sets < 1 {
            return Err("set count must be at least 1".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Represents the current state of the interval timer.
///
/// Display values (clock string, hour/minute/second decomposition, progress
/// percentage) are derived on demand and never stored, so they cannot drift
/// out of sync with the counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerState {
    /// Current phase of the timer
    pub phase: TimerPhase,
    /// Configured per-set duration in seconds (0 before configuration)
    pub seconds_per_set: u32,
    /// Remaining seconds in the current set
    pub time_left_in_set: u32,
    /// Number of sets in the session
    pub number_of_sets: u32,
    /// Current set, 1-indexed
    pub current_set: u32,
    /// Whether alert events are emitted
    pub alerts_enabled: bool,
    /// Wall-clock instant the running phase began.
    ///
    /// Re-anchored on resume so that `now - session_start` always equals
    /// the accumulated running time of the session, pauses excluded.
    pub session_start: Option<DateTime<Utc>>,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerState {
    /// Creates a new TimerState in the idle phase.
    pub fn new() -> Self {
        Self {
            phase: TimerPhase::Idle,
            seconds_per_set: 0,
            time_left_in_set: 0,
            number_of_sets: 0,
            current_set: 0,
            alerts_enabled: true,
            session_start: None,
        }
    }

    /// Loads a validated configuration, entering the configuring phase.
    pub fn apply_config(&mut self, config: &TimerConfig) {
        self.seconds_per_set = config.seconds_per_set();
        self.number_of_sets = config.sets;
        self.time_left_in_set = self.seconds_per_set;
        self.current_set = 1;
        self.alerts_enabled = config.alerts_enabled;
        self.session_start = None;
        self.phase = TimerPhase::Configuring;
    }

    /// Enters the running phase at the given wall-clock instant.
    pub fn begin_running(&mut self, now: DateTime<Utc>) {
        self.phase = TimerPhase::Running;
        self.time_left_in_set = self.seconds_per_set;
        self.current_set = 1;
        self.session_start = Some(now);
    }

    /// Pauses the countdown. Only effective while running.
    pub fn pause(&mut self) {
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Paused;
        }
    }

    /// Resumes a paused countdown at the given wall-clock instant.
    ///
    /// `session_start` is moved forward so that `now - session_start`
    /// still equals the running time accumulated before the pause.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        if self.phase == TimerPhase::Paused {
            self.phase = TimerPhase::Running;
            let elapsed = Duration::seconds(i64::from(self.running_elapsed_secs()));
            self.session_start = Some(now - elapsed);
        }
    }

    /// Decrements the countdown by one second.
    ///
    /// Returns true if the current set has completed (reached 0).
    pub fn decrement(&mut self) -> bool {
        self.time_left_in_set = self.time_left_in_set.saturating_sub(1);
        self.time_left_in_set == 0
    }

    /// Advances to the next set, restoring the full per-set countdown.
    pub fn advance_set(&mut self) {
        self.current_set += 1;
        self.time_left_in_set = self.seconds_per_set;
    }

    /// Marks the session finished.
    pub fn finish(&mut self) {
        self.phase = TimerPhase::Finished;
        self.time_left_in_set = 0;
        self.current_set = self.number_of_sets;
    }

    /// Resets to the idle phase, discarding all configuration.
    pub fn reset(&mut self) {
        self.phase = TimerPhase::Idle;
        self.seconds_per_set = 0;
        self.time_left_in_set = 0;
        self.number_of_sets = 0;
        self.current_set = 0;
        self.session_start = None;
    }

    /// Returns true if the timer is actively counting down.
    pub fn is_running(&self) -> bool {
        self.phase.is_active()
    }

    /// Returns true if the timer is paused.
    pub fn is_paused(&self) -> bool {
        self.phase == TimerPhase::Paused
    }

    /// Returns true if the session has finished.
    pub fn is_finished(&self) -> bool {
        self.phase == TimerPhase::Finished
    }

    /// Seconds of running time accumulated since the session began,
    /// derived from set progression rather than the wall clock.
    pub fn running_elapsed_secs(&self) -> u32 {
        if self.phase == TimerPhase::Finished {
            return self.seconds_per_set * self.number_of_sets;
        }
        let completed = self.current_set.saturating_sub(1) * self.seconds_per_set;
        completed + (self.seconds_per_set - self.time_left_in_set)
    }

    /// Seconds of running time left until the whole session completes.
    pub fn remaining_session_secs(&self) -> u32 {
        let later_sets =
            self.number_of_sets.saturating_sub(self.current_set) * self.seconds_per_set;
        self.time_left_in_set + later_sets
    }

    /// Hours component of the remaining time in the current set.
    #[must_use]
    pub fn hours(&self) -> u32 {
        self.time_left_in_set / 3600
    }

    /// Minutes component of the remaining time in the current set.
    #[must_use]
    pub fn minutes(&self) -> u32 {
        (self.time_left_in_set / 60) % 60
    }

    /// Seconds component of the remaining time in the current set.
    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.time_left_in_set % 60
    }

    /// Remaining time in the current set as a clock string.
    #[must_use]
    pub fn display_string(&self) -> String {
        format_clock(u64::from(self.time_left_in_set))
    }

    /// Progress through the current set as a percentage (0.0 - 100.0).
    ///
    /// Returns 0.0 when no duration is configured.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.seconds_per_set == 0 {
            return 0.0;
        }
        f64::from(self.seconds_per_set - self.time_left_in_set) / f64::from(self.seconds_per_set)
            * 100.0
    }
}

// ============================================================================
// SessionSnapshot
// ============================================================================

/// Flat, serializable capture of a whole session (timer + stopwatch).
///
/// This is the record handed to the persistence collaborator; the host may
/// serialize it to any storage. Derived display values are deliberately
/// excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Whether a session was underway (running or paused)
    pub started: bool,
    /// Whether the session had finished
    pub finished: bool,
    /// Whether the countdown was paused
    pub paused: bool,
    /// Number of sets in the session
    pub number_of_sets: u32,
    /// Current set, 1-indexed
    pub current_set: u32,
    /// Whether alert events are emitted
    pub alerts_enabled: bool,
    /// Remaining seconds in the current set
    pub time_left_in_set: u32,
    /// Configured per-set duration in seconds
    pub seconds_per_set: u32,
    /// Wall-clock instant the running phase began
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_start: Option<DateTime<Utc>>,
    /// Stopwatch: accumulated elapsed seconds
    pub stopwatch_elapsed_seconds: f64,
    /// Stopwatch: whether it was paused
    pub stopwatch_is_paused: bool,
    /// Stopwatch: wall-clock instant of the most recent resume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopwatch_last_resume: Option<DateTime<Utc>>,
}

impl SessionSnapshot {
    /// Reconstructs the timer phase encoded by the flag fields.
    ///
    /// A snapshot taken before `start` restores to `Configuring` when a
    /// duration was present, `Idle` otherwise.
    #[must_use]
    pub fn phase(&self) -> TimerPhase {
        if self.finished {
            TimerPhase::Finished
        } else if self.started {
            if self.paused {
                TimerPhase::Paused
            } else {
                TimerPhase::Running
            }
        } else if self.seconds_per_set > 0 {
            TimerPhase::Configuring
        } else {
            TimerPhase::Idle
        }
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats a second count as a clock string.
///
/// The hour field is omitted entirely when zero: `1:05:09`, `05:09`.
#[must_use]
pub fn format_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // TimerPhase Tests
    // ------------------------------------------------------------------------

    mod timer_phase_tests {
        use super::*;

        #[test]
        fn test_default_is_idle() {
            assert_eq!(TimerPhase::default(), TimerPhase::Idle);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(TimerPhase::Idle.as_str(), "idle");
            assert_eq!(TimerPhase::Configuring.as_str(), "configuring");
            assert_eq!(TimerPhase::Running.as_str(), "running");
            assert_eq!(TimerPhase::Paused.as_str(), "paused");
            assert_eq!(TimerPhase::Finished.as_str(), "finished");
        }

        #[test]
        fn test_is_active() {
            assert!(TimerPhase::Running.is_active());
            assert!(!TimerPhase::Idle.is_active());
            assert!(!TimerPhase::Configuring.is_active());
            assert!(!TimerPhase::Paused.is_active());
            assert!(!TimerPhase::Finished.is_active());
        }

        #[test]
        fn test_is_started() {
            assert!(TimerPhase::Running.is_started());
            assert!(TimerPhase::Paused.is_started());
            assert!(!TimerPhase::Idle.is_started());
            assert!(!TimerPhase::Configuring.is_started());
            assert!(!TimerPhase::Finished.is_started());
        }

        #[test]
        fn test_serialize_deserialize() {
            let phase = TimerPhase::Running;
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, "\"running\"");

            let deserialized: TimerPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, TimerPhase::Running);
        }
    }

    // ------------------------------------------------------------------------
    // TimerConfig Tests
    // ------------------------------------------------------------------------

    mod timer_config_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let config = TimerConfig::default();
            assert_eq!(config.hours, 0);
            assert_eq!(config.minutes, 0);
            assert_eq!(config.seconds, 30);
            assert_eq!(config.sets, 1);
            assert!(config.alerts_enabled);
            assert_eq!(config.start_delay_secs, DEFAULT_START_DELAY_SECS);
        }

        #[test]
        fn test_builder_pattern() {
            let config = TimerConfig::default()
                .with_duration(1, 2, 3)
                .with_sets(4)
                .with_alerts(false)
                .with_start_delay(10);

            assert_eq!(config.hours, 1);
            assert_eq!(config.minutes, 2);
            assert_eq!(config.seconds, 3);
            assert_eq!(config.sets, 4);
            assert!(!config.alerts_enabled);
            assert_eq!(config.start_delay_secs, 10);
        }

        #[test]
        fn test_seconds_per_set() {
            let config = TimerConfig::default().with_duration(1, 30, 15);
            assert_eq!(config.seconds_per_set(), 3600 + 30 * 60 + 15);
        }

        #[test]
        fn test_validate_success() {
            assert!(TimerConfig::default().validate().is_ok());
        }

        #[test]
        fn test_validate_minimum_duration() {
            // One second in a single unit is enough
            let config = TimerConfig::default().with_duration(0, 0, 1);
            assert!(config.validate().is_ok());

            let config = TimerConfig::default().with_duration(0, 1, 0);
            assert!(config.validate().is_ok());

            let config = TimerConfig::default().with_duration(1, 0, 0);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_validate_zero_duration() {
            let config = TimerConfig::default().with_duration(0, 0, 0);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_zero_sets() {
            let config = TimerConfig::default().with_sets(0);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_serialize_deserialize() {
            let config = TimerConfig::default().with_duration(0, 5, 0).with_sets(3);
            let json = serde_json::to_string(&config).unwrap();
            let deserialized: TimerConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config, deserialized);
        }
    }

    // ------------------------------------------------------------------------
    // TimerState Tests
    // ------------------------------------------------------------------------

    mod timer_state_tests {
        use super::*;

        fn configured_state() -> TimerState {
            let mut state = TimerState::new();
            state.apply_config(&TimerConfig::default().with_duration(0, 0, 30).with_sets(3));
            state
        }

        #[test]
        fn test_new_state() {
            let state = TimerState::new();
            assert_eq!(state.phase, TimerPhase::Idle);
            assert_eq!(state.seconds_per_set, 0);
            assert_eq!(state.time_left_in_set, 0);
            assert_eq!(state.number_of_sets, 0);
            assert_eq!(state.current_set, 0);
            assert!(state.session_start.is_none());
        }

        #[test]
        fn test_apply_config() {
            let state = configured_state();
            assert_eq!(state.phase, TimerPhase::Configuring);
            assert_eq!(state.seconds_per_set, 30);
            assert_eq!(state.time_left_in_set, 30);
            assert_eq!(state.number_of_sets, 3);
            assert_eq!(state.current_set, 1);
        }

        #[test]
        fn test_begin_running() {
            let mut state = configured_state();
            let now = Utc::now();
            state.begin_running(now);

            assert_eq!(state.phase, TimerPhase::Running);
            assert_eq!(state.time_left_in_set, 30);
            assert_eq!(state.current_set, 1);
            assert_eq!(state.session_start, Some(now));
        }

        #[test]
        fn test_pause_only_while_running() {
            let mut state = configured_state();
            state.pause();
            assert_eq!(state.phase, TimerPhase::Configuring);

            state.begin_running(Utc::now());
            state.pause();
            assert_eq!(state.phase, TimerPhase::Paused);
        }

        #[test]
        fn test_resume_reanchors_session_start() {
            let mut state = configured_state();
            let start = Utc::now();
            state.begin_running(start);

            // 40 seconds of running time: set 2, 20 seconds left
            state.current_set = 2;
            state.time_left_in_set = 20;
            state.pause();

            let resume_at = start + Duration::seconds(300);
            state.resume(resume_at);

            assert_eq!(state.phase, TimerPhase::Running);
            let anchored = state.session_start.unwrap();
            assert_eq!((resume_at - anchored).num_seconds(), 40);
        }

        #[test]
        fn test_resume_from_non_paused_does_nothing() {
            let mut state = configured_state();
            let now = Utc::now();
            state.begin_running(now);

            state.resume(now + Duration::seconds(100));
            assert_eq!(state.session_start, Some(now));
        }

        #[test]
        fn test_decrement() {
            let mut state = configured_state();
            state.begin_running(Utc::now());
            state.time_left_in_set = 2;

            assert!(!state.decrement());
            assert_eq!(state.time_left_in_set, 1);

            assert!(state.decrement());
            assert_eq!(state.time_left_in_set, 0);
        }

        #[test]
        fn test_decrement_never_negative() {
            let mut state = configured_state();
            state.time_left_in_set = 0;
            assert!(state.decrement());
            assert_eq!(state.time_left_in_set, 0);
        }

        #[test]
        fn test_advance_set() {
            let mut state = configured_state();
            state.begin_running(Utc::now());
            state.time_left_in_set = 0;

            state.advance_set();
            assert_eq!(state.current_set, 2);
            assert_eq!(state.time_left_in_set, 30);
        }

        #[test]
        fn test_finish() {
            let mut state = configured_state();
            state.begin_running(Utc::now());
            state.current_set = 3;
            state.time_left_in_set = 0;

            state.finish();
            assert_eq!(state.phase, TimerPhase::Finished);
            assert_eq!(state.time_left_in_set, 0);
            assert_eq!(state.current_set, 3);
        }

        #[test]
        fn test_reset() {
            let mut state = configured_state();
            state.begin_running(Utc::now());
            state.reset();

            assert_eq!(state.phase, TimerPhase::Idle);
            assert_eq!(state.seconds_per_set, 0);
            assert_eq!(state.time_left_in_set, 0);
            assert!(state.session_start.is_none());
        }

        #[test]
        fn test_running_elapsed_secs() {
            let mut state = configured_state();
            state.begin_running(Utc::now());
            assert_eq!(state.running_elapsed_secs(), 0);

            state.current_set = 2;
            state.time_left_in_set = 20;
            assert_eq!(state.running_elapsed_secs(), 40);

            state.finish();
            assert_eq!(state.running_elapsed_secs(), 90);
        }

        #[test]
        fn test_remaining_session_secs() {
            let mut state = configured_state();
            state.begin_running(Utc::now());
            assert_eq!(state.remaining_session_secs(), 90);

            state.current_set = 2;
            state.time_left_in_set = 20;
            assert_eq!(state.remaining_session_secs(), 50);
        }

        #[test]
        fn test_time_decomposition() {
            let mut state = TimerState::new();
            state.seconds_per_set = 4000;
            state.time_left_in_set = 3725;

            assert_eq!(state.hours(), 1);
            assert_eq!(state.minutes(), 2);
            assert_eq!(state.seconds(), 5);
            assert_eq!(state.display_string(), "1:02:05");
        }

        #[test]
        fn test_display_string_omits_zero_hour() {
            let mut state = TimerState::new();
            state.seconds_per_set = 600;
            state.time_left_in_set = 309;
            assert_eq!(state.display_string(), "05:09");
        }

        #[test]
        fn test_progress_percent() {
            let mut state = configured_state();
            assert_eq!(state.progress_percent(), 0.0);

            state.time_left_in_set = 15;
            assert_eq!(state.progress_percent(), 50.0);

            state.time_left_in_set = 0;
            assert_eq!(state.progress_percent(), 100.0);
        }

        #[test]
        fn test_progress_percent_unconfigured() {
            let state = TimerState::new();
            assert_eq!(state.progress_percent(), 0.0);
        }
    }

    // ------------------------------------------------------------------------
    // SessionSnapshot Tests
    // ------------------------------------------------------------------------

    mod session_snapshot_tests {
        use super::*;

        fn base_snapshot() -> SessionSnapshot {
            SessionSnapshot {
                started: false,
                finished: false,
                paused: false,
                number_of_sets: 3,
                current_set: 1,
                alerts_enabled: true,
                time_left_in_set: 30,
                seconds_per_set: 30,
                session_start: None,
                stopwatch_elapsed_seconds: 0.0,
                stopwatch_is_paused: true,
                stopwatch_last_resume: None,
            }
        }

        #[test]
        fn test_phase_running() {
            let snapshot = SessionSnapshot {
                started: true,
                ..base_snapshot()
            };
            assert_eq!(snapshot.phase(), TimerPhase::Running);
        }

        #[test]
        fn test_phase_paused() {
            let snapshot = SessionSnapshot {
                started: true,
                paused: true,
                ..base_snapshot()
            };
            assert_eq!(snapshot.phase(), TimerPhase::Paused);
        }

        #[test]
        fn test_phase_finished_wins() {
            let snapshot = SessionSnapshot {
                started: false,
                finished: true,
                ..base_snapshot()
            };
            assert_eq!(snapshot.phase(), TimerPhase::Finished);
        }

        #[test]
        fn test_phase_configuring_when_duration_present() {
            assert_eq!(base_snapshot().phase(), TimerPhase::Configuring);
        }

        #[test]
        fn test_phase_idle_without_duration() {
            let snapshot = SessionSnapshot {
                seconds_per_set: 0,
                time_left_in_set: 0,
                ..base_snapshot()
            };
            assert_eq!(snapshot.phase(), TimerPhase::Idle);
        }

        #[test]
        fn test_serialize_uses_camel_case() {
            let snapshot = base_snapshot();
            let json = serde_json::to_string(&snapshot).unwrap();
            assert!(json.contains("\"numberOfSets\":3"));
            assert!(json.contains("\"timeLeftInSet\":30"));
            assert!(json.contains("\"stopwatchIsPaused\":true"));
            // Absent instants are omitted rather than serialized as null
            assert!(!json.contains("sessionStart"));
        }

        #[test]
        fn test_round_trip() {
            let snapshot = SessionSnapshot {
                started: true,
                session_start: Some(Utc::now()),
                stopwatch_elapsed_seconds: 12.5,
                ..base_snapshot()
            };
            let json = serde_json::to_string(&snapshot).unwrap();
            let deserialized: SessionSnapshot = serde_json::from_str(&json).unwrap();
            assert_eq!(snapshot, deserialized);
        }
    }

    // ------------------------------------------------------------------------
    // Formatting Tests
    // ------------------------------------------------------------------------

    mod format_clock_tests {
        use super::*;

        #[test]
        fn test_zero() {
            assert_eq!(format_clock(0), "00:00");
        }

        #[test]
        fn test_minutes_and_seconds() {
            assert_eq!(format_clock(65), "01:05");
            assert_eq!(format_clock(599), "09:59");
        }

        #[test]
        fn test_hour_field_unpadded() {
            assert_eq!(format_clock(3600), "1:00:00");
            assert_eq!(format_clock(7325), "2:02:05");
        }
    }
}
