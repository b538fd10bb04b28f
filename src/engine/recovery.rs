//! Background-drift recovery.
//!
//! When the host is suspended the 1 Hz clock stops, but wall-clock time
//! does not. On resume the correct set and remaining time are recomputed
//! from the elapsed gap in one step. Catch-up is silent: no per-tick alert
//! events are replayed for the skipped seconds.

use tracing::debug;

use super::error::TimerError;

/// Result of recomputing timer progress over an elapsed gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveredTimer {
    /// Whether the gap consumed the whole session
    pub finished: bool,
    /// Number of fully completed sets within the gap
    pub sets_completed: u32,
    /// Set in progress after the gap, 1-indexed (last set when finished)
    pub current_set: u32,
    /// Seconds left in that set (0 when finished)
    pub time_left_in_set: u32,
}

/// Recomputes set progression for `elapsed_secs` of running time.
///
/// `elapsed_secs` is measured from the start of set 1; use
/// `now - session_start` when recomputing from the absolute start.
///
/// # Errors
///
/// Returns `TimerError::PreconditionViolation` when `seconds_per_set` is
/// zero or `number_of_sets` is less than 1; the division below has no
/// meaning for an unconfigured timer.
pub fn recover_timer(
    seconds_per_set: u32,
    number_of_sets: u32,
    elapsed_secs: u64,
) -> Result<RecoveredTimer, TimerError> {
    if seconds_per_set == 0 {
        return Err(TimerError::PreconditionViolation(
            "cannot recover with a zero per-set duration".to_string(),
        ));
    }
    if number_of_sets < 1 {
        return Err(TimerError::PreconditionViolation(
            "cannot recover with fewer than one set".to_string(),
        ));
    }

    let per_set = u64::from(seconds_per_set);
    let sets_completed = elapsed_secs / per_set;

    let recovered = if sets_completed >= u64::from(number_of_sets) {
        RecoveredTimer {
            finished: true,
            sets_completed: number_of_sets,
            current_set: number_of_sets,
            time_left_in_set: 0,
        }
    } else {
        let into_set = (elapsed_secs % per_set) as u32;
        RecoveredTimer {
            finished: false,
            sets_completed: sets_completed as u32,
            current_set: sets_completed as u32 + 1,
            time_left_in_set: seconds_per_set - into_set,
        }
    };

    debug!(
        elapsed_secs,
        sets_completed = recovered.sets_completed,
        current_set = recovered.current_set,
        time_left = recovered.time_left_in_set,
        "recomputed timer progress after gap"
    );

    Ok(recovered)
}
