//! Engine error types.
//!
//! The engine distinguishes rejected input (configuration) from broken
//! invariants detected at use time (preconditions). Idempotent no-ops such
//! as pausing twice are not errors. Every error is surfaced synchronously
//! and leaves prior state unchanged.

use thiserror::Error;

/// Errors that can occur in the interval timer engine.
#[derive(Debug, Error)]
pub enum TimerError {
    /// A zero total duration or invalid set count was passed to `configure()`.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An operation found the engine in a state its contract forbids,
    /// e.g. recovery with a zero per-set duration.
    #[error("precondition violation: {0}")]
    PreconditionViolation(String),
}

impl TimerError {
    /// Returns true if this error was a rejected configuration.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }

    /// Returns true if this error was a broken precondition.
    #[must_use]
    pub fn is_precondition_error(&self) -> bool {
        matches!(self, Self::PreconditionViolation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TimerError::InvalidConfiguration("zero duration".to_string());
        assert!(err.to_string().contains("invalid configuration"));
        assert!(err.to_string().contains("zero duration"));

        let err = TimerError::PreconditionViolation("zero per-set duration".to_string());
        assert!(err.to_string().contains("precondition violation"));
        assert!(err.to_string().contains("zero per-set duration"));
    }

    #[test]
    fn test_is_configuration_error() {
        assert!(TimerError::InvalidConfiguration("x".into()).is_configuration_error());
        assert!(!TimerError::PreconditionViolation("x".into()).is_configuration_error());
    }

    #[test]
    fn test_is_precondition_error() {
        assert!(TimerError::PreconditionViolation("x".into()).is_precondition_error());
        assert!(!TimerError::InvalidConfiguration("x".into()).is_precondition_error());
    }
}
