//! Alert event definitions.

use serde::{Deserialize, Serialize};

/// Semantic alert events emitted by the countdown.
///
/// The host maps these to sounds or notifications; the engine only decides
/// *when* they fire. At most one event is emitted per tick, in a fixed
/// priority order (blip, then round-incoming, then completion events).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertEvent {
    /// Countdown is about to hit a boundary (3, 2, 1 seconds left)
    ShortBlip,
    /// Ten seconds left in the current set
    RoundIncoming,
    /// A set just completed and the next one begins
    NewRound,
    /// The session finished, or the clock fired without a started timer
    SessionBoundary,
}

impl AlertEvent {
    /// Returns the string representation of the event.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertEvent::ShortBlip => "short_blip",
            AlertEvent::RoundIncoming => "round_incoming",
            AlertEvent::NewRound => "new_round",
            AlertEvent::SessionBoundary => "session_boundary",
        }
    }
}
