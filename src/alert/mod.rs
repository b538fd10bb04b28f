//! Alert event emission for the interval timer engine.
//!
//! The engine never touches audio or notification APIs. Instead it emits
//! discrete semantic events through an injected [`AlertSink`], and the host
//! maps those events to actual sound playback or notification presentation.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  IntervalTimer   │ ← emits at threshold crossings
//! └────────┬─────────┘
//!          │ AlertEvent
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │    AlertSink     │────▶│  TokioAlertSink  │ (async hosts)
//! │     (trait)      │     ├──────────────────┤
//! │                  │────▶│ CrossbeamAlertSink│ (dedicated audio thread)
//! │                  │     ├──────────────────┤
//! │                  │────▶│  MockAlertSink   │ (tests)
//! └──────────────────┘     └──────────────────┘
//! ```
//!
//! Delivery is fire-and-forget: a sink must never block the tick path, and
//! a disconnected consumer only produces a log line, never an error back
//! into the state machine.

mod event;
mod sink;

pub use event::AlertEvent;
pub use sink::{CrossbeamAlertSink, MockAlertSink, NullAlertSink, TokioAlertSink};

/// Trait for alert delivery implementations.
///
/// This trait abstracts how emitted events reach the host, allowing for
/// different implementations (channel-backed, mock for testing).
pub trait AlertSink: Send {
    /// Delivers one alert event to the host.
    ///
    /// Must not block. Failures are swallowed by the implementation; the
    /// engine treats emission as a pure side channel.
    fn alert(&self, event: AlertEvent);
}
