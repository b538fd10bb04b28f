//! Alert sink implementations.
//!
//! Channel-backed sinks for async and dedicated-thread consumers, a
//! recording mock for tests, and a discarding sink for hosts that run
//! with alerts fully disabled.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use super::event::AlertEvent;
use super::AlertSink;

// ============================================================================
// TokioAlertSink
// ============================================================================

/// Alert sink backed by an unbounded tokio mpsc channel.
///
/// Suited to hosts that consume events inside an async runtime. Sending
/// never blocks; if the receiver has been dropped the event is discarded
/// with a warning.
#[derive(Debug, Clone)]
pub struct TokioAlertSink {
    tx: tokio::sync::mpsc::UnboundedSender<AlertEvent>,
}

impl TokioAlertSink {
    /// Creates a sink and the receiver the host consumes events from.
    #[must_use]
    pub fn channel() -> (Self, tokio::sync::mpsc::UnboundedReceiver<AlertEvent>) {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl AlertSink for TokioAlertSink {
    fn alert(&self, event: AlertEvent) {
        if self.tx.send(event).is_err() {
            warn!("alert receiver dropped, discarding {}", event.as_str());
        }
    }
}

// ============================================================================
// CrossbeamAlertSink
// ============================================================================

/// Alert sink backed by an unbounded crossbeam channel.
///
/// Suited to hosts that play sounds on a dedicated consumer thread outside
/// any async runtime.
#[derive(Debug, Clone)]
pub struct CrossbeamAlertSink {
    tx: crossbeam_channel::Sender<AlertEvent>,
}

impl CrossbeamAlertSink {
    /// Creates a sink and the receiver the consumer thread reads from.
    #[must_use]
    pub fn channel() -> (Self, crossbeam_channel::Receiver<AlertEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }
}

impl AlertSink for CrossbeamAlertSink {
    fn alert(&self, event: AlertEvent) {
        if self.tx.send(event).is_err() {
            warn!("alert receiver dropped, discarding {}", event.as_str());
        }
    }
}

// ============================================================================
// MockAlertSink
// ============================================================================

/// Recording sink for tests.
///
/// Clones share the same underlying buffer, so a test can hand one clone
/// to the engine and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MockAlertSink {
    events: Arc<Mutex<Vec<AlertEvent>>>,
}

impl MockAlertSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<AlertEvent> {
        self.events.lock().expect("alert buffer poisoned").clone()
    }

    /// Discards all recorded events.
    pub fn clear(&self) {
        self.events.lock().expect("alert buffer poisoned").clear();
    }

    /// Returns the most recently recorded event, if any.
    #[must_use]
    pub fn last(&self) -> Option<AlertEvent> {
        self.events
            .lock()
            .expect("alert buffer poisoned")
            .last()
            .copied()
    }
}

impl AlertSink for MockAlertSink {
    fn alert(&self, event: AlertEvent) {
        self.events.lock().expect("alert buffer poisoned").push(event);
    }
}

// ============================================================================
// NullAlertSink
// ============================================================================

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAlertSink;

impl AlertSink for NullAlertSink {
    fn alert(&self, event: AlertEvent) {
        debug!("alerts disabled, dropping {}", event.as_str());
    }
}

// ============================================================================
// Tests
// ============================================================================
