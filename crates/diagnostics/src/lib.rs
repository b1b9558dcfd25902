// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Operator-facing diagnostic events.
//!
//! When a store operation fails in a way operators should review (a denied
//! write, an unreachable platform), the failure is recorded here as a
//! side-channel event. Recording never replaces error propagation: the
//! failing operation still returns its error to the caller.

use std::sync::Mutex;
use time::OffsetDateTime;
use tracing::warn;

/// A single operator-facing diagnostic event.
///
/// Events are immutable once created and capture which operation failed,
/// against which collection, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    /// When the failure was observed.
    pub occurred_at: OffsetDateTime,
    /// The operation that failed (e.g., "create", "update_status").
    pub operation: String,
    /// The storage collection the operation targeted.
    pub collection: String,
    /// Human-readable failure detail.
    pub detail: String,
}

impl DiagnosticEvent {
    /// Creates a new `DiagnosticEvent` stamped with the current time.
    ///
    /// # Arguments
    ///
    /// * `operation` - The operation that failed
    /// * `collection` - The collection the operation targeted
    /// * `detail` - Human-readable failure detail
    #[must_use]
    pub fn new(operation: &str, collection: &str, detail: &str) -> Self {
        Self {
            occurred_at: OffsetDateTime::now_utc(),
            operation: operation.to_string(),
            collection: collection.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Destination for diagnostic events.
///
/// Implementations must be cheap and infallible; a sink that cannot record
/// an event drops it rather than failing the originating operation.
pub trait DiagnosticSink: Send + Sync {
    /// Records one event.
    fn record(&self, event: DiagnosticEvent);
}

/// Sink that emits every event as a `tracing` warning.
///
/// This is the production sink: operators review the events through
/// whatever subscriber the process installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates a new `TracingSink`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn record(&self, event: DiagnosticEvent) {
        warn!(
            operation = %event.operation,
            collection = %event.collection,
            detail = %event.detail,
            "Store operation failed"
        );
    }
}

/// Sink that buffers events in memory.
///
/// Used by tests to assert that a failing operation was recorded for
/// operators.
#[derive(Debug, Default)]
pub struct BufferSink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl BufferSink {
    /// Creates an empty `BufferSink`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded event, in recording order.
    ///
    /// Returns an empty list if the buffer lock was poisoned.
    #[must_use]
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    /// Returns true if no events were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for BufferSink {
    fn record(&self, event: DiagnosticEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation_captures_all_fields() {
        let event: DiagnosticEvent =
            DiagnosticEvent::new("create", "grievances", "permission denied");

        assert_eq!(event.operation, "create");
        assert_eq!(event.collection, "grievances");
        assert_eq!(event.detail, "permission denied");
    }

    #[test]
    fn test_buffer_sink_starts_empty() {
        let sink: BufferSink = BufferSink::new();
        assert!(sink.is_empty());
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn test_buffer_sink_records_in_order() {
        let sink: BufferSink = BufferSink::new();
        sink.record(DiagnosticEvent::new("create", "appointments", "first"));
        sink.record(DiagnosticEvent::new("delete", "grievances", "second"));

        let events: Vec<DiagnosticEvent> = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].detail, "first");
        assert_eq!(events[1].detail, "second");
    }

    #[test]
    fn test_tracing_sink_accepts_events() {
        let sink: TracingSink = TracingSink::new();
        sink.record(DiagnosticEvent::new("create", "appointments", "timeout"));
    }
}
