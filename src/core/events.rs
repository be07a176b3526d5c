//! Lifecycle events emitted by the scheduling core.
//!
//! The core has no formatting responsibility: it records discrete events
//! through an [`EventSink`] and leaves rendering to whatever display layer
//! the caller wires in.

use std::collections::VecDeque;

use serde::Serialize;

use crate::core::{PassengerId, StageName};
use crate::util::clock::now_ms;

/// A discrete lifecycle transition inside the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlowEvent {
    /// A passenger joined the priority admission queue.
    AdmittedToAdmission {
        /// Passenger identity.
        passenger: PassengerId,
        /// Passenger display name.
        name: String,
    },
    /// A passenger was enqueued at a stage.
    EnteredStage {
        /// Passenger identity.
        passenger: PassengerId,
        /// The stage entered.
        stage: StageName,
    },
    /// A passenger finished processing at a stage.
    FinishedStage {
        /// Passenger identity.
        passenger: PassengerId,
        /// The stage completed.
        stage: StageName,
    },
    /// One full admission → check-in → security → boarding pass completed.
    CycleCompleted {
        /// Zero-based cycle index.
        cycle: u32,
    },
}

/// Event recording abstraction.
pub trait EventSink: Send {
    /// Record one event.
    fn record(&mut self, event: FlowEvent);
}

/// A recorded event with its capture timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    /// The event.
    pub event: FlowEvent,
    /// Capture time, milliseconds since the Unix epoch.
    pub at_ms: u128,
}

/// Bounded in-memory sink for tests and development.
///
/// Keeps at most `max_events` records, discarding the oldest first.
pub struct InMemoryEventSink {
    records: VecDeque<EventRecord>,
    max_events: usize,
}

impl InMemoryEventSink {
    /// Create a sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Snapshot of stored records, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<EventRecord> {
        self.records.iter().cloned().collect()
    }

    /// Snapshot of stored events without timestamps, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<FlowEvent> {
        self.records.iter().map(|r| r.event.clone()).collect()
    }
}

impl EventSink for InMemoryEventSink {
    fn record(&mut self, event: FlowEvent) {
        if self.records.len() >= self.max_events {
            self.records.pop_front();
        }
        self.records.push_back(EventRecord {
            event,
            at_ms: now_ms(),
        });
    }
}

/// Sink that renders events as structured log lines via `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn record(&mut self, event: FlowEvent) {
        match &event {
            FlowEvent::AdmittedToAdmission { passenger, name } => {
                tracing::info!(%passenger, name = %name, "admitted to admission queue");
            }
            FlowEvent::EnteredStage { passenger, stage } => {
                tracing::info!(%passenger, %stage, "entered stage");
            }
            FlowEvent::FinishedStage { passenger, stage } => {
                tracing::info!(%passenger, %stage, "finished stage");
            }
            FlowEvent::CycleCompleted { cycle } => {
                tracing::info!(cycle, "cycle completed");
            }
        }
    }
}
