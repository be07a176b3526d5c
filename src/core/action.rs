//! Pluggable per-passenger processing actions.

use std::time::Duration;

use crate::core::{Passenger, StageName};

/// The work a stage performs on each passenger it serves.
///
/// Stages call this exactly once per passenger while holding a resource
/// permit. Implementations must always complete; the core has no
/// cancellation or timeout semantics. Separating the action from the
/// scheduling loop keeps the scheduler deterministic under test while still
/// allowing wall-clock pacing in a live simulation.
pub trait ProcessingAction: Send {
    /// Process one passenger at the given stage.
    fn perform(&self, passenger: &Passenger, stage: StageName);
}

/// Completes immediately. The default for tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantAction;

impl ProcessingAction for InstantAction {
    fn perform(&self, _passenger: &Passenger, _stage: StageName) {}
}

/// Sleeps for a fixed service time per passenger, simulating a counter,
/// lane, or gate taking real time to serve someone.
#[derive(Debug, Clone, Copy)]
pub struct DelayAction {
    delay: Duration,
}

impl DelayAction {
    /// Create an action that blocks for `delay` per passenger.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The configured per-passenger service time.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl ProcessingAction for DelayAction {
    fn perform(&self, passenger: &Passenger, stage: StageName) {
        tracing::debug!(
            passenger = %passenger.name(),
            %stage,
            delay = ?self.delay,
            "serving passenger"
        );
        std::thread::sleep(self.delay);
    }
}
