//! Pipeline stages: a FIFO holding queue gated by a resource token pool.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{FlowError, Passenger, ProcessingAction, ResourceTokens};

/// The three fixed pipeline stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageName {
    /// Check-in counters.
    CheckIn,
    /// Security lanes.
    Security,
    /// Boarding gates.
    Boarding,
}

impl StageName {
    /// Human-readable label, as shown in events and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CheckIn => "Check-in",
            Self::Security => "Security",
            Self::Boarding => "Boarding",
        }
    }
}

impl fmt::Display for StageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One pipeline stage: arrival-ordered queue plus a bounded token pool.
#[derive(Debug)]
pub struct Stage {
    name: StageName,
    tokens: ResourceTokens,
    queue: VecDeque<Passenger>,
}

impl Stage {
    /// Create a stage with `units` interchangeable resource units.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidCapacity`] when `units` is zero.
    pub fn new(name: StageName, units: u32) -> Result<Self, FlowError> {
        Ok(Self {
            name,
            tokens: ResourceTokens::new(name.label(), units)?,
            queue: VecDeque::new(),
        })
    }

    /// Stage identity.
    #[must_use]
    pub const fn name(&self) -> StageName {
        self.name
    }

    /// The stage's token pool.
    #[must_use]
    pub const fn tokens(&self) -> &ResourceTokens {
        &self.tokens
    }

    /// Append a passenger to the back of the stage queue.
    pub fn admit(&mut self, passenger: Passenger) {
        tracing::debug!(passenger = %passenger.name(), stage = %self.name, "queued");
        self.queue.push_back(passenger);
    }

    /// Serve queued passengers while a resource unit is free.
    ///
    /// Each served passenger holds one token for the duration of `action`;
    /// the token returns to the pool before the next passenger is taken, so
    /// processing is serial regardless of capacity and the pool is full
    /// again when this returns. Passengers still queued when no unit can be
    /// reserved are left untouched.
    ///
    /// Returns the passengers served this call, in queue order.
    pub fn process(&mut self, action: &dyn ProcessingAction) -> Vec<Passenger> {
        let mut served = Vec::new();
        while self.tokens.available() > 0 {
            let Some(passenger) = self.queue.pop_front() else {
                break;
            };
            let Some(permit) = self.tokens.try_acquire() else {
                self.queue.push_front(passenger);
                break;
            };
            tracing::info!(passenger = %passenger.name(), stage = %self.name, "processing");
            action.perform(&passenger, self.name);
            drop(permit);
            tracing::info!(passenger = %passenger.name(), stage = %self.name, "finished");
            served.push(passenger);
        }
        served
    }

    /// Whether the stage queue is empty. Pure query, no side effect.
    #[must_use]
    pub fn is_queue_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of passengers currently waiting at this stage.
    #[must_use]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}
