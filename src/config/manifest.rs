//! Passenger manifests: the input-collaborator boundary.
//!
//! The core consumes exactly these tuples; it has no dependency on how they
//! were gathered (console prompts, a file, an API front-end).

use serde::{Deserialize, Serialize};

use crate::config::PriorityPolicy;
use crate::core::{FlowError, Passenger};

/// Construction parameters for one passenger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerSpec {
    /// Display name; not required to be unique.
    pub name: String,
    /// Base priority, semantically 1-5 with 5 most urgent. Out-of-range
    /// values are handled per [`PriorityPolicy`].
    pub priority: i32,
    /// Whether the passenger is late for their flight.
    #[serde(default)]
    pub late: bool,
    /// Frequent flyers get a one-level priority boost.
    #[serde(default)]
    pub frequent_flyer: bool,
}

impl PassengerSpec {
    /// Construct the passenger, applying the given priority policy.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidPriority`] under [`PriorityPolicy::Reject`]
    /// when the priority is out of range.
    pub fn build(&self, policy: PriorityPolicy) -> Result<Passenger, FlowError> {
        match policy {
            PriorityPolicy::Reject => {
                Passenger::new(&self.name, self.priority, self.late, self.frequent_flyer)
            }
            PriorityPolicy::Clamp => Ok(Passenger::with_clamped_priority(
                &self.name,
                self.priority,
                self.late,
                self.frequent_flyer,
            )),
        }
    }
}

/// A finite ordered list of passengers to schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Passengers in arrival order.
    pub passengers: Vec<PassengerSpec>,
}

impl Manifest {
    /// Parse a manifest from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Config`] on malformed JSON.
    pub fn from_json_str(input: &str) -> Result<Self, FlowError> {
        serde_json::from_str(input).map_err(|e| FlowError::Config(format!("parse error: {e}")))
    }
}
