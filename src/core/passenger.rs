//! Passenger records and the boarding rank relation.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::FlowError;

/// Lowest accepted base priority.
pub const MIN_BASE_PRIORITY: u8 = 1;
/// Highest accepted base priority.
pub const MAX_BASE_PRIORITY: u8 = 5;

/// Unique passenger identifier.
///
/// Names on a manifest are not required to be unique; events and run reports
/// key on this id instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassengerId(Uuid);

impl PassengerId {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PassengerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Ordering key for admission: late passengers first, then higher effective
/// priority.
///
/// The derived lexicographic [`Ord`] is the rank relation: a greater rank is
/// served earlier. Passengers equal on both fields are rank-tied; the
/// admission queue breaks those ties by arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BoardingRank {
    /// Late passengers outrank on-time passengers regardless of priority.
    pub is_late: bool,
    /// Base priority plus the frequent-flyer boost, 1-6.
    pub effective_priority: u8,
}

/// A passenger flowing through the terminal pipeline.
///
/// Immutable after construction. The frequent-flyer flag is consumed at
/// construction time: it contributes `+1` to the effective priority and is
/// not stored. Only [`Passenger::rank`] participates in ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passenger {
    id: PassengerId,
    name: String,
    base_priority: u8,
    effective_priority: u8,
    is_late: bool,
}

impl Passenger {
    /// Create a passenger, rejecting base priorities outside 1-5.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidPriority`] when `base_priority` is out of
    /// range.
    pub fn new(
        name: impl Into<String>,
        base_priority: i32,
        is_late: bool,
        frequent_flyer: bool,
    ) -> Result<Self, FlowError> {
        let name = name.into();
        let Some(base) = u8::try_from(base_priority)
            .ok()
            .filter(|p| (MIN_BASE_PRIORITY..=MAX_BASE_PRIORITY).contains(p))
        else {
            return Err(FlowError::InvalidPriority {
                name,
                value: base_priority,
            });
        };
        Ok(Self::build(name, base, is_late, frequent_flyer))
    }

    /// Create a passenger, clamping the base priority into 1-5 before the
    /// frequent-flyer boost is applied.
    #[must_use]
    pub fn with_clamped_priority(
        name: impl Into<String>,
        base_priority: i32,
        is_late: bool,
        frequent_flyer: bool,
    ) -> Self {
        let clamped = base_priority
            .clamp(i32::from(MIN_BASE_PRIORITY), i32::from(MAX_BASE_PRIORITY));
        let base = u8::try_from(clamped).unwrap_or(MIN_BASE_PRIORITY);
        Self::build(name.into(), base, is_late, frequent_flyer)
    }

    fn build(name: String, base_priority: u8, is_late: bool, frequent_flyer: bool) -> Self {
        let effective_priority = base_priority + u8::from(frequent_flyer);
        Self {
            id: PassengerId::new(),
            name,
            base_priority,
            effective_priority,
            is_late,
        }
    }

    /// Unique identifier assigned at construction.
    #[must_use]
    pub const fn id(&self) -> PassengerId {
        self.id
    }

    /// Display name from the manifest.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base priority as accepted or clamped at construction.
    #[must_use]
    pub const fn base_priority(&self) -> u8 {
        self.base_priority
    }

    /// Base priority plus the frequent-flyer boost.
    #[must_use]
    pub const fn effective_priority(&self) -> u8 {
        self.effective_priority
    }

    /// Whether the passenger is running late for their flight.
    #[must_use]
    pub const fn is_late(&self) -> bool {
        self.is_late
    }

    /// The admission ordering key.
    #[must_use]
    pub const fn rank(&self) -> BoardingRank {
        BoardingRank {
            is_late: self.is_late,
            effective_priority: self.effective_priority,
        }
    }
}
