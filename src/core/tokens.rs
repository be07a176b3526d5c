//! Guarded resource token pool backing each stage's capacity.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::core::FlowError;

/// A bounded pool of interchangeable resource units.
///
/// `available` always satisfies `0 <= available <= capacity`. Acquisition
/// hands out a [`TokenPermit`] whose `Drop` returns the unit, so a unit can
/// never leak across a processing call. The counter uses a CAS loop rather
/// than plain arithmetic so the bounds hold structurally even if a stage is
/// later upgraded to concurrent checkout.
#[derive(Debug)]
pub struct ResourceTokens {
    capacity: u32,
    available: AtomicU32,
}

impl ResourceTokens {
    /// Create a pool of `capacity` units.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidCapacity`] when `capacity` is zero; a
    /// stage with no units could never advance a passenger.
    pub fn new(stage: &str, capacity: u32) -> Result<Self, FlowError> {
        if capacity == 0 {
            return Err(FlowError::InvalidCapacity {
                stage: stage.to_string(),
            });
        }
        Ok(Self {
            capacity,
            available: AtomicU32::new(capacity),
        })
    }

    /// Total units this pool was created with.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Units currently free.
    #[must_use]
    pub fn available(&self) -> u32 {
        self.available.load(Ordering::Acquire)
    }

    /// Try to reserve one unit.
    ///
    /// Returns `None` when every unit is in use. The returned permit releases
    /// the unit when dropped.
    #[must_use]
    pub fn try_acquire(&self) -> Option<TokenPermit<'_>> {
        let mut current = self.available.load(Ordering::Acquire);
        loop {
            if current == 0 {
                return None;
            }
            match self.available.compare_exchange_weak(
                current,
                current - 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return Some(TokenPermit { pool: self }),
                Err(actual) => current = actual,
            }
        }
    }

    fn release(&self) {
        let prev = self.available.fetch_add(1, Ordering::Release);
        // A release beyond capacity means a permit was forged or double-freed.
        assert!(prev < self.capacity, "resource token released past capacity");
    }
}

/// Exclusive hold on one resource unit, returned on drop.
#[derive(Debug)]
pub struct TokenPermit<'a> {
    pool: &'a ResourceTokens,
}

impl Drop for TokenPermit<'_> {
    fn drop(&mut self) {
        self.pool.release();
    }
}
