//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with their cost.

use std::sync::Arc;

// == Cache Entry ==
/// A resident value together with the cost it contributes to the cache total.
///
/// The value is shared behind an `Arc` so lookups can hand it out without
/// cloning the payload or holding the cache lock.
#[derive(Debug)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: Arc<V>,
    /// Caller supplied weight of the value
    pub cost: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry owning `value`.
    pub fn new(value: V, cost: u64) -> Self {
        Self {
            value: Arc::new(value),
            cost,
        }
    }

    /// Returns a shared handle to the value.
    pub fn share(&self) -> Arc<V> {
        Arc::clone(&self.value)
    }
}
