//! Bounded Cost Cache Module
//!
//! Thread-safe front for [`CostStore`]: every operation takes one exclusive
//! lock for its full duration, so calls are linearizable. `get` needs the
//! exclusive lock too since it reorders recency.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{CacheStats, CostStore, PutOutcome};
use crate::config::Config;
use crate::error::Result;

// == Bounded Cost Cache ==
/// Concurrent cache bounded by entry count and total cost, evicting least
/// recently used entries when either bound is exceeded.
///
/// Owners share it behind an `Arc`; there is no process-wide instance.
#[derive(Debug)]
pub struct BoundedCostCache<V> {
    inner: Mutex<CostStore<V>>,
}

impl<V> Default for BoundedCostCache<V> {
    /// Creates a cache with both bounds disabled.
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<V> BoundedCostCache<V> {
    /// Creates a cache with the given limits; 0 disables a bound.
    pub fn new(count_limit: usize, cost_limit: u64) -> Self {
        Self {
            inner: Mutex::new(CostStore::new(count_limit, cost_limit)),
        }
    }

    /// Creates a cache with the limits from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.count_limit, config.cost_limit)
    }

    /// See [`CostStore::put`].
    pub fn put(&self, key: impl Into<String>, value: V, cost: i64) -> Result<PutOutcome> {
        self.inner.lock().put(key, value, cost)
    }

    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        self.inner.lock().get(key)
    }

    pub fn peek(&self, key: &str) -> Option<Arc<V>> {
        self.inner.lock().peek(key)
    }

    pub fn remove(&self, key: &str) -> bool {
        self.inner.lock().remove(key)
    }

    /// Drops every entry, returning how many were resident.
    pub fn clear(&self) -> usize {
        self.inner.lock().clear()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn current_cost(&self) -> u64 {
        self.inner.lock().current_cost()
    }

    pub fn count_limit(&self) -> usize {
        self.inner.lock().count_limit()
    }

    pub fn cost_limit(&self) -> u64 {
        self.inner.lock().cost_limit()
    }

    /// Resident keys, most recently used first.
    pub fn keys(&self) -> Vec<String> {
        self.inner.lock().keys()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }
}
