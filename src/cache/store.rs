//! Cost Store Module
//!
//! Single-threaded cache engine combining HashMap storage with LRU tracking
//! and dual count/cost limits.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, LruTracker, PutOutcome};
use crate::error::{CacheError, Result};

// == Cost Store ==
/// Cache storage bounded by entry count and by total cost.
///
/// A limit of 0 disables that bound.
#[derive(Debug)]
pub struct CostStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Sum of resident entry costs
    total_cost: u64,
    count_limit: usize,
    cost_limit: u64,
}

impl<V> Default for CostStore<V> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<V> CostStore<V> {
    // == Constructor ==
    /// Creates a new CostStore with the given limits.
    ///
    /// # Arguments
    /// * `count_limit` - Maximum number of resident entries, 0 for unbounded
    /// * `cost_limit` - Maximum total cost of resident entries, 0 for unbounded
    pub fn new(count_limit: usize, cost_limit: u64) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            total_cost: 0,
            count_limit,
            cost_limit,
        }
    }

    // == Put ==
    /// Inserts or replaces the entry for `key`, then evicts least recently
    /// used entries until both limits hold.
    ///
    /// An entry whose own cost exceeds the cost limit goes through the same
    /// eviction loop and ends up not retained; the outcome reports that as
    /// `stored == false`.
    ///
    /// # Errors
    /// `InvalidArgument` if `key` is empty, `cost` is negative, or the new
    /// total cost would not fit in a `u64` (only reachable with the cost
    /// bound disabled). Nothing is mutated in that case.
    pub fn put(&mut self, key: impl Into<String>, value: V, cost: i64) -> Result<PutOutcome> {
        let key = key.into();
        if key.is_empty() {
            return Err(CacheError::InvalidArgument(
                "key must not be empty".to_string(),
            ));
        }
        let cost = u64::try_from(cost).map_err(|_| {
            CacheError::InvalidArgument(format!("cost must be non-negative, got {}", cost))
        })?;

        // Size the new total before touching any state.
        let replaced_cost = self.entries.get(&key).map(|old| old.cost);
        let total_cost = (self.total_cost - replaced_cost.unwrap_or(0))
            .checked_add(cost)
            .ok_or_else(|| {
                CacheError::InvalidArgument(format!(
                    "cost {} would overflow the total cost of {}",
                    cost, self.total_cost
                ))
            })?;

        self.entries.insert(key.clone(), CacheEntry::new(value, cost));
        self.total_cost = total_cost;
        self.lru.touch(&key);
        let replaced = replaced_cost.is_some();

        let evicted = self.evict_to_fit();
        let stored = self.entries.contains_key(&key);
        if !stored {
            debug!(key = %key, cost, cost_limit = self.cost_limit, "entry exceeds cost limit, not retained");
        }

        self.sync_stats();
        Ok(PutOutcome {
            stored,
            replaced,
            evicted,
        })
    }

    // == Get ==
    /// Retrieves a value by key and marks it most recently used.
    ///
    /// Returns None on a miss without touching recency.
    pub fn get(&mut self, key: &str) -> Option<Arc<V>> {
        match self.entries.get(key) {
            Some(entry) => {
                let value = entry.share();
                self.lru.touch(key);
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Retrieves a value without refreshing recency or recording stats.
    pub fn peek(&self, key: &str) -> Option<Arc<V>> {
        self.entries.get(key).map(CacheEntry::share)
    }

    // == Remove ==
    /// Removes an entry by key. Returns false if the key was absent.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(entry) => {
                self.lru.remove(key);
                self.total_cost -= entry.cost;
                self.sync_stats();
                true
            }
            None => false,
        }
    }

    // == Clear ==
    /// Removes every entry and returns how many were dropped.
    ///
    /// Cumulative hit/miss/eviction counters are kept.
    pub fn clear(&mut self) -> usize {
        let cleared = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.total_cost = 0;
        self.sync_stats();
        cleared
    }

    // == Introspection ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the sum of resident entry costs.
    pub fn current_cost(&self) -> u64 {
        self.total_cost
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn count_limit(&self) -> usize {
        self.count_limit
    }

    pub fn cost_limit(&self) -> u64 {
        self.cost_limit
    }

    /// Returns resident keys ordered from most to least recently used.
    pub fn keys(&self) -> Vec<String> {
        self.lru.keys()
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    // == Eviction ==
    fn over_limit(&self) -> bool {
        (self.count_limit > 0 && self.entries.len() > self.count_limit)
            || (self.cost_limit > 0 && self.total_cost > self.cost_limit)
    }

    /// Evicts least recently used entries until both limits are satisfied.
    fn evict_to_fit(&mut self) -> Vec<String> {
        let mut evicted = Vec::new();
        while self.over_limit() {
            let Some(key) = self.lru.evict_oldest() else {
                break;
            };
            if let Some(entry) = self.entries.remove(&key) {
                self.total_cost -= entry.cost;
                self.stats.record_eviction();
                debug!(key = %key, cost = entry.cost, "evicted entry");
            }
            evicted.push(key);
        }
        evicted
    }

    fn sync_stats(&mut self) {
        debug_assert_eq!(self.lru.len(), self.entries.len());
        self.stats.set_resident(self.entries.len(), self.total_cost);
    }
}
