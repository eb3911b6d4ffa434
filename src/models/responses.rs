//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies. Human readable
//! messages live here, never in the cache itself.

use serde::Serialize;

use crate::cache::{CacheStats, PutOutcome};

/// Response body for the GET operation (GET /get/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for the SET operation (PUT /set)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Status message
    pub message: String,
    /// The key that was set
    pub key: String,
    /// Whether the entry is resident after the call
    pub stored: bool,
    /// Whether an existing entry was replaced
    pub replaced: bool,
    /// Keys evicted to make room, least recently used first
    pub evicted: Vec<String>,
}

impl SetResponse {
    /// Builds the response from the outcome of a `put`.
    pub fn new(key: impl Into<String>, outcome: PutOutcome) -> Self {
        let key = key.into();
        let message = if outcome.rejected() {
            format!("Key '{}' exceeds the cost limit and was not cached", key)
        } else if outcome.replaced {
            format!("Key '{}' replaced in cache", key)
        } else {
            format!("Key '{}' added to cache", key)
        };
        Self {
            message,
            key,
            stored: outcome.stored,
            replaced: outcome.replaced,
            evicted: outcome.evicted,
        }
    }
}

/// Response body for the DELETE operation (DELETE /del/:key)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Status message
    pub message: String,
    /// The key that was targeted
    pub key: String,
    /// Whether an entry was actually removed
    pub removed: bool,
}

impl DeleteResponse {
    pub fn new(key: impl Into<String>, removed: bool) -> Self {
        let key = key.into();
        let message = if removed {
            format!("Key '{}' removed from cache", key)
        } else {
            format!("Key '{}' was not cached", key)
        };
        Self {
            message,
            key,
            removed,
        }
    }
}

/// Response body for the CLEAR operation (POST /clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Number of entries dropped
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} entries", cleared),
            cleared,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Current sum of entry costs
    pub total_cost: u64,
    /// Configured entry limit, 0 when unbounded
    pub count_limit: usize,
    /// Configured cost limit, 0 when unbounded
    pub cost_limit: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, count_limit: usize, cost_limit: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            total_cost: stats.total_cost,
            count_limit,
            cost_limit,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
