//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the SET operation (PUT /set)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
/// - `cost`: Optional cost; defaults to the value's length in bytes
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
    /// Optional cost, signed so negative input reaches validation
    #[serde(default)]
    pub cost: Option<i64>,
}

impl SetRequest {
    /// Returns the cost to charge for this value.
    pub fn effective_cost(&self) -> i64 {
        self.cost
            .unwrap_or_else(|| i64::try_from(self.value.len()).unwrap_or(i64::MAX))
    }
}
