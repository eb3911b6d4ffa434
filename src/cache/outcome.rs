//! Put Outcome Module
//!
//! Structured result of a `put`, replacing free-form status messages.

use serde::Serialize;

// == Put Outcome ==
/// What a successful `put` did to the cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PutOutcome {
    /// The incoming entry is resident after the call
    pub stored: bool,
    /// An entry already existed under the key and was replaced
    pub replaced: bool,
    /// Keys evicted by this call, least recently used first
    pub evicted: Vec<String>,
}

impl PutOutcome {
    /// True when the incoming entry was evicted by its own insertion,
    /// i.e. its cost alone exceeds the cost limit.
    pub fn rejected(&self) -> bool {
        !self.stored
    }

    pub fn eviction_count(&self) -> usize {
        self.evicted.len()
    }
}
