//! Cache Module
//!
//! Provides an in-memory cache bounded by entry count and total cost, with
//! LRU eviction.

mod bounded;
mod entry;
mod lru;
mod outcome;
mod stats;
mod store;


// Re-export public types
pub use bounded::BoundedCostCache;
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use outcome::PutOutcome;
pub use stats::CacheStats;
pub use store::CostStore;
