//! Cost Cache - a bounded in-memory cache
//!
//! Entries are bounded both by count and by total caller-supplied cost, with
//! least-recently-used eviction, plus a small HTTP server to drive it.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{BoundedCostCache, PutOutcome};
pub use config::Config;
pub use error::CacheError;
