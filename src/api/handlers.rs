//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::cache::BoundedCostCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, DeleteResponse, GetResponse, HealthResponse, SetRequest, SetResponse,
    StatsResponse,
};

/// Application state shared across all handlers.
///
/// Holds the one cache instance this server was constructed with. The cache
/// synchronizes internally, so handlers only need a shared reference.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<BoundedCostCache<String>>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: BoundedCostCache<String>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState with a cache sized from the Config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(BoundedCostCache::from_config(config))
    }
}

/// Handler for PUT /set
///
/// Stores a value, charging the request's cost (or the value length).
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    let cost = req.effective_cost();
    let outcome = state.cache.put(req.key.clone(), req.value, cost)?;
    if outcome.eviction_count() > 0 {
        debug!(key = %req.key, evicted = outcome.eviction_count(), "set caused evictions");
    }

    Ok(Json(SetResponse::new(req.key, outcome)))
}

/// Handler for GET /get/:key
///
/// A miss maps to 404; the cache itself reports it as `None`.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state
        .cache
        .get(&key)
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value.as_str())))
}

/// Handler for DELETE /del/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DeleteResponse> {
    let removed = state.cache.remove(&key);
    Json(DeleteResponse::new(key, removed))
}

/// Handler for POST /clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    Json(ClearResponse::new(state.cache.clear()))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = &state.cache;
    Json(StatsResponse::new(
        &cache.stats(),
        cache.count_limit(),
        cache.cost_limit(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
