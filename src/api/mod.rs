//! API Module
//!
//! HTTP handlers and routing that expose one cache instance as a JSON API.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
