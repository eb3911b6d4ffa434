//! Configuration Module
//!
//! Handles loading cache limits and server settings from environment variables.

use std::env;

/// Default maximum number of resident entries.
pub const DEFAULT_COUNT_LIMIT: usize = 100;

/// Default maximum total cost (100 MiB).
pub const DEFAULT_COST_LIMIT: u64 = 1024 * 1024 * 100;

/// Cache and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// A limit of 0 means the corresponding bound is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub count_limit: usize,
    /// Maximum sum of entry costs the cache can hold
    pub cost_limit: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `COUNT_LIMIT` - Maximum resident entries (default: 100)
    /// - `COST_LIMIT` - Maximum total cost (default: 104857600)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            count_limit: parse_env("COUNT_LIMIT").unwrap_or(defaults.count_limit),
            cost_limit: parse_env("COST_LIMIT").unwrap_or(defaults.cost_limit),
            server_port: parse_env("SERVER_PORT").unwrap_or(defaults.server_port),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count_limit: DEFAULT_COUNT_LIMIT,
            cost_limit: DEFAULT_COST_LIMIT,
            server_port: 3000,
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
