//! Shared application state threaded through all handlers.

use std::sync::Arc;

use launchlist_db::DbPool;

use crate::config::ServerConfig;

/// Application state shared across all request handlers.
///
/// Cloning is cheap: the pool is internally reference-counted and the config
/// sits behind an [`Arc`].
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: DbPool,
    /// Server configuration loaded at startup.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new application state from a pool and configuration.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
