use std::sync::Arc;

use devsite_db::{DbConfig, DbPool};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted internally and configs sit
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, safe for concurrent use across requests.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Resolved database target, reported by `/api/db-status`.
    pub db_config: Arc<DbConfig>,
}
