//! Data access layer for the devsite API.
//!
//! Resolves the MySQL target from the environment, waits for the server
//! under a bounded [`RetryPolicy`], and exposes read-only repositories over
//! the `projects`, `jobs` and `tags` tables.

use sqlx::mysql::{MySqlConnection, MySqlPoolOptions};
use sqlx::Connection;

pub mod config;
pub mod models;
pub mod repositories;
pub mod retry;

pub use config::DbConfig;
pub use retry::RetryPolicy;

pub type DbPool = sqlx::MySqlPool;

/// Build a pool that connects lazily on first use.
///
/// No I/O happens here; the first query opens the first connection.
pub fn create_pool(config: &DbConfig) -> DbPool {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(config.connect_options())
}

/// Open one connection outside any pool, ping it and close it.
///
/// Fails as soon as the driver does, with the driver's own error.
pub async fn ping(config: &DbConfig) -> Result<(), sqlx::Error> {
    let mut conn = MySqlConnection::connect_with(&config.connect_options()).await?;
    conn.ping().await?;
    conn.close().await
}

/// Block until the database answers a [`ping`], retrying under
/// `config.retry`, then build the pool. Returns the last ping error once
/// the budget is spent.
pub async fn connect(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    retry::retry(&config.retry, "database", || ping(config)).await?;
    tracing::info!(host = %config.host, port = config.port, "Database reachable");
    Ok(create_pool(config))
}
