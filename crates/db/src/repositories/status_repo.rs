//! Introspection queries against the connected MySQL server.

use sqlx::MySqlPool;

use crate::models::status::ServerStatus;

pub struct StatusRepo;

impl StatusRepo {
    /// Collect version, uptime, schema and connection facts.
    pub async fn server_status(pool: &MySqlPool) -> Result<ServerStatus, sqlx::Error> {
        let (version, current_database): (String, Option<String>) =
            sqlx::query_as("SELECT VERSION(), DATABASE()")
                .fetch_one(pool)
                .await?;

        let (table_count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = DATABASE()",
        )
        .fetch_one(pool)
        .await?;

        let uptime_secs = Self::global_status(pool, "Uptime").await?;
        let connected_threads = Self::global_status(pool, "Threads_connected").await?;

        Ok(ServerStatus {
            version,
            uptime_secs,
            current_database,
            table_count,
            connected_threads,
        })
    }

    /// Read one numeric server status variable. Missing or non-numeric
    /// values read as 0.
    async fn global_status(pool: &MySqlPool, name: &str) -> Result<i64, sqlx::Error> {
        let value: Option<(String,)> = sqlx::query_as(
            "SELECT VARIABLE_VALUE FROM performance_schema.global_status WHERE VARIABLE_NAME = ?",
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(value
            .and_then(|(v,)| v.trim().parse().ok())
            .unwrap_or_default())
    }
}
