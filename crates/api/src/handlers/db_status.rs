//! Live database status report.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use devsite_db::repositories::StatusRepo;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /api/db-status`.
///
/// Server facts are present only when `connected` is true; `error` only
/// when it is false.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbStatusResponse {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_threads: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub host: String,
    pub port: u16,
    pub timestamp: DateTime<Utc>,
}

/// GET /api/db-status
///
/// 200 with server facts, or 500 with `connected: false`. The underlying
/// error is logged and never returned.
pub async fn db_status(State(state): State<AppState>) -> impl IntoResponse {
    let host = state.db_config.host.clone();
    let port = state.db_config.port;
    let timestamp = Utc::now();

    match StatusRepo::server_status(&state.pool).await {
        Ok(status) => (
            StatusCode::OK,
            Json(DbStatusResponse {
                connected: true,
                version: Some(status.version),
                uptime: Some(status.uptime_secs),
                current_database: status.current_database,
                table_count: Some(status.table_count),
                connected_threads: Some(status.connected_threads),
                error: None,
                host,
                port,
                timestamp,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, %host, port, "Database status check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DbStatusResponse {
                    connected: false,
                    version: None,
                    uptime: None,
                    current_database: None,
                    table_count: None,
                    connected_threads: None,
                    error: Some("database unreachable"),
                    host,
                    port,
                    timestamp,
                }),
            )
        }
    }
}
