#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::MySqlPool;
use tower::ServiceExt;

use devsite_api::config::ServerConfig;
use devsite_api::router::build_app_router;
use devsite_api::state::AppState;
use devsite_db::DbConfig;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Database target pointing at a port nothing listens on, with an acquire
/// timeout short enough that backend failures surface quickly.
pub fn unreachable_db_config() -> DbConfig {
    let mut config = DbConfig::from_lookup(|key| match key {
        "MYSQL_HOST" => Some("127.0.0.1:1".to_string()),
        _ => None,
    });
    config.acquire_timeout = Duration::from_millis(200);
    config
}

/// Build the full application router around the given pool.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack.
pub fn build_test_app(pool: MySqlPool) -> Router {
    build_app_with(pool, DbConfig::from_lookup(|_| None))
}

/// Build the app around a lazily connecting pool that never reaches a
/// server. Every query fails with a pool timeout.
pub fn build_offline_app() -> Router {
    let db_config = unreachable_db_config();
    let pool = devsite_db::create_pool(&db_config);
    build_app_with(pool, db_config)
}

fn build_app_with(pool: MySqlPool, db_config: DbConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        db_config: Arc::new(db_config),
    };
    build_app_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
