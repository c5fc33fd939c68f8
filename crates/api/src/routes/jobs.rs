use axum::routing::get;
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

/// Job routes mounted at `/jobs`.
///
/// ```text
/// GET    /                  -> list_jobs
/// GET    /{id}              -> get_job
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::list_jobs))
        .route("/{id}", get(jobs::get_job))
}
