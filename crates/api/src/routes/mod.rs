pub mod db_status;
pub mod jobs;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list projects
/// /jobs                                            list jobs
/// /jobs/{id}                                       get job by id
/// /db-status                                       live database report
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .nest("/jobs", jobs::router())
        .merge(db_status::router())
}
